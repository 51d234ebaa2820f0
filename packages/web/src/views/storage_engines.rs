//! Storage engine management: where uploaded files physically land.

use api::models::{EngineKind, NewStorageEngine, StorageEnginePatch};
use dioxus::prelude::*;

#[component]
pub fn StorageEngines() -> Element {
    let client = ui::use_api();
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<i32>::None);
    let mut name = use_signal(String::new);
    let mut comments = use_signal(String::new);
    let mut kind = use_signal(|| EngineKind::Internal);
    let mut config = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let list_client = client.clone();
    let mut engines = use_resource(move || {
        let client = list_client.clone();
        async move { client.storage_engines().list().await }
    });

    let submit_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = submit_client.clone();
        spawn(async move {
            let engine_name = name().trim().to_string();
            if engine_name.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            let engine_config = {
                let raw = config();
                if raw.trim().is_empty() {
                    None
                } else {
                    Some(raw)
                }
            };

            let result = match editing() {
                Some(id) => client
                    .storage_engines()
                    .update(
                        id,
                        &StorageEnginePatch {
                            name: Some(engine_name),
                            comments: Some(comments()),
                            kind: Some(kind()),
                            config: engine_config,
                        },
                    )
                    .await
                    .map(|_| ()),
                None => client
                    .storage_engines()
                    .create(&NewStorageEngine {
                        name: engine_name,
                        comments: Some(comments()),
                        kind: kind(),
                        config: engine_config,
                    })
                    .await
                    .map(|_| ()),
            };

            match result {
                Ok(()) => {
                    error.set(None);
                    show_form.set(false);
                    editing.set(None);
                    name.set(String::new());
                    comments.set(String::new());
                    kind.set(EngineKind::Internal);
                    config.set(String::new());
                    engines.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div { class: "view",
            header { class: "view-header",
                h2 { "Storage engines" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        name.set(String::new());
                        comments.set(String::new());
                        kind.set(EngineKind::Internal);
                        config.set(String::new());
                        show_form.set(true);
                    },
                    "New engine"
                }
            }

            if let Some(err) = error() {
                div { class: "error-banner", "{err}" }
            }

            if show_form() {
                form { class: "editor-form", onsubmit: handle_submit,
                    h3 {
                        if editing().is_some() { "Edit engine" } else { "New engine" }
                    }

                    label { class: "field-label", "Name" }
                    input {
                        r#type: "text",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    label { class: "field-label", "Comments" }
                    input {
                        r#type: "text",
                        value: comments(),
                        oninput: move |evt: FormEvent| comments.set(evt.value()),
                    }

                    label { class: "field-label", "Type" }
                    select {
                        value: kind().as_str(),
                        onchange: move |evt: FormEvent| {
                            kind.set(if evt.value() == "s3" {
                                EngineKind::S3
                            } else {
                                EngineKind::Internal
                            });
                        },
                        option { value: "internal", "Internal (server disk)" }
                        option { value: "s3", "S3-compatible object store" }
                    }

                    label { class: "field-label", "Configuration" }
                    textarea {
                        class: "cell-mono",
                        rows: 6,
                        placeholder: "Engine-specific configuration",
                        value: config(),
                        oninput: move |evt: FormEvent| config.set(evt.value()),
                    }

                    div { class: "form-actions",
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| show_form.set(false),
                            "Cancel"
                        }
                    }
                }
            }

            {match &*engines.read() {
                Some(Ok(list)) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Type" }
                                th { "Comments" }
                                th { "" }
                            }
                        }
                        tbody {
                            for engine in list.iter() {
                                tr { key: "{engine.id}",
                                    td { class: "cell-title", "{engine.name}" }
                                    td { {engine.kind.as_str()} }
                                    td { "{engine.comments}" }
                                    td { class: "cell-actions",
                                        button {
                                            class: "btn btn-small",
                                            onclick: {
                                                let engine = engine.clone();
                                                move |_| {
                                                    editing.set(Some(engine.id));
                                                    name.set(engine.name.clone());
                                                    comments.set(engine.comments.clone());
                                                    kind.set(engine.kind);
                                                    config.set(engine.config.clone().unwrap_or_default());
                                                    show_form.set(true);
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-small btn-danger",
                                            onclick: {
                                                let id = engine.id;
                                                let client = client.clone();
                                                move |_| {
                                                    let client = client.clone();
                                                    spawn(async move {
                                                        match client.storage_engines().delete(id).await {
                                                            Ok(()) => {
                                                                error.set(None);
                                                                engines.restart();
                                                            }
                                                            Err(err) => {
                                                                error.set(Some(err.to_string()));
                                                            }
                                                        }
                                                    });
                                                }
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                            if list.is_empty() {
                                tr {
                                    td { colspan: 4, class: "cell-empty", "No storage engines configured" }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error-banner", "{err}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading storage engines\u{2026}" }
                },
            }}
        }
    }
}
