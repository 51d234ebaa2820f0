//! Attachment list with upload and delete.

use api::models::AttachmentQuery;
use dioxus::prelude::*;

use super::short_date;

const PAGE_SIZE: u64 = 20;

#[component]
pub fn Attachments() -> Element {
    let client = ui::use_api();
    let mut page = use_signal(|| 1u64);
    let mut engine_filter = use_signal(|| Option::<i32>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);

    // The engine list feeds the filter dropdown and the upload target.
    let engines_client = client.clone();
    let engines = use_resource(move || {
        let client = engines_client.clone();
        async move {
            match client.storage_engines().list().await {
                Ok(engines) => engines,
                Err(err) => {
                    tracing::warn!("storage engine list unavailable: {err}");
                    Vec::new()
                }
            }
        }
    });

    let list_client = client.clone();
    let mut attachments = use_resource(move || {
        let client = list_client.clone();
        async move {
            client
                .attachments()
                .list(&AttachmentQuery {
                    page: Some(page()),
                    size: Some(PAGE_SIZE),
                    storage_engine_id: engine_filter(),
                    ..Default::default()
                })
                .await
        }
    });

    let upload_client = client.clone();
    let handle_upload = move |evt: FormEvent| {
        let client = upload_client.clone();
        spawn(async move {
            let Some(file_engine) = evt.files() else {
                return;
            };
            let Some(file_name) = file_engine.files().first().cloned() else {
                return;
            };

            uploading.set(true);
            error.set(None);
            match file_engine.read_file(&file_name).await {
                Some(bytes) => {
                    match client
                        .attachments()
                        .upload(&file_name, bytes, engine_filter())
                        .await
                    {
                        Ok(_) => attachments.restart(),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                }
                None => error.set(Some(format!("could not read {file_name}"))),
            }
            uploading.set(false);
        });
    };

    rsx! {
        div { class: "view",
            header { class: "view-header",
                h2 { "Attachments" }
                div { class: "view-actions",
                    select {
                        class: "filter-select",
                        onchange: move |evt: FormEvent| {
                            engine_filter.set(evt.value().parse::<i32>().ok());
                            page.set(1);
                        },
                        option { value: "", "All engines" }
                        for engine in engines().unwrap_or_default() {
                            option { value: "{engine.id}", "{engine.name}" }
                        }
                    }
                    label { class: "btn btn-primary upload-label",
                        if uploading() { "Uploading\u{2026}" } else { "Upload file" }
                        input {
                            r#type: "file",
                            class: "upload-input",
                            disabled: uploading(),
                            onchange: handle_upload,
                        }
                    }
                }
            }

            if let Some(err) = error() {
                div { class: "error-banner", "{err}" }
            }

            {match &*attachments.read() {
                Some(Ok(list)) => {
                    let summary = format!(
                        "Page {} / {} \u{00b7} {} files",
                        list.page,
                        list.total_pages.max(1),
                        list.total
                    );
                    rsx! {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Path" }
                                    th { "MIME" }
                                    th { "Hash" }
                                    th { "Engine" }
                                    th { "Created" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for attachment in list.items.iter() {
                                    tr { key: "{attachment.id}",
                                        td { class: "cell-mono", "{attachment.path}" }
                                        td { "{attachment.mime}" }
                                        td { class: "cell-mono cell-hash", "{attachment.hash}" }
                                        td { "{attachment.storage_engine_id}" }
                                        td { {short_date(&attachment.created_at)} }
                                        td { class: "cell-actions",
                                            button {
                                                class: "btn btn-small btn-danger",
                                                onclick: {
                                                    let id = attachment.id;
                                                    let client = client.clone();
                                                    move |_| {
                                                        let client = client.clone();
                                                        spawn(async move {
                                                            match client.attachments().delete(id).await {
                                                                Ok(()) => {
                                                                    error.set(None);
                                                                    attachments.restart();
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
                                if list.items.is_empty() {
                                    tr {
                                        td { colspan: 6, class: "cell-empty", "No attachments" }
                                    }
                                }
                            }
                        }

                        div { class: "pagination",
                            button {
                                class: "btn btn-small",
                                disabled: list.page <= 1,
                                onclick: move |_| page.set(page().saturating_sub(1).max(1)),
                                "Prev"
                            }
                            span { class: "page-indicator", "{summary}" }
                            button {
                                class: "btn btn-small",
                                disabled: list.page >= list.total_pages,
                                onclick: move |_| page.set(page() + 1),
                                "Next"
                            }
                        }
                    }
                }
                Some(Err(err)) => rsx! {
                    div { class: "error-banner", "{err}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading attachments\u{2026}" }
                },
            }}
        }
    }
}
