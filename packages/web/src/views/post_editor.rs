//! Post editor, shared between the new-post and edit-post routes.

use api::models::PostPayload;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PostNew() -> Element {
    rsx! {
        PostForm { id: None::<i32> }
    }
}

#[component]
pub fn PostEdit(id: i32) -> Element {
    rsx! {
        PostForm { id: Some(id) }
    }
}

#[component]
fn PostForm(id: Option<i32>) -> Element {
    let client = ui::use_api();
    let nav = use_navigator();
    let mut title = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // When editing, pull the existing post into the form once.
    let load_client = client.clone();
    let loaded = use_resource(move || {
        let client = load_client.clone();
        async move {
            let Some(id) = id else {
                return Ok(());
            };
            match client.posts().get(id).await {
                Ok(post) => {
                    title.set(post.title);
                    name.set(post.name);
                    content.set(post.content);
                    Ok(())
                }
                Err(err) => Err(err.to_string()),
            }
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let post_title = title().trim().to_string();
            if post_title.is_empty() {
                error.set(Some("Title is required".to_string()));
                return;
            }

            saving.set(true);
            let payload = PostPayload {
                title: Some(post_title),
                name: Some(name().trim().to_string()),
                content: Some(content()),
            };
            let result = match id {
                Some(id) => client.posts().update(id, &payload).await,
                None => client.posts().create(&payload).await,
            };
            match result {
                Ok(_) => {
                    nav.replace(Route::Posts {});
                }
                Err(err) => {
                    saving.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let heading = if id.is_some() { "Edit post" } else { "New post" };
    let still_loading = id.is_some() && loaded.read().is_none();

    rsx! {
        div { class: "view",
            header { class: "view-header",
                h2 { "{heading}" }
                button {
                    class: "btn",
                    onclick: move |_| { nav.push(Route::Posts {}); },
                    "Back"
                }
            }

            if still_loading {
                div { class: "loading", "Loading post\u{2026}" }
            } else if let Some(Err(err)) = &*loaded.read() {
                div { class: "error-banner", "{err}" }
            } else {
                form { class: "editor-form", onsubmit: handle_save,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    label { class: "field-label", "Title" }
                    input {
                        r#type: "text",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }

                    label { class: "field-label", "Slug" }
                    input {
                        r#type: "text",
                        placeholder: "my-first-post",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    label { class: "field-label", "Content" }
                    textarea {
                        class: "editor-content",
                        rows: 18,
                        value: content(),
                        oninput: move |evt: FormEvent| content.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving\u{2026}" } else { "Save" }
                    }
                }
            }
        }
    }
}
