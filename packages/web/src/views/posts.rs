//! Paginated post list. Renders exactly the page the server returns.

use api::models::PostListQuery;
use dioxus::prelude::*;

use super::short_date;
use crate::Route;

const PAGE_SIZE: u64 = 10;

#[component]
pub fn Posts() -> Element {
    let client = ui::use_api();
    let nav = use_navigator();
    let mut page = use_signal(|| 1u64);
    let mut action_error = use_signal(|| Option::<String>::None);

    let list_client = client.clone();
    let mut posts = use_resource(move || {
        let client = list_client.clone();
        async move {
            client
                .posts()
                .list(&PostListQuery {
                    page: Some(page()),
                    page_size: Some(PAGE_SIZE),
                    ..Default::default()
                })
                .await
        }
    });

    rsx! {
        div { class: "view",
            header { class: "view-header",
                h2 { "Posts" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push(Route::PostNew {}); },
                    "New post"
                }
            }

            if let Some(err) = action_error() {
                div { class: "error-banner", "{err}" }
            }

            {match &*posts.read() {
                Some(Ok(list)) => {
                    let summary = format!(
                        "Page {} / {} \u{00b7} {} posts",
                        list.page,
                        list.total_pages.max(1),
                        list.total
                    );
                    rsx! {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Slug" }
                                    th { "Created" }
                                    th { "Updated" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for post in list.posts.iter() {
                                    tr { key: "{post.id}",
                                        td { class: "cell-title", "{post.title}" }
                                        td { class: "cell-mono", "{post.name}" }
                                        td { {short_date(&post.created_at)} }
                                        td { {short_date(&post.updated_at)} }
                                        td { class: "cell-actions",
                                            button {
                                                class: "btn btn-small",
                                                onclick: {
                                                    let id = post.id;
                                                    move |_| { nav.push(Route::PostEdit { id }); }
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-small btn-danger",
                                                onclick: {
                                                    let id = post.id;
                                                    let client = client.clone();
                                                    move |_| {
                                                        let client = client.clone();
                                                        spawn(async move {
                                                            match client.posts().delete(id).await {
                                                                Ok(()) => {
                                                                    action_error.set(None);
                                                                    posts.restart();
                                                                }
                                                                Err(err) => {
                                                                    action_error.set(Some(err.to_string()));
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
                                if list.posts.is_empty() {
                                    tr {
                                        td { colspan: 5, class: "cell-empty", "No posts yet" }
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
                    div { class: "loading", "Loading posts\u{2026}" }
                },
            }}
        }
    }
}
