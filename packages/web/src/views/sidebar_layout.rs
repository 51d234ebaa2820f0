//! Shell for the authenticated area: sidebar navigation plus the routed view.

use dioxus::prelude::*;

use ui::Theme;

use crate::Route;

#[component]
pub fn SidebarLayout() -> Element {
    let session = ui::use_session();
    let client = ui::use_api();
    let prefs = ui::use_prefs();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let collapsed = prefs().collapsed;
    let dark = prefs().theme == Theme::Dark;
    let display_name = session()
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    let nav_class = |active: bool| {
        if active {
            "nav-item active"
        } else {
            "nav-item"
        }
    };
    let on_posts = matches!(
        route,
        Route::Root {} | Route::Posts {} | Route::PostNew {} | Route::PostEdit { .. }
    );

    let logout_client = client.clone();
    let on_logout = move |_| {
        ui::session::logout(session, logout_client.http());
        nav.replace(Route::Login {});
    };

    rsx! {
        div { class: if collapsed { "admin-shell collapsed" } else { "admin-shell" },
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "brand-name",
                        if collapsed { "B" } else { "Bramble" }
                    }
                    button {
                        class: "sidebar-toggle",
                        title: "Toggle sidebar",
                        onclick: move |_| ui::prefs::toggle_collapsed(prefs),
                        if collapsed { "\u{00bb}" } else { "\u{00ab}" }
                    }
                }

                nav { class: "sidebar-nav",
                    Link { to: Route::Posts {}, class: nav_class(on_posts),
                        span { class: "icon", "\u{1F4DD}" }
                        if !collapsed {
                            span { "Posts" }
                        }
                    }
                    Link {
                        to: Route::Attachments {},
                        class: nav_class(matches!(route, Route::Attachments {})),
                        span { class: "icon", "\u{1F4CE}" }
                        if !collapsed {
                            span { "Attachments" }
                        }
                    }
                    Link {
                        to: Route::StorageEngines {},
                        class: nav_class(matches!(route, Route::StorageEngines {})),
                        span { class: "icon", "\u{1F4BE}" }
                        if !collapsed {
                            span { "Storage" }
                        }
                    }
                    Link {
                        to: Route::Settings {},
                        class: nav_class(matches!(route, Route::Settings {})),
                        span { class: "icon", "\u{2699}" }
                        if !collapsed {
                            span { "Settings" }
                        }
                    }
                }

                div { class: "sidebar-bottom",
                    button {
                        class: "sidebar-bottom-item",
                        onclick: move |_| {
                            let next = prefs.peek().theme.toggled();
                            ui::prefs::set_theme(prefs, next);
                        },
                        if dark { "\u{2600} Light" } else { "\u{263E} Dark" }
                    }
                    if !collapsed {
                        span { class: "sidebar-user", "{display_name}" }
                    }
                    button { class: "sidebar-bottom-item", onclick: on_logout, "Log out" }
                }
            }

            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}
