use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use ui::{GuardDecision, PrefsProvider, RouteClass, SessionProvider};
use views::{Attachments, Login, PostEdit, PostNew, Posts, Settings, SidebarLayout, StorageEngines};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guard)]
        #[route("/login")]
        Login {},
        #[layout(SidebarLayout)]
            #[route("/")]
            Root {},
            #[route("/posts")]
            Posts {},
            #[route("/posts/new")]
            PostNew {},
            #[route("/posts/edit/:id")]
            PostEdit { id: i32 },
            #[route("/attachments")]
            Attachments {},
            #[route("/storage")]
            StorageEngines {},
            #[route("/settings")]
            Settings {},
}

impl Route {
    /// Classification the guard decides on. Only the login route is public.
    fn class(&self) -> RouteClass {
        let login = matches!(self, Route::Login {});
        RouteClass {
            public: login,
            login,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            PrefsProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Layout over the whole route table: the `beforeEach` of this app. Waits
/// for the session to initialize (performing the single lazy fetch), then
/// allows the navigation or replaces it with the redirect target. Runs
/// again on every route change and on every session change, so a
/// mid-session logout is caught immediately.
#[component]
fn Guard() -> Element {
    let session = ui::use_session();
    let client = ui::use_api();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let fetch_started = use_hook(|| Rc::new(Cell::new(false)));

    let state = session();
    if !state.initialized {
        if !fetch_started.get() {
            fetch_started.set(true);
            spawn(async move {
                ui::session::fetch_self(session, &client).await;
            });
        }
        return rsx! {
            div { class: "guard-loading", "Loading\u{2026}" }
        };
    }

    match ui::guard::decide(route.class(), state.user.is_some()) {
        GuardDecision::Allow => rsx! {
            Outlet::<Route> {}
        },
        GuardDecision::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::RedirectToPosts => {
            nav.replace(Route::Posts {});
            rsx! {}
        }
    }
}

/// Redirect `/` to the posts list.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Posts {});
    rsx! {}
}
