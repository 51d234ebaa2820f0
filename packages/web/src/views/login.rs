//! Login page with the username/password form.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = ui::use_session();
    let client = ui::use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let user = username().trim().to_string();
            let pass = password();
            if user.is_empty() || pass.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            loading.set(true);
            match ui::session::login(session, &client, &user, &pass).await {
                Ok(()) => {
                    nav.replace(Route::Posts {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "login-page",
            h1 { class: "login-title", "Bramble" }
            p { class: "login-subtitle", "Sign in to manage your site" }

            form { class: "login-form", onsubmit: handle_login,
                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    autofocus: true,
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in\u{2026}" } else { "Sign in" }
                }
            }
        }
    }
}
