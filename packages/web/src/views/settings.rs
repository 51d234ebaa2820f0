//! Settings: the site settings document, site theme, admin appearance, and
//! the current user's profile.

use api::models::{ProfileUpdate, SiteSettings};
use dioxus::prelude::*;
use serde_json::Value;

use ui::Theme;

#[component]
pub fn Settings() -> Element {
    let client = ui::use_api();
    let session = ui::use_session();
    let prefs = ui::use_prefs();

    let mut site = use_signal(SiteSettings::new);
    let mut themes = use_signal(Vec::<String>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut site_error = use_signal(|| Option::<String>::None);
    let mut site_saved = use_signal(|| false);

    let mut nickname = use_signal(|| {
        session
            .peek()
            .user
            .as_ref()
            .map(|u| u.nickname.clone())
            .unwrap_or_default()
    });
    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut profile_error = use_signal(|| Option::<String>::None);
    let mut profile_saved = use_signal(|| false);

    let load_client = client.clone();
    let _loader = use_resource(move || {
        let client = load_client.clone();
        async move {
            match client.settings().get().await {
                Ok(doc) => site.set(doc),
                Err(err) => load_error.set(Some(err.to_string())),
            }
            match client.settings().themes().await {
                Ok(list) => themes.set(list),
                Err(err) => tracing::warn!("theme list unavailable: {err}"),
            }
        }
    });

    let save_client = client.clone();
    let handle_save_site = move |evt: FormEvent| {
        evt.prevent_default();
        let client = save_client.clone();
        spawn(async move {
            site_saved.set(false);
            match client.settings().update(&site()).await {
                Ok(doc) => {
                    site.set(doc);
                    site_error.set(None);
                    site_saved.set(true);
                }
                Err(err) => site_error.set(Some(err.to_string())),
            }
        });
    };

    let profile_client = client.clone();
    let handle_save_profile = move |evt: FormEvent| {
        evt.prevent_default();
        let client = profile_client.clone();
        spawn(async move {
            profile_saved.set(false);

            let old = old_password();
            let new = new_password();
            if old.is_empty() != new.is_empty() {
                profile_error.set(Some(
                    "Both password fields are required to change the password".to_string(),
                ));
                return;
            }

            let patch = ProfileUpdate {
                nickname: Some(nickname().trim().to_string()),
                old_password: (!old.is_empty()).then_some(old),
                new_password: (!new.is_empty()).then_some(new),
            };
            match ui::session::update_profile(session, &client, &patch).await {
                Ok(_) => {
                    profile_error.set(None);
                    profile_saved.set(true);
                    old_password.set(String::new());
                    new_password.set(String::new());
                }
                Err(err) => profile_error.set(Some(err.to_string())),
            }
        });
    };

    let current_theme = site()
        .get("theme")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    // String values are edited in place; anything structured is shown as-is.
    let entries: Vec<(String, String, bool)> = site()
        .into_iter()
        .filter(|(key, _)| key != "theme")
        .map(|(key, value)| match value {
            Value::String(text) => (key, text, true),
            other => (key, other.to_string(), false),
        })
        .collect();
    let admin_theme = prefs().theme;

    rsx! {
        div { class: "view",
            header { class: "view-header",
                h2 { "Settings" }
            }

            section { class: "settings-section",
                h3 { "Site" }

                if let Some(err) = load_error() {
                    div { class: "error-banner", "{err}" }
                }
                if let Some(err) = site_error() {
                    div { class: "error-banner", "{err}" }
                }
                if site_saved() {
                    div { class: "success-banner", "Settings saved" }
                }

                form { class: "editor-form", onsubmit: handle_save_site,
                    if !themes().is_empty() {
                        label { class: "field-label", "Theme" }
                        select {
                            value: "{current_theme}",
                            onchange: move |evt: FormEvent| {
                                site.write().insert("theme".to_string(), Value::String(evt.value()));
                            },
                            for theme in themes() {
                                option { value: "{theme}", "{theme}" }
                            }
                        }
                    }

                    for (key, text, editable) in entries {
                        label { class: "field-label", key: "{key}", "{key}" }
                        if editable {
                            input {
                                r#type: "text",
                                value: "{text}",
                                oninput: {
                                    let input_key = key.clone();
                                    move |evt: FormEvent| {
                                        site.write()
                                            .insert(input_key.clone(), Value::String(evt.value()));
                                    }
                                },
                            }
                        } else {
                            span { class: "cell-mono view-muted", "{text}" }
                        }
                    }

                    button { class: "btn btn-primary", r#type: "submit", "Save settings" }
                }
            }

            section { class: "settings-section",
                h3 { "Appearance" }
                p { class: "view-muted", "How the admin looks on this device." }

                div { class: "theme-row",
                    button {
                        class: if admin_theme == Theme::Light { "theme-card theme-card-active" } else { "theme-card" },
                        onclick: move |_| ui::prefs::set_theme(prefs, Theme::Light),
                        "Light"
                    }
                    button {
                        class: if admin_theme == Theme::Dark { "theme-card theme-card-active" } else { "theme-card" },
                        onclick: move |_| ui::prefs::set_theme(prefs, Theme::Dark),
                        "Dark"
                    }
                }

                label { class: "field-label", "Language" }
                select {
                    value: prefs().locale,
                    onchange: move |evt: FormEvent| ui::prefs::set_locale(prefs, &evt.value()),
                    option { value: "zh-CN", "\u{7b80}\u{4f53}\u{4e2d}\u{6587}" }
                    option { value: "en-US", "English" }
                }
            }

            section { class: "settings-section",
                h3 { "Profile" }

                if let Some(err) = profile_error() {
                    div { class: "error-banner", "{err}" }
                }
                if profile_saved() {
                    div { class: "success-banner", "Profile updated" }
                }

                form { class: "editor-form", onsubmit: handle_save_profile,
                    label { class: "field-label", "Nickname" }
                    input {
                        r#type: "text",
                        value: nickname(),
                        oninput: move |evt: FormEvent| nickname.set(evt.value()),
                    }

                    label { class: "field-label", "Current password" }
                    input {
                        r#type: "password",
                        value: old_password(),
                        oninput: move |evt: FormEvent| old_password.set(evt.value()),
                    }

                    label { class: "field-label", "New password" }
                    input {
                        r#type: "password",
                        value: new_password(),
                        oninput: move |evt: FormEvent| new_password.set(evt.value()),
                    }

                    button { class: "btn btn-primary", r#type: "submit", "Update profile" }
                }
            }
        }
    }
}
