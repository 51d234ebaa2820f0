//! Session state and its operations.
//!
//! The session holds the current authenticated user (or none) and an
//! `initialized` flag recording whether a fetch has been attempted this page
//! load. It is provided as a context signal by [`SessionProvider`]; the
//! router guard performs the lazy first fetch, so the provider itself does
//! not talk to the network on mount.

use api::http::Http;
use api::models::{ProfileUpdate, User};
use api::ApiClient;
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    /// Whether a fetch of the current user has settled at least once this
    /// page load. Gates the guard's one-shot fetch.
    pub initialized: bool,
}

impl SessionState {
    /// Record the outcome of a fetch. Any failure (including a missing or
    /// rejected token) means "no user"; either way the session counts as
    /// initialized so the guard never fetches in a loop.
    fn settle(&mut self, fetched: Result<User, api::Error>) {
        self.user = fetched.ok();
        self.initialized = true;
    }
}

/// The session signal provided by [`SessionProvider`].
pub fn use_session() -> Signal<SessionState> {
    use_context()
}

/// The shared API client provided by [`SessionProvider`].
pub fn use_api() -> ApiClient {
    use_context()
}

/// Provides the API client and the session signal to the subtree, and
/// installs the transport's unauthorized hook. Wrap the router with this.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| {
        let client = ApiClient::from_env();
        client.http().set_unauthorized_hook(redirect_to_login);
        client
    });
    use_context_provider(|| Signal::new(SessionState::default()));

    rsx! {
        {children}
    }
}

/// Unauthorized hook: leave the app for the login route. The full document
/// navigation rebuilds the session from scratch (uninitialized), which is
/// exactly what a rejected credential calls for.
fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Fetch the current user and settle the session. Failures are "no user",
/// never fatal; the session always ends up initialized.
pub async fn fetch_self(mut session: Signal<SessionState>, client: &ApiClient) {
    let fetched = client.user().me().await;
    if let Err(err) = &fetched {
        tracing::debug!("session fetch settled without a user: {err}");
    }
    session.write().settle(fetched);
}

/// Log in, store the credential on the transport, and populate the session.
pub async fn login(
    mut session: Signal<SessionState>,
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<(), api::Error> {
    let response = client.user().login(username, password).await?;
    client.http().set_token(Some(&response.token));
    let mut state = session.write();
    state.user = Some(response.user);
    state.initialized = true;
    Ok(())
}

/// Send a partial profile update and replace the stored user with the
/// server's returned representation.
pub async fn update_profile(
    mut session: Signal<SessionState>,
    client: &ApiClient,
    patch: &ProfileUpdate,
) -> Result<User, api::Error> {
    let user = client.user().update_me(patch).await?;
    session.write().user = Some(user.clone());
    Ok(user)
}

/// Clear the session user and the transport credential. The transport is an
/// explicit collaborator here so credential clearing cannot be forgotten at
/// a call site.
pub fn logout(mut session: Signal<SessionState>, http: &Http) {
    session.write().user = None;
    http.set_token(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_user() -> User {
        User {
            id: 1,
            username: "admin".into(),
            nickname: "Admin".into(),
            role: "admin".into(),
        }
    }

    #[test]
    fn settle_with_user_initializes() {
        let mut state = SessionState::default();
        state.settle(Ok(some_user()));
        assert!(state.initialized);
        assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
    }

    #[test]
    fn settle_with_failure_still_initializes() {
        let mut state = SessionState {
            user: Some(some_user()),
            initialized: false,
        };
        state.settle(Err(api::Error::Unauthorized));
        assert!(state.initialized);
        assert!(state.user.is_none());
    }
}
