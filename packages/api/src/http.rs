//! Shared HTTP transport.
//!
//! One [`Http`] per application; every resource client holds a clone. The
//! transport attaches the bearer token to each outgoing request, unwraps the
//! server's response envelope, and handles authorization failures globally:
//! a 401 clears the stored token, fires the installed unauthorized hook, and
//! then still surfaces [`Error::Unauthorized`] to the caller.

use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{storage, Error};

/// Wrapper every endpoint responds with.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i32,
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Invoked after the transport observes a 401 and has cleared the token.
/// The web shell installs a hook that forces navigation to the login route.
pub type UnauthorizedHook = fn();

#[derive(Clone)]
pub struct Http {
    client: reqwest::Client,
    base: String,
    token: Arc<RwLock<Option<String>>>,
    on_unauthorized: Arc<RwLock<Option<UnauthorizedHook>>>,
}

impl std::fmt::Debug for Http {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Http")
            .field("base", &self.base)
            .field("token", &self.token.read().as_deref().map(|_| "<set>"))
            .finish()
    }
}

impl Http {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_owned(),
            token: Arc::new(RwLock::new(storage::load_token())),
            on_unauthorized: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Set or clear the bearer credential. The single mutator for the token:
    /// it also persists to (or removes from) browser storage.
    pub fn set_token(&self, token: Option<&str>) {
        match token {
            Some(token) => storage::save_token(token),
            None => storage::clear_token(),
        }
        *self.token.write() = token.map(str::to_owned);
    }

    pub fn set_unauthorized_hook(&self, hook: UnauthorizedHook) {
        *self.on_unauthorized.write() = Some(hook);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, Error> {
        let request = match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::debug!("401 from server, clearing credentials");
            self.set_token(None);
            let hook = *self.on_unauthorized.read();
            if let Some(hook) = hook {
                hook();
            }
            return Err(Error::Unauthorized);
        }

        let body = response.bytes().await?;
        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_slice::<Envelope<serde_json::Value>>(&body) {
                return Err(Error::Api {
                    code: envelope.code,
                    message: envelope.message.unwrap_or_else(|| status.to_string()),
                });
            }
            return Err(Error::Status(status.as_u16()));
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, Error> {
        self.execute(request).await?.data.ok_or(Error::MissingData)
    }

    /// Like [`Http::request`] but for endpoints whose success payload is
    /// empty (`data: null`).
    async fn request_unit(&self, request: reqwest::RequestBuilder) -> Result<(), Error> {
        self.execute::<serde_json::Value>(request).await.map(|_| ())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request(self.client.get(self.url(path))).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request(self.client.get(self.url(path)).query(query))
            .await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(self.client.post(self.url(path)).json(body))
            .await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(self.client.put(self.url(path)).json(body))
            .await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        self.request(self.client.post(self.url(path)).multipart(form))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.request_unit(self.client.delete(self.url(path))).await
    }
}
