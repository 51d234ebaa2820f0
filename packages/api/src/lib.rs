//! # API crate — HTTP client layer for the Bramble admin
//!
//! Everything the admin frontend knows about the Bramble REST API lives here:
//! the shared transport, one thin client per resource, and the wire models.
//! Every operation maps one-to-one to a server endpoint and passes its
//! parameters through unmodified; there is no client-side validation,
//! caching, or retry.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | Shared transport: base URL, bearer-token injection, envelope decoding, global 401 handling |
//! | [`models`] | Wire types mirrored from server responses |
//! | [`user`] | Login, fetch-self, update-profile |
//! | [`posts`] | Post CRUD (the server creates on `PUT /posts/` and updates on `POST /posts/{id}`) |
//! | [`attachments`] | Attachment list / multipart upload / delete |
//! | [`storage_engines`] | Storage engine CRUD |
//! | [`settings`] | Site settings fetch/update and theme enumeration |
//!
//! ## Entry point
//!
//! [`ApiClient`] owns the transport and hands out the resource clients:
//!
//! ```ignore
//! let client = ApiClient::from_env();
//! let page = client.posts().list(&PostListQuery::default()).await?;
//! ```

use crate::http::Http;

pub mod attachments;
mod error;
pub mod http;
pub mod models;
pub mod posts;
pub mod settings;
mod storage;
pub mod storage_engines;
pub mod user;

pub use attachments::AttachmentsApi;
pub use error::Error;
pub use posts::PostsApi;
pub use settings::SettingsApi;
pub use storage_engines::StorageEnginesApi;
pub use user::UserApi;

/// Base path used when no `BRAMBLE_API_BASE` was set at build time. Relative
/// paths resolve against the document origin in the browser.
pub const DEFAULT_BASE: &str = "/api";

/// Root client for the Bramble API. Cheap to clone; all clones share the
/// same transport (and therefore the same bearer token).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Http,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: Http::new(base),
        }
    }

    /// Build a client against the base URL baked in at compile time via the
    /// `BRAMBLE_API_BASE` environment variable, defaulting to [`DEFAULT_BASE`].
    pub fn from_env() -> Self {
        Self::new(option_env!("BRAMBLE_API_BASE").unwrap_or(DEFAULT_BASE))
    }

    /// The underlying transport, for credential management and the
    /// unauthorized hook.
    pub fn http(&self) -> &Http {
        &self.http
    }

    pub fn user(&self) -> UserApi {
        UserApi::new(self.http.clone())
    }

    pub fn posts(&self) -> PostsApi {
        PostsApi::new(self.http.clone())
    }

    pub fn attachments(&self) -> AttachmentsApi {
        AttachmentsApi::new(self.http.clone())
    }

    pub fn storage_engines(&self) -> StorageEnginesApi {
        StorageEnginesApi::new(self.http.clone())
    }

    pub fn settings(&self) -> SettingsApi {
        SettingsApi::new(self.http.clone())
    }
}
