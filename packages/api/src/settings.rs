//! Site settings and theme enumeration.

use crate::http::Http;
use crate::models::SiteSettings;
use crate::Error;

#[derive(Debug, Clone)]
pub struct SettingsApi {
    http: Http,
}

impl SettingsApi {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// `GET /settings/` — the whole settings document.
    pub async fn get(&self) -> Result<SiteSettings, Error> {
        self.http.get("/settings/").await
    }

    /// `POST /settings/`. Returns the document as the server now holds it.
    pub async fn update(&self, settings: &SiteSettings) -> Result<SiteSettings, Error> {
        self.http.post_json("/settings/", settings).await
    }

    /// `GET /settings/themes` — names of the themes installed on the server.
    pub async fn themes(&self) -> Result<Vec<String>, Error> {
        self.http.get("/settings/themes").await
    }
}
