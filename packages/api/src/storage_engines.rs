//! Storage engine CRUD.

use crate::http::Http;
use crate::models::{NewStorageEngine, StorageEngine, StorageEnginePatch};
use crate::Error;

#[derive(Debug, Clone)]
pub struct StorageEnginesApi {
    http: Http,
}

impl StorageEnginesApi {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// `GET /storage_engines/`. Engines are few; the list is not paginated.
    pub async fn list(&self) -> Result<Vec<StorageEngine>, Error> {
        self.http.get("/storage_engines/").await
    }

    /// `POST /storage_engines/`.
    pub async fn create(&self, engine: &NewStorageEngine) -> Result<StorageEngine, Error> {
        self.http.post_json("/storage_engines/", engine).await
    }

    /// `PUT /storage_engines/{id}`.
    pub async fn update(&self, id: i32, patch: &StorageEnginePatch) -> Result<StorageEngine, Error> {
        self.http
            .put_json(&format!("/storage_engines/{id}"), patch)
            .await
    }

    /// `DELETE /storage_engines/{id}`.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.http.delete(&format!("/storage_engines/{id}")).await
    }
}
