//! Post CRUD.
//!
//! The verb mapping is the server's, preserved as observed: creation goes
//! through `PUT /posts/` and updates through `POST /posts/{id}`.

use crate::http::Http;
use crate::models::{Post, PostList, PostListQuery, PostPayload};
use crate::Error;

#[derive(Debug, Clone)]
pub struct PostsApi {
    http: Http,
}

impl PostsApi {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// `GET /posts/` with pagination, sorting, and filter parameters passed
    /// through as-is.
    pub async fn list(&self, query: &PostListQuery) -> Result<PostList, Error> {
        self.http.get_query("/posts/", query).await
    }

    /// `GET /posts/{id}`.
    pub async fn get(&self, id: i32) -> Result<Post, Error> {
        self.http.get(&format!("/posts/{id}")).await
    }

    /// `PUT /posts/`.
    pub async fn create(&self, payload: &PostPayload) -> Result<Post, Error> {
        self.http.put_json("/posts/", payload).await
    }

    /// `POST /posts/{id}`.
    pub async fn update(&self, id: i32, payload: &PostPayload) -> Result<Post, Error> {
        self.http.post_json(&format!("/posts/{id}"), payload).await
    }

    /// `DELETE /posts/{id}`.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.http.delete(&format!("/posts/{id}")).await
    }
}
