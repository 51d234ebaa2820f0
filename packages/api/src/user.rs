//! Login, fetch-self, and profile update.

use crate::http::Http;
use crate::models::{LoginRequest, LoginResponse, ProfileUpdate, User};
use crate::Error;

#[derive(Debug, Clone)]
pub struct UserApi {
    http: Http,
}

impl UserApi {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// `POST /user/auth`. Returns the token and the authenticated user; the
    /// caller decides whether to store the token on the transport.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, Error> {
        let request = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        self.http.post_json("/user/auth", &request).await
    }

    /// `GET /user/me` — who am I.
    pub async fn me(&self) -> Result<User, Error> {
        self.http.get("/user/me").await
    }

    /// `POST /user/me`. Returns the server's updated representation.
    pub async fn update_me(&self, patch: &ProfileUpdate) -> Result<User, Error> {
        self.http.post_json("/user/me", patch).await
    }
}
