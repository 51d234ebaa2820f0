use thiserror::Error;

/// Failures surfaced by the API client.
///
/// A 401 is handled globally by the transport (token cleared, unauthorized
/// hook fired) before [`Error::Unauthorized`] reaches the caller, so local
/// error handling still runs. Everything else is propagated unmodified.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized")]
    Unauthorized,

    /// Non-2xx response that carried a parseable envelope.
    #[error("api error {code}: {message}")]
    Api { code: i32, message: String },

    /// Non-2xx response without a usable envelope.
    #[error("http status {0}")]
    Status(u16),

    /// 2xx envelope with no `data` payload where one was expected.
    #[error("response carried no data")]
    MissingData,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
