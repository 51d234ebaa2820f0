//! Attachment list, upload, and delete.

use reqwest::multipart;

use crate::http::Http;
use crate::models::{Attachment, AttachmentList, AttachmentQuery};
use crate::Error;

#[derive(Debug, Clone)]
pub struct AttachmentsApi {
    http: Http,
}

impl AttachmentsApi {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// `GET /attachments/`.
    pub async fn list(&self, query: &AttachmentQuery) -> Result<AttachmentList, Error> {
        self.http.get_query("/attachments/", query).await
    }

    /// `POST /attachments/` as multipart form data: a `file` part carrying
    /// the filename, guessed MIME type, and raw bytes, plus an optional
    /// `storage_engine_id` text part selecting the target engine.
    ///
    /// The browser file engine hands us a name and bytes, so the content
    /// type is guessed from the filename.
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        storage_engine_id: Option<i32>,
    ) -> Result<Attachment, Error> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str(mime.as_ref())?;
        let mut form = multipart::Form::new().part("file", part);
        if let Some(engine) = storage_engine_id {
            form = form.text("storage_engine_id", engine.to_string());
        }
        self.http.post_multipart("/attachments/", form).await
    }

    /// `DELETE /attachments/{id}`.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.http.delete(&format!("/attachments/{id}")).await
    }
}
