use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

/// A finished export waiting to be handed to the host's save mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl ExportFile {
    /// `Content-Disposition` carrying the UTF-8 name per RFC 5987, with a
    /// plain ASCII name for clients that ignore `filename*`.
    pub fn content_disposition(&self) -> String {
        let ascii_name = match self.file_name.is_ascii() {
            true => self.file_name.to_string(),
            false => match self.file_name.rsplit_once('.') {
                Some((_, extension)) if extension.is_ascii() => {
                    format!("dream-chef.{}", extension)
                }
                _ => "dream-chef".to_string(),
            },
        };

        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            ascii_name,
            urlencoding::encode(&self.file_name)
        )
    }
}

impl IntoResponse for ExportFile {
    fn into_response(self) -> Response {
        let content_type = HeaderValue::from_str(&self.mime_type)
            .unwrap_or(HeaderValue::from_static("application/octet-stream"));
        let disposition = HeaderValue::from_str(&self.content_disposition())
            .unwrap_or(HeaderValue::from_static("attachment"));

        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.data,
        )
            .into_response()
    }
}
