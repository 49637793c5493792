use actix_multipart::MultipartError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// The request body could not be turned into form entries
#[derive(Debug, thiserror::Error)]
pub enum FormReadError {
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),
    #[error("form body exceeds {limit} bytes")]
    TooLarge { limit: usize },
}

impl ResponseError for FormReadError {
    fn status_code(&self) -> StatusCode {
        match self {
            FormReadError::Multipart(_) => StatusCode::BAD_REQUEST,
            FormReadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(mime::TEXT_PLAIN_UTF_8)
            .body(self.to_string())
    }
}
