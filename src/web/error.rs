use crate::error::ProcessingError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use super::pages;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Upload {0:?} not found")]
    UploadNotFound(String),

    #[error(transparent)]
    Processing(#[from] ProcessingError),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::UploadNotFound(_) => StatusCode::NOT_FOUND,
            WebError::Multipart(e) => e.status(),
            WebError::Task(_) | WebError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Processing(e) => match e {
                ProcessingError::FileNotFound(_) => StatusCode::NOT_FOUND,
                ProcessingError::FileTooLarge(..) => StatusCode::PAYLOAD_TOO_LARGE,
                ProcessingError::Image(_)
                | ProcessingError::InvalidMode(_)
                | ProcessingError::InvalidQuality(_)
                | ProcessingError::InvalidDimensions(..)
                | ProcessingError::UnsupportedFormat(_) => StatusCode::UNPROCESSABLE_ENTITY,
                // Server configuration or caller faults, not client input.
                ProcessingError::MissingParameter { .. }
                | ProcessingError::PngEncoding(_)
                | ProcessingError::ConfigNotFound(_)
                | ProcessingError::InvalidThreshold { .. }
                | ProcessingError::ThresholdOutOfRange(_)
                | ProcessingError::DirectoryCreationFailed(_)
                | ProcessingError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::warn!(%status, "{message}");
        }
        (status, Html(pages::error_page(status, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            WebError::UploadNotFound("a.png".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(ProcessingError::InvalidMode("9".into())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            WebError::from(ProcessingError::ConfigNotFound(PathBuf::from("value.ini"))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WebError::from(ProcessingError::MissingParameter {
                mode: "compress".into(),
                parameter: "quality",
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WebError::from(ProcessingError::FileTooLarge(2, 1)).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }
}
