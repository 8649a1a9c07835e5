use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image not found at {0}")]
    FileNotFound(PathBuf),

    #[error("Threshold config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid threshold value {content:?} in {path}: expected an integer")]
    InvalidThreshold { path: PathBuf, content: String },

    #[error("Threshold value {0} out of range. Must be between 0 and 255")]
    ThresholdOutOfRange(i64),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid choice: {0:?}. Expected 1, 2 or 3")]
    InvalidMode(String),

    #[error("Mode {mode} needs a {parameter}")]
    MissingParameter {
        mode: String,
        parameter: &'static str,
    },

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("Invalid image dimensions: {0}x{1}. Maximum allowed: {2}x{2}")]
    InvalidDimensions(u32, u32, u32),

    #[error("File too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),
}

pub type Result<T> = std::result::Result<T, ProcessingError>;

impl From<tempfile::PersistError> for ProcessingError {
    fn from(err: tempfile::PersistError) -> Self {
        ProcessingError::Io(err.error)
    }
}
