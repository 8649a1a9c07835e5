//! Threshold config file and quality input handling.

use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::error::{ProcessingError, Result};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the global threshold from a one-line config file.
///
/// The file is re-read on every call. Whitespace around the number is ignored.
///
/// # Errors
/// * `ConfigNotFound` if the path does not exist
/// * `InvalidThreshold` if the content is not a base-10 integer
/// * `ThresholdOutOfRange` if the integer is outside 0..=255
pub fn read_threshold_value(path: &Path) -> Result<u8> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ProcessingError::ConfigNotFound(path.to_path_buf()),
        _ => ProcessingError::Io(e),
    })?;

    let text = content.trim();
    let value: i64 = text.parse().map_err(|_| ProcessingError::InvalidThreshold {
        path: path.to_path_buf(),
        content: text.to_string(),
    })?;
    let threshold =
        u8::try_from(value).map_err(|_| ProcessingError::ThresholdOutOfRange(value))?;

    debug!(path = %path.display(), threshold, "threshold loaded");
    Ok(threshold)
}

/// Why a quality input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityFallback {
    OutOfRange(i64),
    NotANumber(String),
}

impl fmt::Display for QualityFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityFallback::OutOfRange(_) => write!(
                f,
                "Quality should be between {} and {}. Using default value of {}.",
                MIN_QUALITY, MAX_QUALITY, DEFAULT_QUALITY
            ),
            QualityFallback::NotANumber(_) => write!(
                f,
                "Invalid quality value. Using default value of {}.",
                DEFAULT_QUALITY
            ),
        }
    }
}

/// Parses user-entered quality text.
pub fn parse_quality(input: &str) -> std::result::Result<u8, QualityFallback> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| QualityFallback::NotANumber(trimmed.to_string()))?;
    if !(i64::from(MIN_QUALITY)..=i64::from(MAX_QUALITY)).contains(&value) {
        return Err(QualityFallback::OutOfRange(value));
    }
    Ok(value as u8)
}

/// Resolves quality text, substituting the default for anything invalid.
///
/// Returns the effective quality and, when the default was substituted, the
/// reason so callers can tell the user.
pub fn resolve_quality(input: Option<&str>) -> (u8, Option<QualityFallback>) {
    let Some(input) = input else {
        return (DEFAULT_QUALITY, None);
    };
    match parse_quality(input) {
        Ok(quality) => (quality, None),
        Err(fallback) => {
            warn!(input, "{}", fallback);
            (DEFAULT_QUALITY, Some(fallback))
        }
    }
}
