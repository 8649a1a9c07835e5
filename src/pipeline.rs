use crate::compress::compress_image;
use crate::constants::TEMP_PREFIX;
use crate::error::{ProcessingError, Result};
use crate::loader::validate_file_exists;
use crate::threshold::convert_to_black_and_white;
use crate::utils::calculate_compression_ratio;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::TempPath;
use tracing::debug;

/// The menu choice a user makes, before its parameters are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChoice {
    /// `1`: recompress only
    Compress,
    /// `2`: black and white only
    Threshold,
    /// `3`: black and white, then recompress
    Both,
}

impl ModeChoice {
    pub fn needs_threshold(&self) -> bool {
        matches!(self, ModeChoice::Threshold | ModeChoice::Both)
    }

    pub fn needs_quality(&self) -> bool {
        matches!(self, ModeChoice::Compress | ModeChoice::Both)
    }

    /// Combines the choice with its parameters. Values the mode does not
    /// use are ignored.
    pub fn with_params(self, threshold: Option<u8>, quality: Option<u8>) -> Result<ProcessMode> {
        let missing = |parameter: &'static str| ProcessingError::MissingParameter {
            mode: self.to_string(),
            parameter,
        };
        Ok(match self {
            ModeChoice::Compress => ProcessMode::Compress {
                quality: quality.ok_or_else(|| missing("quality"))?,
            },
            ModeChoice::Threshold => ProcessMode::Threshold {
                threshold: threshold.ok_or_else(|| missing("threshold"))?,
            },
            ModeChoice::Both => ProcessMode::Both {
                threshold: threshold.ok_or_else(|| missing("threshold"))?,
                quality: quality.ok_or_else(|| missing("quality"))?,
            },
        })
    }
}

impl fmt::Display for ModeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModeChoice::Compress => "compress",
            ModeChoice::Threshold => "black and white",
            ModeChoice::Both => "black and white + compress",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ModeChoice {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(ModeChoice::Compress),
            "2" => Ok(ModeChoice::Threshold),
            "3" => Ok(ModeChoice::Both),
            other => Err(ProcessingError::InvalidMode(other.to_string())),
        }
    }
}

/// A fully parameterised processing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessMode {
    Compress { quality: u8 },
    Threshold { threshold: u8 },
    Both { threshold: u8, quality: u8 },
}

impl ProcessMode {
    pub fn choice(&self) -> ModeChoice {
        match self {
            ProcessMode::Compress { .. } => ModeChoice::Compress,
            ProcessMode::Threshold { .. } => ModeChoice::Threshold,
            ProcessMode::Both { .. } => ModeChoice::Both,
        }
    }
}

/// Sizes before and after processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub output: PathBuf,
    pub original_size: u64,
    pub processed_size: u64,
}

impl ProcessReport {
    pub fn compression_ratio(&self) -> f64 {
        calculate_compression_ratio(self.original_size, self.processed_size)
    }
}

/// Runs one request end to end and reports the byte sizes of the source and
/// the result.
///
/// In [`ProcessMode::Both`] the intermediate black-and-white image lives in
/// a temporary PNG next to the output; it is removed when this function
/// returns, on success and on error.
pub fn run_pipeline(input: &Path, output: &Path, mode: &ProcessMode) -> Result<ProcessReport> {
    validate_file_exists(input)?;
    // Read before writing: the output may replace the input.
    let original_size = fs::metadata(input)?.len();
    debug!(input = %input.display(), output = %output.display(), ?mode, "running pipeline");

    let processed_size = match *mode {
        ProcessMode::Compress { quality } => compress_image(input, quality, output)?,
        ProcessMode::Threshold { threshold } => {
            convert_to_black_and_white(input, threshold, output)?
        }
        ProcessMode::Both { threshold, quality } => {
            let temp = intermediate_file(output)?;
            convert_to_black_and_white(input, threshold, &temp)?;
            compress_image(&temp, quality, output)?
        }
    };

    Ok(ProcessReport {
        output: output.to_path_buf(),
        original_size,
        processed_size,
    })
}

/// Reserves a temp path next to the output. The handle is closed so the
/// path can be renamed over; the file is deleted when the `TempPath` drops.
fn intermediate_file(output: &Path) -> Result<TempPath> {
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .map_err(|_| ProcessingError::DirectoryCreationFailed(parent.to_path_buf()))?;
    Ok(tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".png")
        .tempfile_in(parent)?
        .into_temp_path())
}
