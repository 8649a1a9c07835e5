//! Prompt-driven front end.
//!
//! Reads answers line by line from any `BufRead` and writes prompts to any
//! `Write`, so the flow can be driven from a terminal or from a test.

use crate::config::{read_threshold_value, resolve_quality};
use crate::error::{ProcessingError, Result};
use crate::loader::validate_file_exists;
use crate::pipeline::{run_pipeline, ModeChoice, ProcessReport};
use crate::utils::report_lines;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    /// Directory both the source and the processed image names are resolved in.
    pub images_dir: PathBuf,
    pub config_path: PathBuf,
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{}", question)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_quality<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<u8> {
    let answer = prompt(
        input,
        out,
        "Enter the desired quality (1-100, where 100 is best quality): ",
    )?;
    let (quality, fallback) = resolve_quality(Some(&answer));
    if let Some(fallback) = fallback {
        writeln!(out, "{}", fallback)?;
    }
    Ok(quality)
}

/// Runs the interactive flow once.
///
/// Both files are checked before the mode is asked for: a missing image
/// fails with `FileNotFound`, a missing config file with `ConfigNotFound`,
/// and neither case decodes anything. An unrecognised choice fails with
/// `InvalidMode`. Bad quality input falls back to the default.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    options: &InteractiveOptions,
) -> Result<ProcessReport> {
    writeln!(
        out,
        "\nTIF, PNG: Black & White mode Conversion and Compression\n"
    )?;

    let image_name = prompt(input, out, "Enter the image name (e.g., 1.png): ")?;
    let input_path = options.images_dir.join(&image_name);
    let processed_name = prompt(
        input,
        out,
        "Enter the name for the processed image (e.g., processed.jpg): ",
    )?;
    let output_path = options.images_dir.join(&processed_name);

    validate_file_exists(&input_path)?;
    if !options.config_path.is_file() {
        return Err(ProcessingError::ConfigNotFound(options.config_path.clone()));
    }

    writeln!(out, "Choose the process you want to perform:")?;
    writeln!(out, "1: Compress the image")?;
    writeln!(out, "2: Convert the image to black and white")?;
    writeln!(out, "3: Both compress and convert to black and white")?;
    let choice: ModeChoice = prompt(input, out, "Enter your choice (1/2/3): ")?.parse()?;

    let threshold = if choice.needs_threshold() {
        Some(read_threshold_value(&options.config_path)?)
    } else {
        None
    };
    let quality = if choice.needs_quality() {
        Some(prompt_quality(input, out)?)
    } else {
        None
    };
    let mode = choice.with_params(threshold, quality)?;

    writeln!(out, "Processing {}", image_name)?;
    let report = run_pipeline(&input_path, &output_path, &mode)?;

    let done = match choice {
        ModeChoice::Compress => "compressed",
        ModeChoice::Threshold => "converted to black and white",
        ModeChoice::Both => "compressed and converted to black and white",
    };
    writeln!(out, "The image has been {} and saved as {}", done, processed_name)?;
    for line in report_lines(&report) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "\n\n*** Process Completed ***\n")?;

    Ok(report)
}
