//! Helpers for reporting results on the console
use crate::constants::{
    COMPRESSION_RATIO_PREFIX, ORIGINAL_SIZE_PREFIX, PROCESSED_SIZE_PREFIX,
    PROGRESS_SPINNER_TEMPLATE, SUCCESS_PREFIX, WARNING_PREFIX,
};
use crate::pipeline::ProcessReport;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress spinner with consistent styling
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(PROGRESS_SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}

/// Format file size in human-readable format
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Size reduction as a percentage (positive means smaller, negative larger)
pub fn calculate_compression_ratio(original_size: u64, processed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - processed_size as f64) / original_size as f64) * 100.0
}

/// Lines of the size report, in display order.
pub fn report_lines(report: &ProcessReport) -> Vec<String> {
    let ratio = report.compression_ratio();
    let mut lines = vec![
        format!(
            "{} {} bytes ({})",
            ORIGINAL_SIZE_PREFIX,
            report.original_size,
            format_file_size(report.original_size)
        ),
        format!(
            "{} {} bytes ({})",
            PROCESSED_SIZE_PREFIX,
            report.processed_size,
            format_file_size(report.processed_size)
        ),
        format!("{} {:.1}%", COMPRESSION_RATIO_PREFIX, ratio),
    ];
    if ratio > 0.0 {
        lines.push(format!("{} Reduced file size by {:.1}%", SUCCESS_PREFIX, ratio));
    } else if ratio < 0.0 {
        lines.push(format!(
            "{}  File size increased by {:.1}%",
            WARNING_PREFIX,
            ratio.abs()
        ));
    }
    lines
}

pub fn print_report(report: &ProcessReport) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}
