//! HTML for the three pages and the error page.

use crate::constants::{DEFAULT_QUALITY, PROCESSED_SUBDIR, UPLOADS_SUBDIR};
use crate::pipeline::ProcessReport;
use crate::utils::format_file_size;
use axum::http::StatusCode;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

pub fn index_page() -> String {
    layout(
        "Black & White Conversion and Compression",
        r#"<form action="/upload" method="post" enctype="multipart/form-data">
<input type="file" name="file" accept="image/*">
<button type="submit">Upload</button>
</form>"#,
    )
}

fn mode_form(filename: &str) -> String {
    format!(
        r#"<form action="/process/{name}" method="post">
<p>
<label><input type="radio" name="process" value="1" checked> 1: Compress the image</label><br>
<label><input type="radio" name="process" value="2"> 2: Convert the image to black and white</label><br>
<label><input type="radio" name="process" value="3"> 3: Both compress and convert to black and white</label>
</p>
<p><label>Quality (1-100, modes 1 and 3): <input type="number" name="quality" min="1" max="100" value="{quality}"></label></p>
<button type="submit">Process</button>
</form>"#,
        name = escape_html(filename),
        quality = DEFAULT_QUALITY
    )
}

pub fn process_page(filename: &str) -> String {
    let body = format!(
        r#"<p>Uploaded: <a href="/static/{uploads}/{name}">{name}</a></p>
{form}"#,
        uploads = UPLOADS_SUBDIR,
        name = escape_html(filename),
        form = mode_form(filename)
    );
    layout("Process image", &body)
}

pub fn result_page(filename: &str, processed_name: &str, report: &ProcessReport) -> String {
    let body = format!(
        r#"<p>Original image: <a href="/static/{uploads}/{name}">{name}</a></p>
<p>Original size: <span id="original-size">{original}</span> bytes ({original_human})</p>
<p>Processed image: <a href="/static/{processed}/{processed_name}">{processed_name}</a></p>
<p>Processed size: <span id="processed-size">{size}</span> bytes ({size_human})</p>
<p>Size change: {ratio:.1}%</p>
<img src="/static/{processed}/{processed_name}" alt="processed image">
{form}
<p><a href="/">Upload another image</a></p>"#,
        uploads = UPLOADS_SUBDIR,
        processed = PROCESSED_SUBDIR,
        name = escape_html(filename),
        processed_name = escape_html(processed_name),
        original = report.original_size,
        original_human = format_file_size(report.original_size),
        size = report.processed_size,
        size_human = format_file_size(report.processed_size),
        ratio = report.compression_ratio(),
        form = mode_form(filename)
    );
    layout("Processed image", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<p>{}</p>
<p><a href="/">Back to upload</a></p>"#,
        escape_html(message)
    );
    layout(&format!("Error {}", status.as_u16()), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_index_page_has_upload_form() {
        let html = index_page();
        assert!(html.contains(r#"action="/upload""#));
        assert!(html.contains(r#"name="file""#));
        assert!(html.contains("multipart/form-data"));
    }

    #[test]
    fn test_process_page_escapes_filename() {
        let html = process_page("<b>.png");
        assert!(html.contains("&lt;b&gt;.png"));
        assert!(!html.contains("<b>.png"));
    }

    #[test]
    fn test_result_page_shows_sizes() {
        let report = ProcessReport {
            output: PathBuf::from("static/processed/processed_a.png"),
            original_size: 4000,
            processed_size: 1000,
        };
        let html = result_page("a.png", "processed_a.png", &report);
        assert!(html.contains(r#"<span id="original-size">4000</span>"#));
        assert!(html.contains(r#"<span id="processed-size">1000</span>"#));
        assert!(html.contains("/static/processed/processed_a.png"));
        assert!(html.contains("75.0%"));
    }
}
