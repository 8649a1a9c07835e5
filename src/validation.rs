use std::path::{Component, Path};

/// Reduces a client supplied file name to a safe single path component.
///
/// Any directory part is dropped, characters outside `[A-Za-z0-9._-]` become
/// `_`, and leading dots are removed so the result can never be `.`, `..`
/// or a hidden file. Returns `None` if nothing usable is left.
pub fn secure_filename(name: &str) -> Option<String> {
    // Browsers on Windows may send a full path with backslashes.
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_') {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// True if `name` is exactly one normal path component.
pub fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_filename_plain() {
        assert_eq!(secure_filename("photo.png").as_deref(), Some("photo.png"));
        assert_eq!(
            secure_filename("scan_01-final.TIF").as_deref(),
            Some("scan_01-final.TIF")
        );
    }

    #[test]
    fn test_secure_filename_strips_directories() {
        assert_eq!(secure_filename("../../etc/passwd").as_deref(), Some("passwd"));
        assert_eq!(
            secure_filename("C:\\Users\\me\\scan.tif").as_deref(),
            Some("scan.tif")
        );
        assert_eq!(secure_filename("/abs/path/a.jpg").as_deref(), Some("a.jpg"));
    }

    #[test]
    fn test_secure_filename_replaces_unsafe_characters() {
        assert_eq!(
            secure_filename("my holiday photo.jpg").as_deref(),
            Some("my_holiday_photo.jpg")
        );
        assert_eq!(secure_filename("café.png").as_deref(), Some("caf_.png"));
    }

    #[test]
    fn test_secure_filename_rejects_empty() {
        assert_eq!(secure_filename(""), None);
        assert_eq!(secure_filename(".."), None);
        assert_eq!(secure_filename("dir/"), None);
        assert_eq!(secure_filename("   "), None);
        assert_eq!(secure_filename(".hidden").as_deref(), Some("hidden"));
    }

    #[test]
    fn test_is_single_component() {
        assert!(is_single_component("a.png"));
        assert!(!is_single_component("../a.png"));
        assert!(!is_single_component("dir/a.png"));
        assert!(!is_single_component(".."));
        assert!(!is_single_component(""));
    }
}
