/// Used when the user-supplied name sanitizes to nothing.
pub const DEFAULT_FILENAME: &str = "simpleqr";

const ILLEGAL: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Strips characters that are illegal in file names on common filesystems.
///
/// Returns [`DEFAULT_FILENAME`] when nothing usable remains.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !ILLEGAL.contains(c) && !c.is_control())
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        DEFAULT_FILENAME.to_owned()
    } else {
        cleaned.to_owned()
    }
}

/// The full name offered for a download, always ending in `.png`.
pub fn download_filename(name: &str) -> String {
    let name = sanitize_filename(name);
    let len = name.len();
    let stem = if len >= 4
        && name.is_char_boundary(len - 4)
        && name[len - 4..].eq_ignore_ascii_case(".png")
    {
        name[..len - 4].trim_end()
    } else {
        name.as_str()
    };
    let stem = if stem.is_empty() { DEFAULT_FILENAME } else { stem };
    format!("{stem}.png")
}
