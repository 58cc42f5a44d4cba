/// Characters removed from download file names
const ILLEGAL_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

const FALLBACK_FILENAME: &str = "export";

/// Strips characters that are illegal in file names on common platforms
///
/// Control characters are removed as well, whitespace is collapsed. Falls back to `export`
/// when nothing is left.
pub fn escape_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c) && !c.is_control())
        .collect();

    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.trim_matches('.').trim();

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `Content-Disposition` value offering `filename` as attachment
///
/// Names outside of printable ASCII get an ASCII fallback plus the RFC 5987 `filename*`
/// parameter carrying the UTF-8 name.
pub fn attachment_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '_' })
        .collect();

    if ascii == filename {
        format!("attachment; filename=\"{}\"", filename)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            ascii,
            urlencoding::encode(filename)
        )
    }
}
