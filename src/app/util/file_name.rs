use regex::Regex;

lazy_static! {
    static ref UNSAFE_FILE_NAME_CHARS: Regex = Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).unwrap();
}

/// Strips characters that would escape the target directory or break a
/// `Content-Disposition` header. Blank names fall back to `fallback`.
pub fn sanitize(name: &str, fallback: &str) -> String {
    let cleaned = UNSAFE_FILE_NAME_CHARS.replace_all(name.trim(), "_");
    let cleaned = cleaned.trim_matches('.').trim();

    if cleaned.is_empty() {
        return fallback.to_string();
    }

    cleaned.to_string()
}
