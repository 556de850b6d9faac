//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Join a root path and a relative path
///
/// # Examples
/// ```ignore
/// url_for("/docs/", "/articles") // -> "/docs/articles"
/// ```
pub fn url_for(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Link target for an article id
///
/// # Examples
/// ```ignore
/// article_url("/articles", "123") // -> "/articles/123"
/// ```
pub fn article_url(article_root: &str, id: &str) -> String {
    url_for(article_root, &encode_segment(id))
}

/// Percent-encode a single path segment
///
/// Dot-only segments (`.`, `..`) are encoded too so they are not resolved
/// as relative path steps.
pub fn encode_segment(segment: &str) -> String {
    if !segment.is_empty() && segment.chars().all(|c| c == '.') {
        return "%2E".repeat(segment.len());
    }
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
