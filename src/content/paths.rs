use crate::core::constants::DEFAULT_CONTENT_DIR;

/// `en/index.html` -> `/markdown/en/index.md`.
pub fn convert_html_path_to_md_path(path: &str) -> String {
    md_path_in(DEFAULT_CONTENT_DIR, path)
}

/// Same as [`convert_html_path_to_md_path`] with a configurable content root.
pub fn md_path_in(content_dir: &str, path: &str) -> String {
    let relative = path.trim_start_matches('/');
    let relative = match relative.strip_suffix(".html") {
        Some(stem) => format!("{}.md", stem),
        None => relative.to_string(),
    };
    format!("{}/{}", content_dir.trim_end_matches('/'), relative)
}

/// Title shown for a content path: `/markdown/en/getting-started.md` ->
/// `Getting started`.
pub fn page_title_from_path(path: &str) -> String {
    let last = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let stem = match last.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => last,
    };
    let spaced = stem.replace('-', " ");

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
