// Extension -> Content-Type table for served docs assets.

const CONTENT_TYPES: &[(&[&str], &str)] = &[
    // Text
    (&["css"], "text/css; charset=utf-8"),
    (&["js"], "application/javascript; charset=utf-8"),
    (&["json"], "application/json; charset=utf-8"),
    (&["xml"], "application/xml; charset=utf-8"),
    (&["html", "htm"], "text/html; charset=utf-8"),
    (&["txt"], "text/plain; charset=utf-8"),
    (&["md"], "text/markdown; charset=utf-8"),
    (&["csv"], "text/csv; charset=utf-8"),
    // Images
    (&["webp"], "image/webp"),
    (&["png"], "image/png"),
    (&["jpg", "jpeg"], "image/jpeg"),
    (&["gif"], "image/gif"),
    (&["bmp"], "image/bmp"),
    (&["ico"], "image/x-icon"),
    (&["svg", "svgz"], "image/svg+xml"),
    (&["tiff", "tif"], "image/tiff"),
    (&["avif"], "image/avif"),
    // Audio
    (&["mp3"], "audio/mpeg"),
    (&["wav"], "audio/wav"),
    (&["ogg"], "audio/ogg"),
    (&["flac"], "audio/flac"),
    (&["aac"], "audio/aac"),
    (&["m4a"], "audio/mp4"),
    // Video
    (&["mp4"], "video/mp4"),
    (&["webm"], "video/webm"),
    (&["ogv"], "video/ogg"),
    (&["mov"], "video/quicktime"),
    (&["avi"], "video/x-msvideo"),
    (&["wmv"], "video/x-ms-wmv"),
    (&["flv"], "video/x-flv"),
    (&["mkv"], "video/x-matroska"),
    // Fonts
    (&["woff"], "font/woff"),
    (&["woff2"], "font/woff2"),
    (&["ttf"], "font/ttf"),
    (&["otf"], "font/otf"),
    // Archives
    (&["zip"], "application/zip"),
    (&["rar"], "application/x-rar-compressed"),
    (&["gz"], "application/gzip"),
    (&["tar"], "application/x-tar"),
    (&["7z"], "application/x-7z-compressed"),
    (&["bz2"], "application/x-bzip2"),
    (&["xz"], "application/x-xz"),
    // Documents
    (&["pdf"], "application/pdf"),
    (&["doc"], "application/msword"),
    (
        &["docx"],
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    (&["xls"], "application/vnd.ms-excel"),
    (
        &["xlsx"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    (&["ppt"], "application/vnd.ms-powerpoint"),
    (
        &["pptx"],
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    (&["odt"], "application/vnd.oasis.opendocument.text"),
    (&["ods"], "application/vnd.oasis.opendocument.spreadsheet"),
    (&["odp"], "application/vnd.oasis.opendocument.presentation"),
    // Other
    (&["rtf"], "application/rtf"),
    (&["epub"], "application/epub+zip"),
    (&["apk"], "application/vnd.android.package-archive"),
    (&["exe"], "application/x-msdownload"),
    (&["dmg"], "application/x-apple-diskimage"),
    (&["iso"], "application/x-iso9660-image"),
];

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Case-insensitive lookup by file extension.
pub fn content_type(path: &str) -> &'static str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return DEFAULT_CONTENT_TYPE;
    };
    let ext = ext.to_ascii_lowercase();

    CONTENT_TYPES
        .iter()
        .find(|(exts, _)| exts.contains(&ext.as_str()))
        .map(|(_, ct)| *ct)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
