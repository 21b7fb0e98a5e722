//! MIME type detection module
//!
//! Content types are resolved once, at index time, in two stages:
//! a fixed extension table first, then magic-byte sniffing of the file
//! contents. Anything neither stage recognizes is served as `text/plain`.

/// Content type used when neither the extension nor the bytes say otherwise
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Get MIME Content-Type based on the file name's extension
///
/// The extension is whatever follows the last `.` in the name, so a
/// dotfile such as `.html` still counts as HTML.
///
/// # Examples
/// ```
/// use assetd::http::mime::extension_content_type;
/// assert_eq!(extension_content_type("app.js"), Some("text/javascript"));
/// assert_eq!(extension_content_type("logo.png"), None);
/// assert_eq!(extension_content_type("LICENSE"), None);
/// ```
pub fn extension_content_type(file_name: &str) -> Option<&'static str> {
    let (_, extension) = file_name.rsplit_once('.')?;
    match extension {
        "html" => Some("text/html"),
        "css" => Some("text/css"),
        "txt" => Some("text/plain"),
        "js" => Some("text/javascript"),
        "md" => Some("text/markdown"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Best-guess MIME type from raw file bytes
pub trait Sniffer {
    fn sniff(&self, bytes: &[u8]) -> Option<&'static str>;
}

/// Magic-number sniffer backed by the `infer` signature database
#[derive(Debug, Default, Clone, Copy)]
pub struct MagicSniffer;

impl Sniffer for MagicSniffer {
    fn sniff(&self, bytes: &[u8]) -> Option<&'static str> {
        infer::get(bytes).map(|kind| kind.mime_type())
    }
}

/// Resolve the content type for a file: extension table, then sniffing,
/// then [`DEFAULT_CONTENT_TYPE`]
pub fn resolve_content_type<S>(file_name: &str, bytes: &[u8], sniffer: &S) -> &'static str
where
    S: Sniffer + ?Sized,
{
    extension_content_type(file_name)
        .or_else(|| sniffer.sniff(bytes))
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
