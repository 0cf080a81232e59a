use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use std::fmt;
use std::rc::Rc;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Self-contained image reference that an `<img>` can render without a fetch.
///
/// Backed by an `Rc<str>` so the gallery state can be cloned on every
/// reducer step without copying the encoded payloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUri(Rc<str>);

impl DataUri {
    /// Encodes `bytes` as `data:<mime>;base64,<payload>`.
    ///
    /// The declared mime type wins. When it is empty (browsers report an
    /// empty type for unknown extensions) the type is guessed from
    /// `file_name`, falling back to `application/octet-stream`.
    pub fn encode(declared_mime: &str, file_name: &str, bytes: &[u8]) -> Self {
        let mime = resolve_mime(declared_mime, file_name);
        let uri = format!("data:{};base64,{}", mime, BASE64.encode(bytes));
        DataUri(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or(FALLBACK_MIME)
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn resolve_mime<'a>(declared: &'a str, file_name: &str) -> &'a str {
    let declared = declared.trim();
    if declared.contains('/') {
        return declared;
    }
    mime_guess::from_path(file_name)
        .first_raw()
        .unwrap_or(FALLBACK_MIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_mime_is_used_verbatim() {
        let uri = DataUri::encode("image/png", "shot.jpg", b"abc");
        assert_eq!(uri.as_str(), "data:image/png;base64,YWJj");
        assert_eq!(uri.mime(), "image/png");
    }

    #[test]
    fn empty_mime_is_guessed_from_extension() {
        let uri = DataUri::encode("", "before-after.JPG", b"abc");
        assert_eq!(uri.mime(), "image/jpeg");
    }

    #[test]
    fn unknown_file_falls_back_to_octet_stream() {
        let uri = DataUri::encode("", "IMG_0042", &[]);
        assert_eq!(uri.as_str(), "data:application/octet-stream;base64,");
    }

    #[test]
    fn clones_share_the_payload() {
        let uri = DataUri::encode("image/webp", "a.webp", &[0u8; 64]);
        let copy = uri.clone();
        assert!(std::ptr::eq(uri.as_str(), copy.as_str()));
    }
}
