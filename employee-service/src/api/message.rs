use axum::http::{HeaderName, HeaderValue};

/// Informational outcome header attached to every response.
pub const MESSAGE_HEADER: HeaderName = HeaderName::from_static("message");

/// Builds the `message` header pair for a response tuple.
///
/// Control characters are replaced by spaces; every other byte of the text is
/// a legal header value byte, so user supplied names can be echoed back.
pub fn message(text: impl AsRef<str>) -> [(HeaderName, HeaderValue); 1] {
    let sanitized = text.as_ref().replace(|c: char| c.is_control(), " ");
    let value = HeaderValue::from_bytes(sanitized.as_bytes())
        .unwrap_or_else(|_| HeaderValue::from_static("(unprintable message)"));

    [(MESSAGE_HEADER, value)]
}
