//! URL sanitization and canonicalization.
//!
//! Equivalent URLs must map to the same text so that they derive the same slug.
//! Two differences are considered irrelevant:
//!
//! 1. **`www.` host prefix**: `http://www.example.com` and `http://example.com`
//! 2. **Query parameter order**: `?b=2&a=1` and `?a=1&b=2`
//!
//! Everything else (path case, fragments, ports) is preserved as parsed.

use percent_encoding::percent_decode_str;
use serde_json::json;
use url::{Position, Url, form_urlencoded};

use crate::error::AppError;

/// Longest `original_url` that is ever persisted, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL sanitization.
#[derive(Debug, thiserror::Error)]
pub enum UrlCanonicalizationError {
    #[error("Original URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

impl From<UrlCanonicalizationError> for AppError {
    fn from(e: UrlCanonicalizationError) -> Self {
        match e {
            UrlCanonicalizationError::InvalidFormat(_) => {
                AppError::parse("Invalid URL format", json!({ "reason": e.to_string() }))
            }
            UrlCanonicalizationError::Empty | UrlCanonicalizationError::UnsupportedScheme(_) => {
                AppError::bad_request("Invalid input data", json!({ "reason": e.to_string() }))
            }
        }
    }
}

/// Validates a user-submitted URL and returns the text that gets stored.
///
/// # Rules
///
/// - Must be non-empty
/// - Must parse as an absolute URL
/// - Scheme must be `http` or `https`
/// - The canonical form is truncated to [`MAX_URL_LENGTH`] characters
///
/// # Errors
///
/// Returns [`UrlCanonicalizationError::Empty`] for empty input,
/// [`UrlCanonicalizationError::InvalidFormat`] for unparsable input and
/// [`UrlCanonicalizationError::UnsupportedScheme`] for any other scheme.
pub fn sanitize_url(input: &str) -> Result<String, UrlCanonicalizationError> {
    if input.is_empty() {
        return Err(UrlCanonicalizationError::Empty);
    }

    let url =
        Url::parse(input).map_err(|e| UrlCanonicalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlCanonicalizationError::UnsupportedScheme(other.to_string())),
    }

    let mut canonical = canonicalize(input)?;
    if let Some((cut, _)) = canonical.char_indices().nth(MAX_URL_LENGTH) {
        canonical.truncate(cut);
    }

    Ok(canonical)
}

/// Normalizes a URL to its canonical form.
///
/// Strips a literal `www.` prefix from the (already lowercased) host, sorts query pairs by
/// key (values of a repeated key keep their relative order) and drops a bare
/// root path. The function is pure and idempotent.
///
/// A query string that cannot be decoded losslessly (broken escapes, `;`
/// separators, escapes that do not decode to UTF-8) is passed through
/// untouched; only a malformed URL structure is an error.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(canonicalize("http://www.example.com").unwrap(), "http://example.com");
/// assert_eq!(
///     canonicalize("https://www.example.com?b=2&a=1").unwrap(),
///     "https://example.com?a=1&b=2"
/// );
/// ```
pub fn canonicalize(raw: &str) -> Result<String, UrlCanonicalizationError> {
    let mut url =
        Url::parse(raw).map_err(|e| UrlCanonicalizationError::InvalidFormat(e.to_string()))?;

    let stripped_host = url
        .host_str()
        .and_then(|host| host.strip_prefix("www."))
        .map(str::to_owned);
    if let Some(host) = stripped_host {
        url.set_host(Some(&host))
            .map_err(|e| UrlCanonicalizationError::InvalidFormat(e.to_string()))?;
    }

    if let Some(query) = url.query() {
        let canonical_query = canonicalize_query(query);
        if canonical_query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&canonical_query));
        }
    }

    Ok(serialize(&url))
}

/// Re-encodes a raw query string with its pairs sorted by key.
fn canonicalize_query(raw_query: &str) -> String {
    if !is_well_formed_query(raw_query) {
        return raw_query.to_string();
    }

    let mut pairs: Vec<_> = form_urlencoded::parse(raw_query.as_bytes()).collect();
    // stable: equal keys keep their original order
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(pairs);
    serializer.finish()
}

/// Rejects queries with `;` separators, broken percent escapes or escapes
/// that do not decode to UTF-8.
fn is_well_formed_query(raw_query: &str) -> bool {
    if raw_query.contains(';') {
        return false;
    }

    let bytes = raw_query.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    i += 3;
                }
                _ => return false,
            }
        } else {
            i += 1;
        }
    }

    // form_urlencoded replaces invalid UTF-8 with U+FFFD
    percent_decode_str(raw_query).decode_utf8().is_ok()
}

/// Serializes the URL, leaving out a path that is only `/`.
fn serialize(url: &Url) -> String {
    if url.has_host() && url.path() == "/" {
        format!(
            "{}{}",
            &url[..Position::BeforePath],
            &url[Position::AfterPath..]
        )
    } else {
        url.to_string()
    }
}
