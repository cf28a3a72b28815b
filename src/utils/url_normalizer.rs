//! Preparation of user-supplied URLs before they reach the store.
//!
//! The store compares URLs byte for byte, so every spelling of the same
//! address has to be reduced to one form first: a missing scheme defaults to
//! `http://`, the host is lowercased, and default ports and fragments are
//! dropped.

use url::{Host, Url};

/// Scheme prepended to input that carries none.
pub const DEFAULT_SCHEME: &str = "http://";

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL host must be a domain name, localhost or an IP address")]
    InvalidHost,
}

/// Prepares raw user input for shortening.
///
/// Trims surrounding whitespace, prepends [`DEFAULT_SCHEME`] when the input
/// has no `scheme://` prefix, then applies [`normalize_url`].
///
/// # Errors
///
/// See [`normalize_url`].
///
/// # Examples
///
/// ```
/// use tinylink::utils::url_normalizer::prepare_url;
///
/// assert_eq!(prepare_url("  example.com/a ").unwrap(), "http://example.com/a");
/// assert_eq!(prepare_url("https://Example.com:443/#top").unwrap(), "https://example.com/");
/// ```
pub fn prepare_url(input: &str) -> Result<String, UrlNormalizationError> {
    normalize_url(&with_default_scheme(input))
}

/// Prepends [`DEFAULT_SCHEME`] unless the input already names a scheme.
pub fn with_default_scheme(input: &str) -> String {
    let trimmed = input.trim();

    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    }
}

/// Reduces an absolute HTTP(S) URL to its canonical spelling.
///
/// Parsing an http(s) URL already lowercases the scheme and host, converts
/// unicode hosts to punycode and drops a port equal to the scheme default.
/// On top of that the host is checked and the fragment removed. Path, query
/// and userinfo are kept as written.
///
/// # Errors
///
/// - [`UrlNormalizationError::InvalidFormat`] if the input does not parse
/// - [`UrlNormalizationError::UnsupportedProtocol`] for schemes other than `http`/`https`
/// - [`UrlNormalizationError::InvalidHost`] for single-label hosts other than `localhost`
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }

    check_host(&url)?;
    url.set_fragment(None);

    Ok(url.to_string())
}

/// Accepts hosts that can name a real machine: dotted domains, `localhost`
/// and IP literals.
fn check_host(url: &Url) -> Result<(), UrlNormalizationError> {
    match url.host() {
        Some(Host::Domain(domain)) => {
            let bare = domain.trim_end_matches('.');
            if bare.contains('.') || bare.eq_ignore_ascii_case("localhost") {
                Ok(())
            } else {
                Err(UrlNormalizationError::InvalidHost)
            }
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        None => Err(UrlNormalizationError::InvalidHost),
    }
}
