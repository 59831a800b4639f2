//! Target parsing - normalization and validation of user-supplied URLs
//!
//! Input arrives as free text. A missing scheme gets `https://` prefixed
//! before validation, and the display form strips the scheme and any trailing
//! slash, so `Example.com/` and `https://example.com` normalize to the same
//! target.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AnalysisError;

/// Shape check for a normalized URL: scheme, dotted host, optional port and
/// path. Deliberately stricter than generic URL syntax - bare words like
/// `localhost` are rejected because the analysis is meaningless for them.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+(:\d{1,5})?(/[^\s]*)?$")
        .expect("URL pattern is valid")
});

/// A validated analysis target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    url: String,
    display: String,
    secure_transport: bool,
}

impl Target {
    /// Parse and normalize free-text input into a target.
    ///
    /// Returns [`AnalysisError::InvalidUrl`] when the input is not a
    /// well-formed http(s) URL after normalization.
    pub fn parse(input: &str) -> Result<Self, AnalysisError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::InvalidUrl {
                input: input.to_string(),
            });
        }

        let url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        if !URL_PATTERN.is_match(&url) {
            return Err(AnalysisError::InvalidUrl {
                input: input.to_string(),
            });
        }

        let display = url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_lowercase();

        let secure_transport = url.starts_with("https://");

        Ok(Self {
            url,
            display,
            secure_transport,
        })
    }

    /// The full normalized URL, scheme included
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Display form: lowercased host (and path), scheme and trailing slash
    /// stripped. This is the string reputation matching runs against.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the target uses HTTPS
    pub fn secure_transport(&self) -> bool {
        self.secure_transport
    }

    /// First label of the host, e.g. `docs` for `docs.example.com`
    pub fn first_label(&self) -> &str {
        let host = self.display.split(['/', ':']).next().unwrap_or(&self.display);
        host.split('.').next().unwrap_or(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scheme_is_prefixed_when_missing() {
        let target = Target::parse("example.com").unwrap();
        assert_eq!(target.url(), "https://example.com");
        assert!(target.secure_transport());
    }

    #[test]
    fn test_explicit_http_is_insecure() {
        let target = Target::parse("http://example.com").unwrap();
        assert!(!target.secure_transport());
        assert_eq!(target.display(), "example.com");
    }

    #[test]
    fn test_display_strips_scheme_and_trailing_slash() {
        let target = Target::parse("https://Example.com/").unwrap();
        assert_eq!(target.display(), "example.com");

        let with_path = Target::parse("https://example.com/about/").unwrap();
        assert_eq!(with_path.display(), "example.com/about");
    }

    #[test]
    fn test_port_and_path_are_accepted() {
        let target = Target::parse("example.com:8443/login?next=/home").unwrap();
        assert_eq!(target.display(), "example.com:8443/login?next=/home");
    }

    #[test]
    fn test_first_label() {
        assert_eq!(Target::parse("docs.google.com").unwrap().first_label(), "docs");
        assert_eq!(Target::parse("example.com/path").unwrap().first_label(), "example");
        assert_eq!(Target::parse("example.com:8080").unwrap().first_label(), "example");
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        for input in ["", "   ", "not a url", "https://", "ftp://example.com", "ex ample.com", ".com", "example."] {
            assert!(
                Target::parse(input).is_err(),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_invalid_url_error_carries_input() {
        let err = Target::parse("not a url").unwrap_err();
        match err {
            AnalysisError::InvalidUrl { input } => assert_eq!(input, "not a url"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
