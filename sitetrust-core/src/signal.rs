//! Signal model - the data contract between signal sources and the scoring engine
//!
//! A [`Signal`] is one discrete security observation with a qualitative status
//! and a numeric impact weight. A [`SiteFindings`] bundle is what a
//! [`crate::source::SignalSource`] hands back for one target; a [`TrustReport`]
//! is the finished analysis the caller receives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical signal titles. The summary generator keys its recommendations on
/// these, so sources must use them verbatim.
pub mod titles {
    pub const HTTPS_CONNECTION: &str = "HTTPS Connection";
    pub const CLICKJACKING_PROTECTION: &str = "Clickjacking Protection";
    pub const CONTENT_SECURITY_POLICY: &str = "Content Security Policy";
    pub const DOMAIN_AGE: &str = "Domain Age";
    pub const SSL_CERTIFICATE: &str = "SSL Certificate";
    pub const PRIVACY_POLICY: &str = "Privacy Policy";
    pub const WEBSITE_ACCESSIBILITY: &str = "Website Accessibility";
}

/// Qualitative outcome of one security check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    /// Check passed
    Good,
    /// Check raised a concern worth half credit
    Warning,
    /// Check failed outright
    Bad,
    /// Informational only, excluded from scoring
    Info,
}

impl SignalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStatus::Good => "good",
            SignalStatus::Warning => "warning",
            SignalStatus::Bad => "bad",
            SignalStatus::Info => "info",
        }
    }
}

/// One named security observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Short display name (see [`titles`])
    pub title: String,

    /// Human-readable explanation of what was observed
    pub description: String,

    /// Qualitative outcome
    pub status: SignalStatus,

    /// Weight on a 1-10 scale; higher means the check matters more
    pub impact: u8,
}

impl Signal {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: SignalStatus,
        impact: u8,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
            impact,
        }
    }
}

/// Everything a signal source learned about one target
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteFindings {
    /// Observations in collection order
    pub signals: Vec<Signal>,

    /// Whether any security-relevant response header was present
    pub any_security_header: bool,

    /// Page title, when one could be determined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    /// Server banner, when one could be determined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

impl SiteFindings {
    /// Degraded findings for a target the source could not reach: a single
    /// accessibility warning and nothing else.
    pub fn unreachable() -> Self {
        Self {
            signals: vec![Signal::new(
                titles::WEBSITE_ACCESSIBILITY,
                "Unable to access the website for detailed analysis. \
                 The site may be down or blocking our requests.",
                SignalStatus::Warning,
                5,
            )],
            any_security_header: false,
            page_title: None,
            server: None,
        }
    }
}

/// The finished analysis for one target. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustReport {
    /// Normalized target host (scheme and trailing slash stripped)
    pub target: String,

    /// Whether the target was reached over HTTPS
    pub secure_transport: bool,

    /// Server banner, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// Page title, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    /// Aggregate trust score in [0,100]
    pub score: u8,

    /// Signals in collection order
    pub signals: Vec<Signal>,

    /// Human-readable summary of the result
    pub summary: String,

    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,
}
