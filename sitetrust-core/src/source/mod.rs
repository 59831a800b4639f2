//! Signal source trait - abstraction over how findings are collected
//!
//! Signal collection is an explicit capability so the scoring engine never
//! depends on where observations come from:
//! - Simulated (biased randomized heuristics, the shipped default)
//! - Live probing (HTTP/TLS inspection, future)
//! - Mock (testing)

use anyhow::Result;
use async_trait::async_trait;

use crate::signal::SiteFindings;
use crate::target::Target;

pub mod simulated;

pub use simulated::SimulatedSource;

/// Trait for signal collection backends
///
/// Implementations observe one target and return structured findings. They
/// should return [`SiteFindings::unreachable`] when they can determine the
/// target is down, and reserve `Err` for collection itself breaking.
#[async_trait]
pub trait SignalSource: Send + Sync {
    /// Collect findings for the target
    async fn collect(&self, target: &Target) -> Result<SiteFindings>;

    /// Source identifier for logging/debugging
    fn name(&self) -> &'static str;
}

/// Mock source for testing
#[cfg(test)]
pub struct MockSource {
    pub findings: SiteFindings,
}

#[cfg(test)]
#[async_trait]
impl SignalSource for MockSource {
    async fn collect(&self, _target: &Target) -> Result<SiteFindings> {
        Ok(self.findings.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{Signal, SignalStatus};

    #[tokio::test]
    async fn test_mock_source() {
        let source = MockSource {
            findings: SiteFindings {
                signals: vec![Signal::new(
                    "Privacy Policy",
                    "Privacy policy detected.",
                    SignalStatus::Good,
                    3,
                )],
                any_security_header: true,
                page_title: Some("Example - Home".to_string()),
                server: None,
            },
        };

        let target = Target::parse("example.com").unwrap();
        let findings = source.collect(&target).await.unwrap();
        assert!(findings.any_security_header);
        assert_eq!(findings.signals.len(), 1);
    }
}
