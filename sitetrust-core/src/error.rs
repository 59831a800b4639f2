//! Analysis error types with clear, actionable messages

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by an analysis run
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input could not be normalized into a well-formed http(s) URL
    #[error("Not a valid URL: {input:?}\n\nEnter a hostname like example.com or a full URL like https://example.com.")]
    InvalidUrl { input: String },

    /// Signal collection exceeded the configured deadline
    #[error("Analysis timed out after {}s. The target may be unresponsive; try again later.", .limit.as_secs())]
    Timeout { limit: Duration },

    /// Signal collection failed. The underlying cause is logged, not shown;
    /// the user gets a generic retry message.
    #[error("Analysis failed. Please try again.")]
    SourceFailed {
        #[source]
        source: anyhow::Error,
    },

    /// The analysis task was aborted before it finished
    #[error("Analysis was cancelled before it completed.")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message_names_the_input() {
        let err = AnalysisError::InvalidUrl {
            input: "not a url".to_string(),
        };
        assert!(err.to_string().contains("not a url"));
        assert!(err.to_string().contains("example.com"));
    }

    #[test]
    fn test_source_failure_hides_the_cause() {
        let err = AnalysisError::SourceFailed {
            source: anyhow::anyhow!("connection refused by upstream"),
        };
        assert!(!err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_timeout_message_includes_limit() {
        let err = AnalysisError::Timeout {
            limit: Duration::from_secs(10),
        };
        assert!(err.to_string().contains("10s"));
    }
}
