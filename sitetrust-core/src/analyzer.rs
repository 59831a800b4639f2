//! Analysis orchestration - one call per target, timed, cancellable
//!
//! The [`Analyzer`] ties the pieces together: parse and normalize the input,
//! collect findings from the configured [`SignalSource`] under a deadline,
//! run the scoring engine, and stamp the report from the injected [`Clock`].
//! Each invocation is independent; the analyzer holds no per-request state.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::score;
use crate::signal::{titles, Signal, SignalStatus, TrustReport};
use crate::source::SignalSource;
use crate::target::Target;

/// Deadline applied to signal collection
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Time capability, injected so report timestamps are testable
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Orchestrates one analysis per call
pub struct Analyzer {
    source: Box<dyn SignalSource>,
    clock: Box<dyn Clock>,
    timeout: Duration,
}

impl Analyzer {
    /// Analyzer over the given source, with wall-clock time and the default
    /// collection deadline
    pub fn new(source: Box<dyn SignalSource>) -> Self {
        Self::with_clock(source, Box::new(SystemClock))
    }

    /// Analyzer with an explicit clock
    pub fn with_clock(source: Box<dyn SignalSource>, clock: Box<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the collection deadline
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one analysis.
    ///
    /// Fails fast on malformed input, enforces the collection deadline, and
    /// discards any partial findings when the source errors - the caller gets
    /// a typed error, never a half-built report.
    pub async fn analyze(&self, raw_url: &str) -> Result<TrustReport, AnalysisError> {
        let target = Target::parse(raw_url)?;

        info!(
            source = self.source.name(),
            target_host = target.display(),
            "starting analysis"
        );

        // Transport security is known from the URL alone and always leads
        // the signal list
        let mut signals = vec![https_signal(target.secure_transport())];

        let findings =
            match tokio::time::timeout(self.timeout, self.source.collect(&target)).await {
                Ok(Ok(findings)) => findings,
                Ok(Err(source)) => {
                    warn!(
                        source_name = self.source.name(),
                        target_host = target.display(),
                        error = %source,
                        "signal collection failed"
                    );
                    return Err(AnalysisError::SourceFailed { source });
                }
                Err(_) => {
                    warn!(
                        source_name = self.source.name(),
                        target_host = target.display(),
                        timeout_secs = self.timeout.as_secs(),
                        "signal collection timed out"
                    );
                    return Err(AnalysisError::Timeout {
                        limit: self.timeout,
                    });
                }
            };

        signals.extend(findings.signals);

        let score = score::score(
            target.display(),
            target.secure_transport(),
            findings.any_security_header,
            &signals,
        );
        let summary = score::summarize(score, &signals);

        info!(target_host = target.display(), score, "analysis complete");

        Ok(TrustReport {
            target: target.display().to_string(),
            secure_transport: target.secure_transport(),
            server: findings.server,
            page_title: findings.page_title,
            score,
            signals,
            summary,
            analyzed_at: self.clock.now(),
        })
    }

    /// Spawn the analysis as a cancellable background task
    pub fn spawn(self: Arc<Self>, raw_url: String) -> AnalysisTask {
        let handle = tokio::spawn(async move { self.analyze(&raw_url).await });
        AnalysisTask { handle }
    }
}

/// Handle to a pending analysis
pub struct AnalysisTask {
    handle: JoinHandle<Result<TrustReport, AnalysisError>>,
}

impl AnalysisTask {
    /// Abort the pending analysis. A subsequent [`AnalysisTask::join`]
    /// returns [`AnalysisError::Cancelled`].
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait for the analysis to finish
    pub async fn join(self) -> Result<TrustReport, AnalysisError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_err) if join_err.is_cancelled() => Err(AnalysisError::Cancelled),
            Err(join_err) => std::panic::resume_unwind(join_err.into_panic()),
        }
    }
}

/// The one signal derived from the URL itself
fn https_signal(secure_transport: bool) -> Signal {
    if secure_transport {
        Signal::new(
            titles::HTTPS_CONNECTION,
            "The website uses HTTPS, which encrypts data between your browser \
             and the website.",
            SignalStatus::Good,
            8,
        )
    } else {
        Signal::new(
            titles::HTTPS_CONNECTION,
            "The website does not use HTTPS, which means data is not encrypted \
             in transit.",
            SignalStatus::Bad,
            8,
        )
    }
}
