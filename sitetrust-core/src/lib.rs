//! Sitetrust library exports

pub mod analyzer;
pub mod error;
pub mod score;
pub mod signal;
pub mod source;
pub mod target;

pub use analyzer::{AnalysisTask, Analyzer, Clock, SystemClock};
pub use error::AnalysisError;
pub use signal::{Signal, SignalStatus, SiteFindings, TrustReport};
pub use source::{SignalSource, SimulatedSource};
pub use target::Target;
