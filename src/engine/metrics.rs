//! Run metrics.
//!
//! Collected on every [`Registry::run`](super::Registry::run); they only cost
//! a few `Instant::now()` calls. `parse_verbose` surfaces them and the CLI
//! prints them.

use crate::locale::Locale;
use crate::Token;
use std::time::Duration;

use super::Assists;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run, assistants included.
    pub total: Duration,
    /// One entry per assistant run, in the order they ran (nested assistants first).
    pub assistants: Vec<AssistantMetrics>,
    /// Time spent in the requested resolver's own `parse`.
    pub resolve: Duration,
}

/// Timing for a single assistant run.
#[derive(Debug, Clone)]
pub struct AssistantMetrics {
    pub name: &'static str,
    /// Elapsed time, including the assistant's own assistants.
    pub elapsed: Duration,
    /// Number of top-level tokens it produced.
    pub tokens: usize,
}

/// Resolver output bundled with the locale used and timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub tokens: Vec<Token>,
    /// Output of the resolver's direct assistants.
    pub assists: Assists,
    pub locale: &'static Locale,
    pub metrics: RunMetrics,
}
