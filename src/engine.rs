//! Resolver dispatch.
//!
//! A resolver turns an input string into position-ordered [`Token`]s for one
//! dimension (numbers, durations). The engine does not know how any resolver
//! works; it only knows their names, the locales they accept and which other
//! resolvers ("assistants") must run first.
//!
//! ```text
//! Registry::run("durations", input, locale)
//!   -> run assistants ("numbers")   -> Assists
//!   -> DurationResolver::parse(input, locale, &assists)
//!   -> RunResult { tokens, assists, metrics }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `resolver.rs`: the [`Resolver`] trait and the [`Assists`] bag handed to it.
//! - `registry.rs`: the [`Registry`] of lazily created resolver singletons,
//!   locale validation and assistant ordering.
//! - `metrics.rs`: timing data for a run.
//!
//! ## Adding a resolver
//!
//! Implement [`Resolver`], give it a constructor that compiles whatever it
//! needs up front, and register it with [`Registry::register`]. The default
//! set lives in [`Registry::with_defaults`].
//!
//! ## Debugging
//!
//! Everything here logs through `tracing`. The CLI prints those events to
//! stderr when `BABBLE_LOG=debug` (or `trace`) is set.
//!
//! [`Token`]: crate::Token

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/resolver.rs"]
mod resolver;

pub use metrics::{AssistantMetrics, RunMetrics, RunResult};
pub use registry::{Constructor, Registry};
pub use resolver::{Assists, Resolver};
