//! Format sniffing implementation.
//!
//! A registry of per-format probes plus the resolution logic that
//! turns possibly-conflicting probe results into a single verdict.

pub mod api;
pub mod delegate;
pub mod io;
pub mod magic;
pub mod registry;
pub mod resolver;
pub mod text;
pub mod verdict;

pub use api::Sniffer;
pub use delegate::{FormatClassifier, HtsClassifier};
pub use verdict::{CandidateSet, ProbeResult, SniffOutcome, SniffReport};
