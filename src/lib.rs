//! biosniff identifies the file format of life-science data files by
//! inspecting content and file names, without a user-supplied
//! declaration.
//!
//! The entry point is [`Sniffer`]: `sniff(path)` returns a
//! [`SniffOutcome`] that is unknown, unique, or ambiguous. Probes are
//! cheap and bounded; no probe ever reads more than a short prefix (or
//! tail) of the file, and no input, however malformed, makes `sniff`
//! fail.

/// Format identifiers and the extension catalog
pub mod catalog;
/// Error types
pub mod error;
/// Tracing setup
pub mod logging;
/// Probes, registry, and resolution
pub mod sniff;

pub use catalog::FormatId;
pub use error::{Result, SniffError};
pub use sniff::{FormatClassifier, HtsClassifier, ProbeResult, SniffOutcome, SniffReport, Sniffer};
