//! Probe and sniff result types.

use crate::catalog::FormatId;
use serde::{Deserialize, Serialize};

/// Three-valued answer from a single probe.
///
/// `Unsupported` marks a format whose probe is intentionally
/// unimplemented; the resolver skips it exactly like `NoMatch` but the
/// two stay distinct so callers can tell "not this format" from "not
/// yet implemented".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeResult {
    Match,
    NoMatch,
    Unsupported,
}

impl ProbeResult {
    pub fn from_bool(matched: bool) -> Self {
        if matched {
            ProbeResult::Match
        } else {
            ProbeResult::NoMatch
        }
    }

    pub fn is_match(self) -> bool {
        self == ProbeResult::Match
    }
}

/// Candidates collected during one sweep, in probe-evaluation order.
///
/// Duplicates are impossible by construction since each format has
/// exactly one probe, but `push` guards against them anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    formats: Vec<FormatId>,
}

impl CandidateSet {
    pub fn push(&mut self, format: FormatId) {
        if !self.formats.contains(&format) {
            self.formats.push(format);
        }
    }

    pub fn contains(&self, format: FormatId) -> bool {
        self.formats.contains(&format)
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatId> {
        self.formats.iter()
    }

    pub fn as_slice(&self) -> &[FormatId] {
        &self.formats
    }

    pub fn retain<F: FnMut(&FormatId) -> bool>(&mut self, keep: F) {
        self.formats.retain(keep);
    }

    pub fn into_vec(self) -> Vec<FormatId> {
        self.formats
    }
}

impl From<Vec<FormatId>> for CandidateSet {
    fn from(formats: Vec<FormatId>) -> Self {
        let mut set = CandidateSet::default();
        for format in formats {
            set.push(format);
        }
        set
    }
}

/// Final verdict of one sniff invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "formats", rename_all = "snake_case")]
pub enum SniffOutcome {
    /// No probe claimed the file.
    Unknown,
    /// Exactly one candidate survived disambiguation.
    Unique(FormatId),
    /// Two or more candidates survived; the caller arbitrates.
    Ambiguous(Vec<FormatId>),
}

impl SniffOutcome {
    /// The single detected format, if the outcome is unique.
    pub fn unique(&self) -> Option<FormatId> {
        match self {
            SniffOutcome::Unique(format) => Some(*format),
            _ => None,
        }
    }
}

/// Outcome plus diagnostics about how it was reached.
#[derive(Debug, Clone, Serialize)]
pub struct SniffReport {
    pub outcome: SniffOutcome,
    /// Candidates before disambiguation rules were applied.
    pub candidates: CandidateSet,
    /// Total probe invocations, fast path included.
    pub probes_run: usize,
    /// Whether the extension fast path decided the outcome.
    pub fast_path: bool,
}
