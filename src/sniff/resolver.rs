//! Candidate collection and disambiguation.
//!
//! The sweep must complete over every probe before any rule fires:
//! the rules look at the whole match set, so sequential collection is
//! a correctness requirement and not an implementation accident.

use super::delegate::FormatClassifier;
use super::registry;
use super::verdict::{CandidateSet, ProbeResult, SniffOutcome};
use crate::catalog::FormatId;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Condition under which a disambiguation rule fires.
pub enum Trigger {
    /// Any candidate outside the rule's drop list is present.
    AnyOther,
    /// Any of the listed candidates is present.
    AnyOf(&'static [FormatId]),
}

/// One named, ordered disambiguation rule: when the trigger holds, the
/// listed formats are dropped from the candidate set.
pub struct DisambiguationRule {
    pub name: &'static str,
    pub drops: &'static [FormatId],
    pub trigger: Trigger,
}

/// Documented business rules, applied in order after the full sweep.
pub static RULES: &[DisambiguationRule] = &[
    // Tabular delimiter formats match nearly every structured text
    // file; they only stand when nothing else claimed the file.
    DisambiguationRule {
        name: "tabular-false-positive",
        drops: &[FormatId::Tsv, FormatId::Csv],
        trigger: Trigger::AnyOther,
    },
    // BAM and BCF are gzip-derived containers, so the generic gzip
    // signature is a redundant positive rather than a distinct match.
    DisambiguationRule {
        name: "compressed-container",
        drops: &[FormatId::Gz],
        trigger: Trigger::AnyOf(&[FormatId::Bam, FormatId::Bcf]),
    },
];

/// Run every registered probe against `path` in registry order.
///
/// Returns the candidate set plus the number of probes invoked.
/// `NoMatch` and `Unsupported` are skipped silently; a probe can never
/// abort the sweep.
pub fn sweep(path: &Path, classifier: &dyn FormatClassifier) -> (CandidateSet, usize) {
    let mut candidates = CandidateSet::default();
    let mut probes_run = 0;
    for (format, probe) in registry::REGISTRY {
        probes_run += 1;
        match probe.run(path, classifier, *format) {
            ProbeResult::Match => {
                trace!(format = %format, "probe matched");
                candidates.push(*format);
            }
            ProbeResult::NoMatch | ProbeResult::Unsupported => {}
        }
    }
    (candidates, probes_run)
}

/// Apply the rule table to `candidates`, in order.
pub fn apply_rules(candidates: &mut CandidateSet) {
    for rule in RULES {
        let droppable = candidates.iter().any(|f| rule.drops.contains(f));
        if !droppable {
            continue;
        }
        let fires = match rule.trigger {
            Trigger::AnyOther => candidates.iter().any(|f| !rule.drops.contains(f)),
            Trigger::AnyOf(list) => candidates.iter().any(|f| list.contains(f)),
        };
        if fires {
            debug!(rule = rule.name, "disambiguation rule fired");
            candidates.retain(|f| !rule.drops.contains(f));
        }
    }
}

/// Collapse a candidate set to the final outcome.
pub fn resolve(mut candidates: CandidateSet) -> SniffOutcome {
    apply_rules(&mut candidates);
    match candidates.len() {
        0 => SniffOutcome::Unknown,
        1 => SniffOutcome::Unique(candidates.as_slice()[0]),
        _ => {
            warn!(candidates = ?candidates.as_slice(), "sniff found several candidates");
            SniffOutcome::Ambiguous(candidates.into_vec())
        }
    }
}
