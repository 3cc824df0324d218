//! Sniffer facade: extension fast path plus full probe sweep.

use super::delegate::{FormatClassifier, HtsClassifier};
use super::registry;
use super::resolver;
use super::verdict::{CandidateSet, ProbeResult, SniffOutcome, SniffReport};
use crate::catalog::FormatId;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, warn};

static GAP_REPORT: Once = Once::new();

/// Log catalog entries without a probe, once per process.
fn warn_registry_gaps() {
    GAP_REPORT.call_once(|| {
        for format in registry::validate() {
            warn!(format = %format, "format is in the extension catalog but has no probe");
        }
    });
}

/// Format sniffer for every format in the catalog.
///
/// ```no_run
/// use biosniff::Sniffer;
///
/// let sniffer = Sniffer::new();
/// let outcome = sniffer.sniff("alignment.clustal".as_ref());
/// ```
pub struct Sniffer {
    classifier: Box<dyn FormatClassifier>,
}

impl Default for Sniffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sniffer {
    /// Sniffer with the built-in htslib-family classifier.
    pub fn new() -> Self {
        Self::with_classifier(Box::new(HtsClassifier))
    }

    /// Sniffer with an injected codec capability, for callers carrying
    /// a full alignment/variant codec (or a test double).
    pub fn with_classifier(classifier: Box<dyn FormatClassifier>) -> Self {
        warn_registry_gaps();
        Sniffer { classifier }
    }

    /// Identify the format of the file at `path`.
    ///
    /// Never fails: unreadable or malformed input degrades to
    /// [`SniffOutcome::Unknown`].
    pub fn sniff(&self, path: &Path) -> SniffOutcome {
        self.sniff_report(path).outcome
    }

    /// Like [`sniff`](Self::sniff), with diagnostics about how the
    /// outcome was reached.
    pub fn sniff_report(&self, path: &Path) -> SniffReport {
        let mut probes_run = 0;

        // The stated extension is a strong prior when it
        // self-confirms: ask that one probe first and short-circuit on
        // a match. Anything else falls through to the full sweep.
        if let Some(format) = extension_hint(path) {
            if let Some(probe) = registry::probe_for(format) {
                probes_run += 1;
                if probe.run(path, &*self.classifier, format) == ProbeResult::Match {
                    debug!(format = %format, "extension fast path confirmed");
                    let mut candidates = CandidateSet::default();
                    candidates.push(format);
                    return SniffReport {
                        outcome: SniffOutcome::Unique(format),
                        candidates,
                        probes_run,
                        fast_path: true,
                    };
                }
            }
        }

        let (candidates, sweep_probes) = resolver::sweep(path, &*self.classifier);
        probes_run += sweep_probes;
        let outcome = resolver::resolve(candidates.clone());
        SniffReport {
            outcome,
            candidates,
            probes_run,
            fast_path: false,
        }
    }
}

/// Candidate format named by the substring after the final `.` of the
/// file name, if that string is a canonical format name.
fn extension_hint(path: &Path) -> Option<FormatId> {
    let name = path.file_name()?.to_str()?;
    let (stem, extension) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    FormatId::from_name(extension)
}
