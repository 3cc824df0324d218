//! Extension fast path and diagnostic report behavior.

use crate::common::write_sample;
use biosniff::sniff::registry;
use biosniff::{FormatClassifier, FormatId, SniffOutcome, Sniffer};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn clustal_extension_short_circuits() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(
        &dir,
        "x.clustal",
        b"CLUSTAL W (1.81) multiple sequence alignment\n\nseq1 ACGT\n",
    );
    let report = Sniffer::new().sniff_report(&path);
    assert_eq!(report.outcome, SniffOutcome::Unique(FormatId::Clustal));
    assert!(report.fast_path);
    assert_eq!(report.probes_run, 1);
}

#[test]
fn failed_fast_path_falls_through_to_full_sweep() {
    let dir = TempDir::new().unwrap();
    // Claims to be clustal, is actually nexus.
    let path = write_sample(&dir, "x.clustal", b"#NEXUS\nbegin data;\nend;\n");
    let report = Sniffer::new().sniff_report(&path);
    assert_eq!(report.outcome, SniffOutcome::Unique(FormatId::Nexus));
    assert!(!report.fast_path);
    assert_eq!(report.probes_run, 1 + registry::REGISTRY.len());
}

#[test]
fn unknown_extension_goes_straight_to_sweep() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "data.xyz", b"#NEXUS\nbegin data;\nend;\n");
    let report = Sniffer::new().sniff_report(&path);
    assert!(!report.fast_path);
    assert_eq!(report.probes_run, registry::REGISTRY.len());
}

#[test]
fn unsupported_extension_does_not_conclude_nonmatch() {
    let dir = TempDir::new().unwrap();
    // .yaml probe is Unsupported; the sweep still gets its chance.
    let path = write_sample(&dir, "table.yaml", b"a\tb\n1\t2\n");
    let report = Sniffer::new().sniff_report(&path);
    assert!(!report.fast_path);
    assert_eq!(report.outcome, SniffOutcome::Unique(FormatId::Tsv));
}

/// Counting classifier used as a test double.
struct CountingClassifier {
    calls: Arc<AtomicUsize>,
    answer: bool,
}

impl FormatClassifier for CountingClassifier {
    fn classifies(&self, _path: &Path, format: FormatId) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer && format == FormatId::Bam
    }
}

#[test]
fn fast_path_asks_the_delegate_exactly_once() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "x.bam", b"not really a bam\n");
    let calls = Arc::new(AtomicUsize::new(0));
    let sniffer = Sniffer::with_classifier(Box::new(CountingClassifier {
        calls: Arc::clone(&calls),
        answer: true,
    }));
    let report = sniffer.sniff_report(&path);
    assert_eq!(report.outcome, SniffOutcome::Unique(FormatId::Bam));
    assert!(report.fast_path);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn sweep_consults_the_delegate_for_every_delegated_probe() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "plain", b"nothingtosee\n");
    let calls = Arc::new(AtomicUsize::new(0));
    let sniffer = Sniffer::with_classifier(Box::new(CountingClassifier {
        calls: Arc::clone(&calls),
        answer: false,
    }));
    let report = sniffer.sniff_report(&path);
    assert_eq!(report.outcome, SniffOutcome::Unknown);
    // bam, bcf, sam, vcf
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}
