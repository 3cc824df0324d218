//! End-to-end sniff outcomes on minimal samples.
//!
//! Text samples deliberately use non-canonical file names so detection
//! goes through the full probe sweep; binary container samples use
//! their customary extensions, as real inputs do.

use crate::common::{gzip_stored, write_sample};
use biosniff::{FormatId, SniffOutcome, Sniffer};
use tempfile::TempDir;

fn unique(name: &str, content: &[u8]) -> Option<FormatId> {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, name, content);
    Sniffer::new().sniff(&path).unique()
}

#[test]
fn clustal_sample() {
    let content = b"CLUSTAL W (1.81) multiple sequence alignment\n\nseq1 ACGTACGT\nseq2 ACGTACGT\n";
    assert_eq!(unique("alignment.txt", content), Some(FormatId::Clustal));
}

#[test]
fn nexus_sample() {
    let content = b"#NEXUS\nbegin taxa;\n  dimensions ntax=2;\nend;\n";
    assert_eq!(unique("tree.nex", content), Some(FormatId::Nexus));
}

#[test]
fn gff_samples() {
    let gff2 = b"##gff-version 2\nchr1\tsource\tgene\t1\t100\t.\t+\t.\tname g1\n";
    assert_eq!(unique("genes2.gff", gff2), Some(FormatId::Gff2));

    let gff3 = b"##gff-version 3\nchr1\tsource\tgene\t1\t100\t.\t+\t.\tID=g1\n";
    assert_eq!(unique("genes3.gff", gff3), Some(FormatId::Gff3));
}

#[test]
fn stockholm_sample() {
    let content = b"# STOCKHOLM 1.0\n#=GF ID example\nseq1 ACGU\n//\n";
    assert_eq!(unique("align.sto", content), Some(FormatId::Stockholm));
}

#[test]
fn xmfa_sample() {
    let content = b"#FormatVersion Mauve1\n>1:1-8 + chr1\nACGTACGT\n";
    assert_eq!(unique("align.mauve", content), Some(FormatId::Xmfa));
}

#[test]
fn gzip_sample_via_sweep() {
    assert_eq!(
        unique("compressed", &gzip_stored(b"payload")),
        Some(FormatId::Gz)
    );
}

#[test]
fn bzip2_sample() {
    let content = [0x42, 0x5A, 0x68, 0x39, 0x31, 0x41, 0x59, 0x26, 0x53, 0x59];
    assert_eq!(unique("archive.bzip2", &content), Some(FormatId::Bz2));
}

#[test]
fn zip_sample() {
    let content = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x00, 0x00];
    assert_eq!(unique("archive.zip", &content), Some(FormatId::Zip));
}

#[test]
fn seven_zip_sample() {
    let content = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C, 0x00, 0x04];
    assert_eq!(unique("archive.7z", &content), Some(FormatId::SevenZip));
    assert_eq!(unique("archive.bin7", &content), Some(FormatId::SevenZip));
}

#[test]
fn xz_sample() {
    let content = [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00, 0x00, 0x04];
    assert_eq!(unique("data.xz", &content), Some(FormatId::Xz));
}

#[test]
fn json_sample_via_sweep() {
    let content = b"{\"alpha\": [1, 2, 3], \"beta\": null}\n";
    assert_eq!(unique("config.jsn", content), Some(FormatId::Json));
}

#[test]
fn fastq_sample() {
    let content = b"@read1\nACGTACGT\n+\n!!!!!!!!\n";
    assert_eq!(unique("reads.fq", content), Some(FormatId::Fastq));
}

#[test]
fn vcf_sample_via_sweep() {
    let content = b"##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\n";
    assert_eq!(unique("variants.txt", content), Some(FormatId::Vcf));
}

#[test]
fn empty_file_is_unknown() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "empty", b"");
    assert_eq!(Sniffer::new().sniff(&path), SniffOutcome::Unknown);
}

#[test]
fn sniff_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "reads.fq", b"@read1\nACGT\n+\n!!!!\n");
    let sniffer = Sniffer::new();
    assert_eq!(sniffer.sniff(&path), sniffer.sniff(&path));
}

#[test]
fn bed_wins_over_tsv() {
    let dir = TempDir::new().unwrap();
    let content = b"chr1\t100\t200\tregion1\nchr2\t5\t50\tregion2\n";
    let path = write_sample(&dir, "intervals", content);
    let report = Sniffer::new().sniff_report(&path);
    assert!(report.candidates.contains(FormatId::Tsv));
    assert_eq!(report.outcome, SniffOutcome::Unique(FormatId::Bed));
}

#[test]
fn bam_wins_over_gz() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "alignment", &gzip_stored(b"BAM\x01binary"));
    let report = Sniffer::new().sniff_report(&path);
    assert!(report.candidates.contains(FormatId::Gz));
    assert!(report.candidates.contains(FormatId::Bam));
    assert_eq!(report.outcome, SniffOutcome::Unique(FormatId::Bam));
}

#[test]
fn inconsistent_phylip_is_not_phylip() {
    let dir = TempDir::new().unwrap();
    let content = b"3 8\nseq1 AAAACCCC\nseq2 GGGGTTTT\nseq3 ACGTACG\n";
    let path = write_sample(&dir, "align.phy", content);
    let report = Sniffer::new().sniff_report(&path);
    assert!(!report.candidates.contains(FormatId::Phylip));
}

#[test]
fn magic_length_boundary_is_unknown() {
    // Exactly the gzip signature, nothing more.
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "short", &[0x1F, 0x8B]);
    assert_eq!(Sniffer::new().sniff(&path), SniffOutcome::Unknown);
}

#[test]
fn unsupported_formats_never_contribute() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "config.yaml", b"key: value\nother: 1\n");
    let report = Sniffer::new().sniff_report(&path);
    assert!(!report.candidates.contains(FormatId::Yaml));
    // The tabular probes may legitimately claim it instead.
    assert_ne!(report.outcome, SniffOutcome::Unique(FormatId::Yaml));
}

#[test]
fn lone_tabular_match_survives() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "table", b"name\tcount\nalpha\t3\n");
    assert_eq!(
        Sniffer::new().sniff(&path),
        SniffOutcome::Unique(FormatId::Tsv)
    );
}

#[test]
fn fasta_qual_heuristic_split() {
    assert_eq!(
        unique("protein.seq", b">sp|P12345\nMKTAYIAKQR\n"),
        Some(FormatId::Fasta)
    );
    assert_eq!(
        unique("scores.seq", b">sp|P12345\n40 40 38 12 9 40 38 22 40 40\n"),
        Some(FormatId::Qual)
    );
}
