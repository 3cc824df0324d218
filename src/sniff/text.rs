//! Line-prefix, token, and structural content probes.
//!
//! Every probe reads a bounded prefix (or tail) of the file and maps
//! any I/O or parse failure to `NoMatch`. None of these validate full
//! file correctness; they answer "is the content consistent with this
//! format" from a cheap, constant-size inspection.

use super::io::{self, MAX_DOCUMENT_PREFIX, MAX_TEXT_PREFIX};
use super::verdict::ProbeResult;
use std::path::Path;

/// Canonical amino-acid/nucleotide residue characters, shared by the
/// fasta and qual heuristics.
const RESIDUES: &str = "ABCDEFGHIKLMNPQRSTUVWYZX*-";

/// Line prefixes a MAF body line may carry.
const MAF_TOKENS: [&str; 5] = ["a ", "s ", "e ", "q ", "i "];

/// Upper bound on PHYLIP records inspected before giving up.
const MAX_PHYLIP_RECORDS: usize = 1024;

fn lines(path: &Path, max_lines: usize) -> Option<Vec<String>> {
    io::read_lines(path, max_lines, MAX_TEXT_PREFIX).ok()
}

pub(crate) fn is_clustal(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 1) else {
        return ProbeResult::NoMatch;
    };
    let first = lines.first().map(|l| l.trim()).unwrap_or("");
    ProbeResult::from_bool(!first.is_empty() && first.starts_with("CLUSTAL"))
}

pub(crate) fn is_nexus(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 1) else {
        return ProbeResult::NoMatch;
    };
    ProbeResult::from_bool(lines.first().is_some_and(|l| l.starts_with("#NEXUS")))
}

pub(crate) fn is_gff2(path: &Path) -> ProbeResult {
    is_gff_version(path, "gff-version 2")
}

pub(crate) fn is_gff3(path: &Path) -> ProbeResult {
    is_gff_version(path, "gff-version 3")
}

fn is_gff_version(path: &Path, directive: &str) -> ProbeResult {
    let Some(lines) = lines(path, 1) else {
        return ProbeResult::NoMatch;
    };
    ProbeResult::from_bool(lines.first().is_some_and(|l| l.trim().contains(directive)))
}

pub(crate) fn is_stockholm(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 1) else {
        return ProbeResult::NoMatch;
    };
    ProbeResult::from_bool(lines.first().is_some_and(|l| l.contains("STOCKHOLM")))
}

pub(crate) fn is_xmfa(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 1) else {
        return ProbeResult::NoMatch;
    };
    ProbeResult::from_bool(
        lines
            .first()
            .is_some_and(|l| l.contains("FormatVersion") && l.contains("Mauve")),
    )
}

pub(crate) fn is_ena(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 1) else {
        return ProbeResult::NoMatch;
    };
    ProbeResult::from_bool(lines.first().is_some_and(|l| l.starts_with("ID")))
}

/// GenBank detection is disabled: the intended first-line `LOCUS`
/// marker check has never been validated against real records, so this
/// probe contributes no candidate for now.
pub(crate) fn is_genbank(_path: &Path) -> ProbeResult {
    ProbeResult::NoMatch
}

pub(crate) fn is_fasta(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 2) else {
        return ProbeResult::NoMatch;
    };
    let header = lines.first().map(String::as_str).unwrap_or("");
    let sequence = lines.get(1).map(String::as_str).unwrap_or("");
    let leading_residue = sequence.chars().next().is_some_and(|c| RESIDUES.contains(c));
    ProbeResult::from_bool(header.starts_with('>') && leading_residue)
}

/// Quality files share the `>` header with FASTA; the signal is the
/// presence of score characters outside the residue alphabet on the
/// second line. A FASTA sequence line that happens to contain none of
/// those characters is indistinguishable from certain quality
/// encodings; that is an accepted heuristic limit, not a defect.
pub(crate) fn is_qual(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 2) else {
        return ProbeResult::NoMatch;
    };
    let header = lines.first().map(String::as_str).unwrap_or("");
    let scores = lines
        .get(1)
        .map(|l| l.chars().filter(|c| !RESIDUES.contains(*c)).count())
        .unwrap_or(0);
    ProbeResult::from_bool(header.starts_with('>') && scores > 1)
}

pub(crate) fn is_fastq(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 4) else {
        return ProbeResult::NoMatch;
    };
    if lines.len() < 4 {
        return ProbeResult::NoMatch;
    }
    ProbeResult::from_bool(lines[0].starts_with('@') && lines[2].starts_with('+'))
}

/// BED: at least four whitespace-separated columns with integer
/// start/end coordinates. The coordinate check keeps prose headers of
/// other text formats from registering as intervals.
pub(crate) fn is_bed(path: &Path) -> ProbeResult {
    let Some(fields) = first_line_fields(path) else {
        return ProbeResult::NoMatch;
    };
    ProbeResult::from_bool(
        fields.len() >= 4
            && fields[1].parse::<u64>().is_ok()
            && fields[2].parse::<u64>().is_ok(),
    )
}

/// bedGraph: the BED interval shape with a numeric track value in the
/// fourth column.
pub(crate) fn is_bedgraph(path: &Path) -> ProbeResult {
    let Some(fields) = first_line_fields(path) else {
        return ProbeResult::NoMatch;
    };
    ProbeResult::from_bool(
        fields.len() >= 4
            && fields[1].parse::<u64>().is_ok()
            && fields[2].parse::<u64>().is_ok()
            && fields[3].parse::<f64>().is_ok(),
    )
}

fn first_line_fields(path: &Path) -> Option<Vec<String>> {
    let lines = lines(path, 1)?;
    let first = lines.first()?;
    Some(first.split_whitespace().map(str::to_owned).collect())
}

pub(crate) fn is_csv(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 1) else {
        return ProbeResult::NoMatch;
    };
    let columns = lines.first().map(|l| l.split(',').count()).unwrap_or(0);
    ProbeResult::from_bool(columns > 1)
}

pub(crate) fn is_tsv(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, 1) else {
        return ProbeResult::NoMatch;
    };
    let columns = lines
        .first()
        .map(|l| l.split_whitespace().count())
        .unwrap_or(0);
    ProbeResult::from_bool(columns > 1)
}

/// JSON: bounded read plus a full parse of the prefix. A prefix that
/// fills the whole budget may be truncated mid-document and cannot be
/// judged either way, so it reads as NoMatch.
pub(crate) fn is_json(path: &Path) -> ProbeResult {
    let Ok(data) = io::read_prefix(path, MAX_DOCUMENT_PREFIX) else {
        return ProbeResult::NoMatch;
    };
    if data.is_empty() || data.len() == MAX_DOCUMENT_PREFIX {
        return ProbeResult::NoMatch;
    }
    ProbeResult::from_bool(serde_json::from_slice::<serde_json::Value>(&data).is_ok())
}

/// MAF: within a bounded prefix, every non-comment non-blank line must
/// open with one of the `a s e q i` record tokens.
pub(crate) fn is_maf(path: &Path) -> ProbeResult {
    let Ok(data) = io::read_prefix(path, 5000) else {
        return ProbeResult::NoMatch;
    };
    let body: Vec<String> = io::split_lines(&data, usize::MAX)
        .into_iter()
        .filter(|l| !l.starts_with('#') && !l.trim().is_empty())
        .collect();
    if body.is_empty() {
        return ProbeResult::NoMatch;
    }
    ProbeResult::from_bool(
        body.iter()
            .all(|l| MAF_TOKENS.iter().any(|t| l.starts_with(t))),
    )
}

/// Newick: first non-whitespace byte is `(`, last non-whitespace byte
/// is `;`. The tail is read with a bounded seek from the end so large
/// trees stay cheap.
pub(crate) fn is_newick(path: &Path) -> ProbeResult {
    let Ok(head) = io::read_prefix(path, MAX_TEXT_PREFIX) else {
        return ProbeResult::NoMatch;
    };
    let opens = head
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'(');
    if !opens {
        return ProbeResult::NoMatch;
    }
    let Ok(tail) = io::read_tail(path, MAX_TEXT_PREFIX) else {
        return ProbeResult::NoMatch;
    };
    let closes = tail
        .iter()
        .rfind(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b';');
    ProbeResult::from_bool(closes)
}

/// PHYLIP: a `(count, length)` header followed by `count` records whose
/// sequences, spaces removed, all have exactly the declared length.
/// The first malformed line or length mismatch aborts with NoMatch.
pub(crate) fn is_phylip(path: &Path) -> ProbeResult {
    let Some(lines) = lines(path, MAX_PHYLIP_RECORDS + 1) else {
        return ProbeResult::NoMatch;
    };
    let mut iter = lines.iter();
    let Some(header) = iter.next() else {
        return ProbeResult::NoMatch;
    };
    let mut dims = header.split_whitespace();
    let (Some(count), Some(length), None) = (dims.next(), dims.next(), dims.next()) else {
        return ProbeResult::NoMatch;
    };
    let (Ok(count), Ok(length)) = (count.parse::<usize>(), length.parse::<usize>()) else {
        return ProbeResult::NoMatch;
    };
    if count == 0 || count > MAX_PHYLIP_RECORDS {
        return ProbeResult::NoMatch;
    }
    for _ in 0..count {
        let Some(record) = iter.next() else {
            return ProbeResult::NoMatch;
        };
        let Some((_name, sequence)) = record.trim().split_once(' ') else {
            return ProbeResult::NoMatch;
        };
        let residues = sequence.chars().filter(|c| *c != ' ').count();
        if residues != length {
            return ProbeResult::NoMatch;
        }
    }
    ProbeResult::Match
}

/// phyloXML: the first XML element in a bounded prefix must carry a
/// `phyloxml` root tag.
pub(crate) fn is_phyloxml(path: &Path) -> ProbeResult {
    let Ok(data) = io::read_prefix(path, MAX_DOCUMENT_PREFIX) else {
        return ProbeResult::NoMatch;
    };
    let mut reader = quick_xml::Reader::from_reader(data.as_slice());
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(start)) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                return ProbeResult::from_bool(name.contains("phyloxml"));
            }
            Ok(quick_xml::events::Event::Eof) => return ProbeResult::NoMatch,
            Ok(_) => {}
            Err(_) => return ProbeResult::NoMatch,
        }
        buf.clear();
    }
}

/// 2bit index files: both signature bytes present somewhere in the
/// first 16 bytes, either endianness.
pub(crate) fn is_twobit(path: &Path) -> ProbeResult {
    let Ok(data) = io::read_prefix(path, 16) else {
        return ProbeResult::NoMatch;
    };
    ProbeResult::from_bool(data.contains(&0x43) && data.contains(&0x27))
}
