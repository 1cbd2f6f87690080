//! Loader for reference FASTA files using noodles.
//!
//! Reads every record of a scaffold/genome file into a [`SequenceStore`].
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna`, `.fas` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::core::store::SequenceStore;
use crate::parsing::tblout::ParseError;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if [".fa", ".fasta", ".fna", ".fas"].iter().any(|ext| {
        path_str.ends_with(&format!("{ext}.gz")) || path_str.ends_with(&format!("{ext}.bgz"))
    }) {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna" | "fas")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Load every record of a FASTA file, sequences uppercased.
///
/// When a record name occurs more than once, the first record is kept.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, `ParseError::Noodles`
/// if a record cannot be parsed, or `ParseError::InvalidFormat` if the file
/// holds no records.
pub fn load_sequence_store(path: &Path) -> Result<SequenceStore, ParseError> {
    let file = std::fs::File::open(path)?;
    let store = if is_gzipped(path) {
        let reader = BufReader::new(MultiGzDecoder::new(file));
        read_sequence_store(&mut fasta::io::Reader::new(reader))?
    } else {
        let reader = BufReader::new(file);
        read_sequence_store(&mut fasta::io::Reader::new(reader))?
    };

    debug!(
        "Loaded {} sequences ({} bp) from {}",
        store.len(),
        store.total_length(),
        path.display()
    );
    Ok(store)
}

/// Fill a store from a noodles FASTA reader
fn read_sequence_store<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<SequenceStore, ParseError> {
    let mut store = SequenceStore::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence: Vec<u8> = record
            .sequence()
            .as_ref()
            .iter()
            .map(u8::to_ascii_uppercase)
            .collect();

        if !store.insert(name.clone(), sequence) {
            warn!("Duplicate FASTA record '{name}', keeping the first occurrence");
        }
    }

    if store.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("genome.fna")));
        assert!(is_fasta_file(Path::new("exons.fas")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Reference.FA")));

        assert!(!is_fasta_file(Path::new("hits.tbl")));
        assert!(!is_fasta_file(Path::new("test.fai")));
        assert!(!is_fasta_file(Path::new("notes.txt.gz")));
    }

    #[test]
    fn test_load_sequence_store() {
        let fasta_content = b">scaf1 assembled scaffold\nACGTacgt\nAC\n>scaf2\nggnn\n";

        let mut temp = NamedTempFile::with_suffix(".fna").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let store = load_sequence_store(temp.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("scaf1"), Some(&b"ACGTACGTAC"[..]));
        assert_eq!(store.get("scaf2"), Some(&b"GGNN"[..]));
        assert_eq!(store.get("scaf1 assembled scaffold"), None);
    }

    #[test]
    fn test_load_gzipped_store() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chrA\nAAAACCCC\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let store = load_sequence_store(temp.path()).unwrap();
        assert_eq!(store.get("chrA"), Some(&b"AAAACCCC"[..]));
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">dup\nAAAA\n>dup\nCCCC\n").unwrap();
        temp.flush().unwrap();

        let store = load_sequence_store(temp.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("dup"), Some(&b"AAAA"[..]));
    }

    #[test]
    fn test_load_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        let result = load_sequence_store(temp.path());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_sequence_store(Path::new("/nonexistent/genome.fna"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
