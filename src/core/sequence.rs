//! Strand-aware slicing of nucleotide sequences.
//!
//! Coordinates are 1-based and inclusive, as reported in hit tables.
//! Input is expected to be uppercase; the FASTA loader normalizes case.

use thiserror::Error;

use crate::core::hit::Span;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Unknown nucleotide symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Position {position} is outside sequence of length {len}")]
    OutOfRange { position: u64, len: usize },

    #[error("Span {span} does not match the requested strand")]
    InvertedSpan { span: Span },
}

/// Complement of a single IUPAC nucleotide code, or `None` if unknown
#[must_use]
pub fn complement(base: u8) -> Option<u8> {
    let c = match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'R' => b'Y',
        b'Y' => b'R',
        b'S' => b'S',
        b'W' => b'W',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'N' => b'N',
        b'-' => b'-',
        _ => return None,
    };
    Some(c)
}

/// Reverse complement of an uppercase IUPAC sequence.
///
/// # Errors
///
/// Returns `SequenceError::UnknownSymbol` for a byte outside the
/// complement table. The reported position is 0-based in `seq`.
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>, SequenceError> {
    let mut out = Vec::with_capacity(seq.len());
    for (position, &symbol) in seq.iter().enumerate().rev() {
        let c = complement(symbol).ok_or(SequenceError::UnknownSymbol {
            symbol: char::from(symbol),
            position,
        })?;
        out.push(c);
    }
    Ok(out)
}

/// Extract `span` from `seq`.
///
/// Forward hits return positions `start..=end`. Reverse hits return the
/// reverse complement of `end..=start`.
///
/// # Errors
///
/// Returns `SequenceError::OutOfRange` if either coordinate falls outside
/// `[1, seq.len()]`, `SequenceError::InvertedSpan` if `is_reverse` disagrees
/// with the coordinate order, or `SequenceError::UnknownSymbol` when
/// complementing a reverse hit hits a non-IUPAC byte.
pub fn slice(seq: &[u8], span: Span, is_reverse: bool) -> Result<Vec<u8>, SequenceError> {
    let len = seq.len();
    for position in [span.start, span.end] {
        if position == 0 || position > len as u64 {
            return Err(SequenceError::OutOfRange { position, len });
        }
    }

    if span.start != span.end && span.is_reverse() != is_reverse {
        return Err(SequenceError::InvertedSpan { span });
    }

    let (lo, hi) = span.bounds();
    #[allow(clippy::cast_possible_truncation)] // bounded by seq.len() above
    let region = &seq[(lo - 1) as usize..hi as usize];

    if is_reverse {
        reverse_complement(region)
    } else {
        Ok(region.to_vec())
    }
}
