use serde::{Deserialize, Serialize};

/// 1-based coordinate pair exactly as it appears in a hit table.
///
/// `start` and `end` are not normalized: on the minus strand `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

impl Span {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of bases covered, both ends inclusive. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.start.abs_diff(self.end) + 1
    }

    /// True when the hit lies on the minus strand
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.end < self.start
    }

    /// Lower and upper coordinate, regardless of strand
    #[must_use]
    pub fn bounds(&self) -> (u64, u64) {
        (self.start.min(self.end), self.start.max(self.end))
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Strand of a hit, derived from the coordinate order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    #[must_use]
    pub fn from_reverse(is_reverse: bool) -> Self {
        if is_reverse {
            Self::Reverse
        } else {
            Self::Forward
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// One qualifying row of a hit table together with the reference it was searched against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    /// Grouping name (column 2); one winner survives per locus
    pub locus: String,

    /// Reference sequence record name (column 0); also names the output file
    pub id: String,

    /// Alignment coordinates (columns 6 and 7)
    pub span: Span,

    /// True when column 7 < column 6
    pub is_reverse: bool,

    /// Column 12, lower is better
    pub e_value: f64,

    /// Column 13, higher is better
    pub score: f64,

    /// Base filename from the `# Target file:` comment
    pub source_reference: String,
}

impl HitRecord {
    pub fn new(
        locus: impl Into<String>,
        id: impl Into<String>,
        span: Span,
        e_value: f64,
        score: f64,
        source_reference: impl Into<String>,
    ) -> Self {
        Self {
            locus: locus.into(),
            id: id.into(),
            is_reverse: span.is_reverse(),
            span,
            e_value,
            score,
            source_reference: source_reference.into(),
        }
    }

    /// Split into the grouping keys and the hit payload
    #[must_use]
    pub fn into_parts(self) -> (String, String, ReducedHit) {
        let reduced = ReducedHit {
            id: self.id,
            span: self.span,
            is_reverse: self.is_reverse,
            e_value: self.e_value,
            score: self.score,
        };
        (self.locus, self.source_reference, reduced)
    }

    /// True when `self` beats `other` under the best-hit rule:
    /// lower e-value, then higher score. Equal hits do not beat each other.
    #[must_use]
    #[allow(clippy::float_cmp)] // exact tie on e-value is the rule
    pub fn beats(&self, other: &ReducedHit) -> bool {
        self.e_value < other.e_value || (self.e_value == other.e_value && self.score > other.score)
    }
}

/// A per-locus winner, stripped of its grouping keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducedHit {
    pub id: String,
    pub span: Span,
    pub is_reverse: bool,
    pub e_value: f64,
    pub score: f64,
}

impl ReducedHit {
    #[must_use]
    pub fn strand(&self) -> Strand {
        Strand::from_reverse(self.is_reverse)
    }

    /// Re-attach grouping keys, e.g. to feed a reduction its own output
    #[must_use]
    pub fn into_record(self, locus: impl Into<String>, source_reference: impl Into<String>) -> HitRecord {
        HitRecord {
            locus: locus.into(),
            id: self.id,
            span: self.span,
            is_reverse: self.is_reverse,
            e_value: self.e_value,
            score: self.score,
            source_reference: source_reference.into(),
        }
    }
}
