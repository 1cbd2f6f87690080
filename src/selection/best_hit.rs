use std::collections::{BTreeMap, HashMap};

use crate::core::hit::{HitRecord, ReducedHit};

/// A locus winner as handed to the export stage
#[derive(Debug, Clone, PartialEq)]
pub struct LocusHit {
    pub locus: String,
    pub hit: ReducedHit,
}

/// Surviving hits grouped by the reference file they were searched against.
///
/// Reference keys iterate in sorted order. Within a group, loci keep the
/// order in which they were first seen in the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceGroups {
    groups: BTreeMap<String, Vec<LocusHit>>,
}

impl ReferenceGroups {
    /// Hits to slice from `reference`
    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&[LocusHit]> {
        self.groups.get(reference).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LocusHit])> {
        self.groups
            .iter()
            .map(|(reference, hits)| (reference.as_str(), hits.as_slice()))
    }

    /// Number of reference files
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of loci across all references
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Flatten back into hit records, e.g. to reduce a reduction's output again
    #[must_use]
    pub fn into_hits(self) -> Vec<HitRecord> {
        self.groups
            .into_iter()
            .flat_map(|(reference, hits)| {
                hits.into_iter()
                    .map(move |LocusHit { locus, hit }| hit.into_record(locus, reference.clone()))
            })
            .collect()
    }
}

/// Keep one hit per locus and group the winners by reference file.
///
/// A challenger replaces the current winner when its e-value is lower, or
/// when e-values are exactly equal and its score is higher. Full ties keep
/// the earlier hit.
#[must_use]
pub fn reduce(hits: Vec<HitRecord>) -> ReferenceGroups {
    let mut winners: Vec<(String, String, ReducedHit)> = Vec::new();
    let mut by_locus: HashMap<String, usize> = HashMap::new();

    for record in hits {
        match by_locus.get(&record.locus) {
            Some(&idx) => {
                if record.beats(&winners[idx].2) {
                    winners[idx] = record.into_parts();
                }
            }
            None => {
                by_locus.insert(record.locus.clone(), winners.len());
                winners.push(record.into_parts());
            }
        }
    }

    let mut groups: BTreeMap<String, Vec<LocusHit>> = BTreeMap::new();
    for (locus, reference, hit) in winners {
        groups.entry(reference).or_default().push(LocusHit { locus, hit });
    }

    ReferenceGroups { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hit::Span;

    fn hit(locus: &str, id: &str, e_value: f64, score: f64, reference: &str) -> HitRecord {
        HitRecord::new(locus, id, Span::new(100, 250), e_value, score, reference)
    }

    fn winner_ids(groups: &ReferenceGroups) -> Vec<(String, String)> {
        groups
            .iter()
            .flat_map(|(_, hits)| hits.iter().map(|h| (h.locus.clone(), h.hit.id.clone())))
            .collect()
    }

    #[test]
    fn test_lower_evalue_wins() {
        let groups = reduce(vec![
            hit("L1", "q1", 1e-10, 50.0, "genome.fna"),
            hit("L1", "q2", 1e-5, 80.0, "genome.fna"),
        ]);
        assert_eq!(groups.len(), 1);
        let hits = groups.get("genome.fna").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].locus, "L1");
        assert_eq!(hits[0].hit.id, "q1");
    }

    #[test]
    fn test_later_lower_evalue_replaces() {
        let groups = reduce(vec![
            hit("L1", "q1", 1e-5, 80.0, "g.fna"),
            hit("L1", "q2", 1e-10, 50.0, "g.fna"),
        ]);
        assert_eq!(groups.get("g.fna").unwrap()[0].hit.id, "q2");
    }

    #[test]
    fn test_equal_evalue_higher_score_wins() {
        let groups = reduce(vec![
            hit("L1", "q1", 1e-10, 50.0, "g.fna"),
            hit("L1", "q2", 1e-10, 50.5, "g.fna"),
            hit("L1", "q3", 1e-10, 49.0, "g.fna"),
        ]);
        assert_eq!(groups.get("g.fna").unwrap()[0].hit.id, "q2");
    }

    #[test]
    fn test_full_tie_keeps_first() {
        let groups = reduce(vec![
            hit("L1", "q1", 1e-10, 50.0, "g.fna"),
            hit("L1", "q2", 1e-10, 50.0, "g.fna"),
        ]);
        assert_eq!(groups.get("g.fna").unwrap()[0].hit.id, "q1");
    }

    #[test]
    fn test_winner_may_move_reference() {
        let groups = reduce(vec![
            hit("L1", "q1", 1e-5, 50.0, "a.fna"),
            hit("L1", "q2", 1e-9, 50.0, "b.fna"),
        ]);
        assert!(groups.get("a.fna").is_none());
        assert_eq!(groups.get("b.fna").unwrap()[0].hit.id, "q2");
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let groups = reduce(vec![
            hit("L3", "s3", 1e-5, 1.0, "b.fna"),
            hit("L1", "s1", 1e-5, 1.0, "a.fna"),
            hit("L2", "s2", 1e-5, 1.0, "b.fna"),
            hit("L4", "s4", 1e-5, 1.0, "a.fna"),
        ]);

        let refs: Vec<&str> = groups.iter().map(|(r, _)| r).collect();
        assert_eq!(refs, vec!["a.fna", "b.fna"]);
        assert_eq!(groups.hit_count(), 4);

        let loci: Vec<&str> = groups
            .get("b.fna")
            .unwrap()
            .iter()
            .map(|h| h.locus.as_str())
            .collect();
        assert_eq!(loci, vec!["L3", "L2"]);
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let hits = vec![
            hit("L1", "q1", 1e-10, 50.0, "g.fna"),
            hit("L2", "q2", 1e-3, 10.0, "h.fna"),
            hit("L1", "q3", 1e-10, 70.0, "g.fna"),
            hit("L2", "q4", 1e-3, 10.0, "g.fna"),
            hit("L3", "q5", 0.0, 5.0, "h.fna"),
        ];

        let once = reduce(hits);
        let twice = reduce(once.clone().into_hits());
        assert_eq!(winner_ids(&once), winner_ids(&twice));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        let groups = reduce(Vec::new());
        assert!(groups.is_empty());
        assert_eq!(groups.hit_count(), 0);
        assert!(groups.into_hits().is_empty());
    }
}
