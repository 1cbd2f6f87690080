use std::collections::HashMap;

/// Sequences of one reference file, keyed by record name.
///
/// Built once per reference and only read afterwards, so export workers
/// share it through a plain `&SequenceStore`.
#[derive(Debug, Clone, Default)]
pub struct SequenceStore {
    sequences: HashMap<String, Vec<u8>>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. Returns `false` and keeps the existing sequence if the
    /// name is already present.
    pub fn insert(&mut self, name: impl Into<String>, sequence: Vec<u8>) -> bool {
        match self.sequences.entry(name.into()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(sequence);
                true
            }
        }
    }

    /// Sequence whose record name is exactly `id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.sequences.get(id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Total number of bases held
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.sequences.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<u8>)> for SequenceStore {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u8>)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (name, sequence) in iter {
            store.insert(name, sequence);
        }
        store
    }
}
