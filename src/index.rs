use crate::record::Record;
use std::collections::BTreeMap;

/// Mapping from lowercased hostname to its record.
///
/// Every key equals the lowercased `hostname` of its record. The map is
/// built once per invocation and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Index {
    entries: BTreeMap<String, Record>,
}

impl Index {
    /// Case-insensitive lookup of a single record.
    pub fn lookup(&self, hostname: &str) -> Option<&Record> {
        self.entries.get(&hostname.to_lowercase())
    }

    /// Original-case hostnames, ascending by their lowercased key.
    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.entries.values().filter_map(Record::hostname)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Record> for Index {
    /// Records without a usable hostname are skipped; of two records with
    /// the same lowercased hostname the later one wins.
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Record>,
    {
        let mut entries = BTreeMap::new();
        for record in iter {
            let Some(key) = record.hostname().map(str::to_lowercase) else {
                continue;
            };
            entries.insert(key, record);
        }
        Index { entries }
    }
}
