//! The id-keyed collection of records that survived a search.

use std::collections::HashMap;

use super::NormalizedRecord;

/// Records surviving normalization and filtering, in catalog order.
///
/// Ids are unique; a repeated id keeps its first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    records: Vec<NormalizedRecord>,
    by_id: HashMap<i64, usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Returns `false` (and drops it) if the id is already present.
    pub fn push(&mut self, record: NormalizedRecord) -> bool {
        if self.by_id.contains_key(&record.id) {
            return false;
        }
        self.by_id.insert(record.id, self.records.len());
        self.records.push(record);
        true
    }

    pub fn get(&self, id: i64) -> Option<&NormalizedRecord> {
        self.by_id.get(&id).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in catalog order.
    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn ids(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.id).collect()
    }
}

impl FromIterator<NormalizedRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = NormalizedRecord>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for record in iter {
            set.push(record);
        }
        set
    }
}
