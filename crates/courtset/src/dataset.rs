//! The working set: insertion-ordered records, deduplicated by case key.

use std::collections::HashSet;

use tracing::debug;

use crate::record::DatasetRecord;

/// An accumulating collection of dataset records.
///
/// Insertion order is preserved; a record whose normalized case key is
/// already present is rejected (first occurrence wins). Loading a
/// previously exported file into a `Dataset` before inserting fresh
/// extractions is how dedup-against-prior-exports works.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<DatasetRecord>,
    keys: HashSet<String>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from records, keeping the first of each case key.
    pub fn from_records(records: Vec<DatasetRecord>) -> Self {
        let mut dataset = Self::new();
        for record in records {
            dataset.insert(record);
        }
        dataset
    }

    /// Insert a record unless its case key is already present.
    ///
    /// Returns `true` when the record was added.
    pub fn insert(&mut self, record: DatasetRecord) -> bool {
        let key = record.dedup_key();
        if self.keys.contains(&key) {
            debug!(case = %record.case_number, "duplicate case key, skipping");
            return false;
        }
        self.keys.insert(key);
        self.records.push(record);
        true
    }

    /// Whether a record with this case key is already present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Fold another dataset into this one. Returns how many records were
    /// actually added.
    pub fn merge(&mut self, other: Dataset) -> usize {
        let mut added = 0;
        for record in other.records {
            if self.insert(record) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in insertion order.
    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    /// Consume the dataset, yielding its records in insertion order.
    pub fn into_records(self) -> Vec<DatasetRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(case: &str, date: &str) -> DatasetRecord {
        DatasetRecord {
            case_number: case.to_string(),
            decision_date: date.to_string(),
            text: "т".repeat(120),
            source_file: None,
        }
    }

    #[test]
    fn insert_rejects_duplicate_case_keys() {
        let mut dataset = Dataset::new();
        assert!(dataset.insert(record("А40-1", "2023-01-10")));
        assert!(!dataset.insert(record("а40-1", "2023-02-20")));
        assert_eq!(dataset.len(), 1);
        // First occurrence wins.
        assert_eq!(dataset.records()[0].decision_date, "2023-01-10");
    }

    #[test]
    fn merge_counts_only_new_records() {
        let mut left = Dataset::from_records(vec![
            record("А40-1", "2023-01-10"),
            record("А40-2", "2023-01-11"),
        ]);
        let right = Dataset::from_records(vec![
            record("А40-2", "2023-05-01"),
            record("А40-3", "2023-05-02"),
        ]);
        assert_eq!(left.merge(right), 1);
        assert_eq!(left.len(), 3);
    }

    #[test]
    fn from_records_deduplicates() {
        let dataset = Dataset::from_records(vec![
            record("А40-1", "2023-01-10"),
            record("А40-1", "2023-01-10"),
        ]);
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn preserves_insertion_order() {
        let dataset = Dataset::from_records(vec![
            record("Б", "2023-01-01"),
            record("А", "2023-01-02"),
        ]);
        let cases: Vec<&str> = dataset
            .records()
            .iter()
            .map(|r| r.case_number.as_str())
            .collect();
        assert_eq!(cases, vec!["Б", "А"]);
    }

    #[test]
    fn contains_key_uses_normalized_form() {
        let mut dataset = Dataset::new();
        dataset.insert(record(" а40-7 ", "2023-01-10"));
        assert!(dataset.contains_key("А40-7"));
        assert!(!dataset.contains_key("А40-8"));
    }
}
