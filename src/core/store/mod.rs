//! In-memory record stores, one per entity kind
//!
//! Every read hands back owned clones, never a reference into the backing
//! list, so callers can mutate what they get without touching the store.
//! Updates are partial: only the fields a patch supplies are written.
//!
//! No store checks that the ids a record references exist in another store.

pub mod patch;
pub mod queries;

pub use patch::Patch;

use crate::domain::Record;

/// Ordered collection of records of one kind
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Replaces the entire contents
    pub fn load_from(&mut self, records: Vec<T>) {
        tracing::debug!(kind = %T::KIND, count = records.len(), "Replacing store contents");
        self.records = records;
    }

    /// Appends a record; a record with a blank key is rejected
    pub fn insert(&mut self, record: T) -> bool {
        if record.key().trim().is_empty() {
            tracing::debug!(kind = %T::KIND, "Rejected record with blank key");
            return false;
        }
        self.records.push(record);
        true
    }

    /// First record with `key`
    pub fn get_by_key(&self, key: &str) -> Option<T> {
        self.records.iter().find(|r| r.key() == key).cloned()
    }

    pub fn get_all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Records matching `predicate`, in store order
    pub fn get_filtered<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    /// Applies the supplied fields of `patch` to the record with `key`
    ///
    /// Returns false, and changes nothing, when no record has that key.
    pub fn update<P: Patch<T>>(&mut self, key: &str, patch: P) -> bool {
        match self.records.iter_mut().find(|r| r.key() == key) {
            Some(record) => {
                patch.apply_to(record);
                true
            }
            None => false,
        }
    }

    /// Removes the first record with `key`
    pub fn delete(&mut self, key: &str) -> bool {
        match self.records.iter().position(|r| r.key() == key) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.iter().any(|r| r.key() == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrowing view for writers that serialize without cloning
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Patient, PatientUpdate};

    fn patient(id: &str, name: &str) -> Patient {
        Patient::new(id, name, format!("{id}@example.com"), "0100", "999")
    }

    fn store() -> RecordStore<Patient> {
        let mut store = RecordStore::new();
        store.load_from(vec![patient("P1", "Ann"), patient("P2", "Bo")]);
        store
    }

    #[test]
    fn test_load_from_replaces_contents() {
        let mut store = store();
        store.load_from(vec![patient("P9", "Zed")]);
        assert_eq!(store.len(), 1);
        assert!(store.contains("P9"));
        assert!(!store.contains("P1"));
    }

    #[test]
    fn test_get_all_is_a_copy() {
        let store = store();
        let mut copy = store.get_all();
        copy[0].name = "Changed".to_string();
        copy.clear();

        let again = store.get_all();
        assert_eq!(again.len(), 2);
        assert_eq!(again[0].name, "Ann");
    }

    #[test]
    fn test_get_by_key_is_a_copy() {
        let store = store();
        let mut p = store.get_by_key("P1").unwrap();
        p.name = "Changed".to_string();
        assert_eq!(store.get_by_key("P1").unwrap().name, "Ann");
        assert!(store.get_by_key("P404").is_none());
    }

    #[test]
    fn test_insert_rejects_blank_key() {
        let mut store = store();
        assert!(!store.insert(patient("  ", "Nobody")));
        assert!(store.insert(patient("P3", "Cy")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_only_supplied_fields() {
        let mut store = store();
        let updated = store.update(
            "P1",
            PatientUpdate {
                phone: Some("0777".to_string()),
                email: Some("   ".to_string()),
                ..Default::default()
            },
        );

        assert!(updated);
        let p = store.get_by_key("P1").unwrap();
        assert_eq!(p.phone, "0777");
        assert_eq!(p.email, "P1@example.com");
        assert_eq!(p.name, "Ann");
    }

    #[test]
    fn test_update_missing_key_changes_nothing() {
        let mut store = store();
        let before = store.get_all();
        assert!(!store.update(
            "P404",
            PatientUpdate {
                name: Some("Ghost".to_string()),
                ..Default::default()
            }
        ));
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn test_delete() {
        let mut store = store();
        assert!(store.delete("P1"));
        assert!(!store.delete("P1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_filtered_preserves_order() {
        let mut store = store();
        store.insert(patient("P3", "Ann"));
        let anns = store.get_filtered(|p| p.name == "Ann");
        let ids: Vec<&str> = anns.iter().map(|p| p.user_id()).collect();
        assert_eq!(ids, vec!["P1", "P3"]);
    }
}
