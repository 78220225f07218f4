use crate::catalog::{find_product, Product};
use crate::record::{DateForm, FormField, SaveStatus, SavedDateRecord, ValidationError};
use crate::storage::{decode_records, encode_records, StorageError, StoragePort};
use chrono::Utc;
use uuid::Uuid;

/// Saved dates plus the form used to add new ones.
///
/// The in-memory list is authoritative. Every create and delete writes the
/// whole list back through the port; a failed write is kept in
/// [`RecordStore::write_error`] until the next successful one.
#[derive(Debug)]
pub struct RecordStore<S> {
    storage: S,
    records: Vec<SavedDateRecord>,
    form: DateForm,
    status: SaveStatus,
    write_error: Option<StorageError>,
}

impl<S: StoragePort> RecordStore<S> {
    /// Reads the saved list once. Anything unreadable becomes an empty list.
    pub fn load(storage: S) -> Self {
        let records = match storage.read() {
            Ok(Some(payload)) => decode_records(&payload).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("starting with no saved dates: {}", e);
                Vec::new()
            }
        };
        log::debug!("loaded {} saved dates", records.len());
        Self {
            storage,
            records,
            form: DateForm::default(),
            status: SaveStatus::Idle,
            write_error: None,
        }
    }

    /// Newest first.
    pub fn records(&self) -> &[SavedDateRecord] {
        &self.records
    }

    pub fn form(&self) -> &DateForm {
        &self.form
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn write_error(&self) -> Option<&StorageError> {
        self.write_error.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        log::trace!("form field {} changed", field);
        self.form.set_field(field, value.into());
        self.status = SaveStatus::Idle;
    }

    pub fn select_product(&mut self, product_id: Option<String>) {
        self.form.product_id = product_id;
        self.status = SaveStatus::Idle;
    }

    pub fn reset_form(&mut self) {
        self.form = DateForm::default();
        self.status = SaveStatus::Idle;
    }

    /// Turns the form into a record at the front of the list.
    /// On a validation error the form and the list are left as they were.
    pub fn create(&mut self) -> Result<&SavedDateRecord, ValidationError> {
        self.create_at(Utc::now().timestamp_millis())
    }

    pub fn create_at(&mut self, created_at: i64) -> Result<&SavedDateRecord, ValidationError> {
        if let Err(e) = self.form.validate() {
            log::debug!("rejected save: {}", e);
            self.status = SaveStatus::Error;
            return Err(e);
        }
        let id = self.fresh_id();
        let form = std::mem::take(&mut self.form);
        self.records.insert(0, form.into_record(id, created_at));
        self.status = SaveStatus::Saved;
        log::debug!("saved date {}", self.records[0].id);
        self.flush();
        Ok(&self.records[0])
    }

    /// Returns whether a record was removed. The list is written either way.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        if removed {
            log::debug!("removed saved date {}", id);
        }
        self.flush();
        removed
    }

    pub fn selected_product<'a>(&self, catalog: &'a [Product]) -> Option<&'a Product> {
        self.form
            .product_id
            .as_deref()
            .and_then(|id| find_product(catalog, id))
    }

    fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    // loaded data may carry arbitrary ids, so uniqueness is checked rather than assumed
    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn flush(&mut self) {
        let result = encode_records(&self.records).and_then(|payload| self.storage.write(&payload));
        match result {
            Ok(()) => self.write_error = None,
            Err(e) => {
                log::warn!("saved dates kept in memory only: {}", e);
                self.write_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::products;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn fill(store: &mut RecordStore<MemoryStorage>, label: &str, date: &str) {
        store.update_field(FormField::Label, label);
        store.update_field(FormField::Date, date);
    }

    #[test]
    fn create_delete_scenario() {
        let mut store = RecordStore::load(MemoryStorage::new());
        assert!(store.records().is_empty());

        fill(&mut store, "Alex & Jordan Party", "2025-06-01");
        let first_id = store.create().unwrap().id.clone();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.status(), SaveStatus::Saved);

        fill(&mut store, "", "2025-07-01");
        assert_eq!(store.create().unwrap_err(), ValidationError::MissingLabel);
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.status(), SaveStatus::Error);

        assert!(store.delete(&first_id));
        assert!(store.records().is_empty());
        assert_eq!(store.storage().payload(), Some("[]"));
    }

    #[test]
    fn malformed_storage_starts_empty_without_writing() {
        let store = RecordStore::load(MemoryStorage::with_payload("[{oops"));
        assert!(store.records().is_empty());
        assert_eq!(store.status(), SaveStatus::Idle);
        assert_eq!(store.storage().writes(), 0);
        assert_eq!(store.storage().payload(), Some("[{oops"));
    }

    #[test]
    fn loads_existing_records_in_stored_order() {
        let payload = r#"[
            {"id":"b","label":"Afterglow","eventType":"","date":"2025-06-02","location":"","productId":null,"note":"","createdAt":2},
            {"id":"a","label":"","eventType":"","date":"","location":"","productId":"gone","note":"","createdAt":1}
        ]"#;
        let store = RecordStore::load(MemoryStorage::with_payload(payload));
        let ids = store.records().iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.records()[1].product_id.as_deref(), Some("gone"));
    }

    #[test]
    fn failed_create_keeps_form_contents() {
        let mut store = RecordStore::load(MemoryStorage::new());
        store.update_field(FormField::Label, "Welcome party");
        store.update_field(FormField::Location, "Maui, Hawaii");
        store.select_product(Some("suite-lumen".to_string()));
        let before = store.form().clone();

        assert_eq!(store.create().unwrap_err(), ValidationError::MissingDate);
        assert_eq!(store.form(), &before);
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn successful_create_resets_form_and_prepends() {
        let mut store = RecordStore::load(MemoryStorage::new());
        fill(&mut store, "First", "2025-01-01");
        store.create_at(10).unwrap();
        fill(&mut store, "Second", "2025-02-01");
        store.update_field(FormField::Note, "monogram");
        let record = store.create_at(20).unwrap().clone();

        assert_eq!(record.label, "Second");
        assert_eq!(record.note, "monogram");
        assert_eq!(record.created_at, 20);
        assert_eq!(store.form(), &DateForm::default());
        assert_eq!(store.records()[0], record);
        assert_eq!(store.records()[1].label, "First");
        assert_ne!(store.records()[0].id, store.records()[1].id);
    }

    #[test]
    fn edits_return_status_to_idle() {
        let mut store = RecordStore::load(MemoryStorage::new());
        store.create().unwrap_err();
        assert_eq!(store.status(), SaveStatus::Error);
        store.update_field(FormField::EventType, "Brunch");
        assert_eq!(store.status(), SaveStatus::Idle);

        fill(&mut store, "Brunch", "2025-03-03");
        store.create().unwrap();
        assert_eq!(store.status(), SaveStatus::Saved);
        store.select_product(None);
        assert_eq!(store.status(), SaveStatus::Idle);

        store.create().unwrap_err();
        store.reset_form();
        assert_eq!(store.status(), SaveStatus::Idle);
    }

    #[test]
    fn delete_leaves_status_alone() {
        let mut store = RecordStore::load(MemoryStorage::new());
        fill(&mut store, "Brunch", "2025-03-03");
        let id = store.create().unwrap().id.clone();
        store.delete(&id);
        assert_eq!(store.status(), SaveStatus::Saved);
    }

    #[test]
    fn deleting_unknown_id_still_writes() {
        let mut store = RecordStore::load(MemoryStorage::new());
        fill(&mut store, "Brunch", "2025-03-03");
        store.create().unwrap();
        let writes = store.storage().writes();

        assert!(!store.delete("missing"));
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.storage().writes(), writes + 1);
    }

    #[test]
    fn selected_product_is_a_weak_reference() {
        let mut store = RecordStore::load(MemoryStorage::new());
        assert!(store.selected_product(products()).is_none());

        store.select_product(Some("suite-lumen".to_string()));
        assert_eq!(
            store.selected_product(products()).map(|p| p.name.as_str()),
            Some("Lumen Cascade")
        );
        fill(&mut store, "Sunset welcome", "2025-06-01");
        let record = store.create().unwrap();
        assert_eq!(record.product_id.as_deref(), Some("suite-lumen"));

        store.select_product(Some("suite-retired".to_string()));
        assert!(store.selected_product(products()).is_none());
        fill(&mut store, "Afterglow", "2025-06-02");
        let record = store.create().unwrap();
        assert_eq!(record.product_id.as_deref(), Some("suite-retired"));
    }

    #[test]
    fn write_failure_keeps_memory_and_clears_on_recovery() {
        let mut store = RecordStore::load(MemoryStorage::rejecting_writes());
        fill(&mut store, "Rehearsal", "2025-05-30");
        store.create().unwrap();

        assert_eq!(store.records().len(), 1);
        assert_eq!(store.status(), SaveStatus::Saved);
        assert!(matches!(store.write_error(), Some(StorageError::Write(_))));
        assert_eq!(store.storage().payload(), None);

        store.storage.set_reject_writes(false);
        store.delete("missing");
        assert!(store.write_error().is_none());
        assert_eq!(
            crate::storage::decode_records(store.storage().payload().unwrap()),
            Some(store.records().to_vec())
        );
    }

    #[test]
    fn unreadable_storage_starts_empty() {
        struct Broken;
        impl StoragePort for Broken {
            fn read(&self) -> Result<Option<String>, StorageError> {
                Err(StorageError::Unavailable("private mode".to_string()))
            }
            fn write(&mut self, _payload: &str) -> Result<(), StorageError> {
                Err(StorageError::Unavailable("private mode".to_string()))
            }
        }

        let mut store = RecordStore::load(Broken);
        assert!(store.records().is_empty());
        store.update_field(FormField::Label, "Brunch");
        store.update_field(FormField::Date, "2025-03-03");
        store.create().unwrap();
        assert!(matches!(
            store.write_error(),
            Some(StorageError::Unavailable(_))
        ));
    }
}
