use crate::record::SavedDateRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read saved dates: {0}")]
    Read(String),

    #[error("failed to write saved dates: {0}")]
    Write(String),

    #[error("failed to encode saved dates: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Get/set access to one serialized blob. The key is owned by the implementation.
pub trait StoragePort {
    /// `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, StorageError>;
    /// Replaces the whole blob.
    fn write(&mut self, payload: &str) -> Result<(), StorageError>;
}

pub fn encode_records(records: &[SavedDateRecord]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(records)?)
}

/// `None` when the payload is not an array of records.
pub fn decode_records(payload: &str) -> Option<Vec<SavedDateRecord>> {
    match serde_json::from_str::<Vec<SavedDateRecord>>(payload) {
        Ok(records) => Some(records),
        Err(e) => {
            log::warn!("discarding unreadable saved dates: {}", e);
            None
        }
    }
}

/// In-memory port, used in tests and wherever no browser is around.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    payload: Option<String>,
    reject_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            ..Self::default()
        }
    }

    /// Every write fails as if the quota were exhausted.
    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.payload = Some(payload.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DateForm;
    use pretty_assertions::assert_eq;

    fn sample(id: &str) -> SavedDateRecord {
        DateForm {
            label: format!("Party {id}"),
            date: "2025-06-01".to_string(),
            ..Default::default()
        }
        .into_record(id.to_string(), 42)
    }

    #[test]
    fn decode_rejects_malformed_payloads() {
        assert_eq!(decode_records("{not json"), None);
        assert_eq!(decode_records("{\"id\":\"a\"}"), None);
        assert_eq!(decode_records("[{\"label\":\"no id\"}]"), None);
        assert_eq!(decode_records("null"), None);
    }

    #[test]
    fn decode_fills_missing_optional_fields() {
        let records =
            decode_records(r#"[{"id":"a","label":"Brunch","date":"2025-01-02","createdAt":7}]"#)
                .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_id, None);
        assert_eq!(records[0].note, "");
    }

    #[test]
    fn decode_keeps_list_with_fractional_created_at() {
        let records = decode_records(
            r#"[{"id":"b","label":"Brunch","date":"2025-01-02","createdAt":1717200000000.0},
                {"id":"a","label":"Dinner","date":"2025-01-01","createdAt":1717100000000}]"#,
        )
        .unwrap();
        let stamps = records.iter().map(|r| r.created_at).collect::<Vec<_>>();
        assert_eq!(stamps, vec![1_717_200_000_000, 1_717_100_000_000]);
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert_eq!(decode_records("[]"), Some(vec![]));
    }

    #[test]
    fn encode_then_decode_keeps_order() {
        let records = vec![sample("b"), sample("a")];
        let payload = encode_records(&records).unwrap();
        assert_eq!(decode_records(&payload), Some(records));
    }

    #[test]
    fn memory_storage_counts_writes_and_can_reject() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read().unwrap(), None);
        storage.write("[]").unwrap();
        assert_eq!(storage.payload(), Some("[]"));
        assert_eq!(storage.writes(), 1);

        storage.set_reject_writes(true);
        assert!(matches!(storage.write("[1]"), Err(StorageError::Write(_))));
        assert_eq!(storage.payload(), Some("[]"));
        assert_eq!(storage.writes(), 1);
    }
}
