use anyhow::{anyhow, Context};
use send_wrapper::SendWrapper;
use shared::{StorageError, StoragePort};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

/// `window.localStorage` under a single key.
///
/// The handle is looked up once. If the browser refuses it (private mode,
/// disabled storage) reads and writes report `StorageError::Unavailable`.
pub struct BrowserStorage {
    key: String,
    // web_sys handles are !Send; the app only ever runs on the main wasm thread
    storage: Result<SendWrapper<Storage>, String>,
}

impl BrowserStorage {
    pub fn open(key: &str) -> Self {
        let storage = local_storage().map(SendWrapper::new).map_err(|e| {
            log::warn!("local storage unavailable: {:#}", e);
            format!("{:#}", e)
        });
        Self {
            key: key.to_string(),
            storage,
        }
    }

    fn handle(&self) -> Result<&Storage, StorageError> {
        match &self.storage {
            Ok(storage) => Ok(&**storage),
            Err(e) => Err(StorageError::Unavailable(e.clone())),
        }
    }
}

impl StoragePort for BrowserStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        self.handle()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{:#}", js_error(e))))
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        self.handle()?
            .set_item(&self.key, payload)
            .map_err(|e| StorageError::Write(format!("{:#}", js_error(e))))
    }
}

fn local_storage() -> anyhow::Result<Storage> {
    let window = web_sys::window().context("no browser window")?;
    window
        .local_storage()
        .map_err(js_error)
        .context("local storage access was denied")?
        .context("local storage is disabled")
}

fn js_error(value: JsValue) -> anyhow::Error {
    match value.dyn_into::<js_sys::Error>() {
        Ok(error) => anyhow!(String::from(error.message())),
        Err(value) => anyhow!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::format::storage_warning;
    use shared::{FormField, RecordStore};

    fn unavailable() -> BrowserStorage {
        BrowserStorage {
            key: shared::STORAGE_KEY.to_string(),
            storage: Err("local storage is disabled".to_string()),
        }
    }

    #[test]
    fn unavailable_storage_loads_empty_and_reports_writes() {
        let mut store = RecordStore::load(unavailable());
        assert!(store.records().is_empty());

        store.update_field(FormField::Label, "Welcome party");
        store.update_field(FormField::Date, "2025-06-01");
        store.create().unwrap();

        assert_eq!(store.records().len(), 1);
        let warning = store.write_error().map(storage_warning);
        assert_eq!(
            warning.as_deref(),
            Some("Couldn't save to this browser: local storage is unavailable: local storage is disabled")
        );
    }
}
