use crate::browser_storage::BrowserStorage;
use leptos::prelude::{RwSignal, With};
use shared::format::storage_warning;
use shared::{Product, RecordStore, StudioConfig};

pub type BrowserRecordStore = RecordStore<BrowserStorage>;

// provided once by App; every DateSaver control goes through `store`
#[derive(Clone, Copy)]
pub struct StudioContext {
    pub store: RwSignal<BrowserRecordStore>,
    pub catalog: &'static [Product],
}

impl StudioContext {
    pub fn new(config: &StudioConfig, catalog: &'static [Product]) -> Self {
        let store = RecordStore::load(BrowserStorage::open(config.storage_key));
        Self {
            store: RwSignal::new(store),
            catalog,
        }
    }

    /// Message for the banner when the last write to local storage failed.
    pub fn storage_warning(&self) -> Option<String> {
        self.store.with(|store| store.write_error().map(storage_warning))
    }
}
