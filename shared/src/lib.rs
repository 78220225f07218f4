// platform-independent half of the studio site: catalog, saved-date records and the store that keeps them
pub mod catalog;
pub mod config;
pub mod format;
pub mod record;
pub mod storage;
pub mod store;

pub use catalog::{find_product, products, Product};
pub use config::{StudioConfig, STORAGE_KEY};
pub use record::{DateForm, FormField, SaveStatus, SavedDateRecord, ValidationError};
pub use storage::{MemoryStorage, StorageError, StoragePort};
pub use store::RecordStore;
