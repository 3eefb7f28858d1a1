use crate::errors::AppError;
use crate::models::ExpenseRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const EXPENSES_KEY: &str = "expenses";
pub const SETTINGS_KEY: &str = "settings";

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = Self::storage().ok_or(AppError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| AppError::StorageWrite(format!("{:?}", err)))
    }
}

/// Reads a JSON value, falling back to `None` on anything but a clean parse.
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring malformed `{}` entry in storage: {}", key, err);
            None
        }
    }
}

pub fn write_json<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ExpenseStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn load(&self) -> Vec<ExpenseRecord> {
        read_json(&self.backend, EXPENSES_KEY).unwrap_or_default()
    }

    pub fn save(&self, records: &[ExpenseRecord]) -> Result<(), AppError> {
        write_json(&self.backend, EXPENSES_KEY, records)
    }

    pub fn append(&self, record: ExpenseRecord) -> Result<Vec<ExpenseRecord>, AppError> {
        let mut records = self.load();
        records.push(record);
        self.save(&records)?;
        log::info!("stored expense #{}", records.len());
        Ok(records)
    }
}

impl ExpenseStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStorage;
    use super::*;

    fn record(title: &str, amount: &str) -> ExpenseRecord {
        ExpenseRecord {
            date: "2024-01-01".to_string(),
            title: title.to_string(),
            category: "Food".to_string(),
            amount: amount.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn absent_key_loads_empty() {
        let store = ExpenseStore::new(MemoryStorage::default());
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_value_loads_empty() {
        let store = ExpenseStore::new(MemoryStorage::with(EXPENSES_KEY, "{not json"));
        assert!(store.load().is_empty());

        let store = ExpenseStore::new(MemoryStorage::with(EXPENSES_KEY, "null"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_overwrites_whole_list() {
        let backend = MemoryStorage::default();
        let store = ExpenseStore::new(backend.clone());
        store
            .save(&[record("Coffee", "150"), record("Tea", "40")])
            .unwrap();
        store.save(&[record("Lunch", "300")]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, vec![record("Lunch", "300")]);
        assert!(backend.get_item(EXPENSES_KEY).unwrap().contains("Lunch"));
    }

    #[test]
    fn append_keeps_order() {
        let store = ExpenseStore::new(MemoryStorage::default());
        store.append(record("First", "1")).unwrap();
        let all = store.append(record("Second", "2")).unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(store.load()[0].title, "First");
        assert_eq!(store.load()[1].title, "Second");
    }
}
