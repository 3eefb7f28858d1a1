use crate::errors::AppError;
use crate::storage::{read_json, write_json, KeyValueStore, SETTINGS_KEY};
use serde::{Deserialize, Serialize};

pub const CURRENCY_CHOICES: [(&str, &str); 5] = [
    ("INR", "Indian Rupee (₹)"),
    ("USD", "US Dollar ($)"),
    ("EUR", "Euro (€)"),
    ("GBP", "British Pound (£)"),
    ("JPY", "Japanese Yen (¥)"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::for_currency("INR")
    }
}

impl AppSettings {
    pub fn for_currency(code: &str) -> Self {
        Self {
            currency_code: code.to_string(),
            currency_symbol: currency_symbol_for(code).to_string(),
        }
    }
}

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => "₹",
    }
}

pub fn load_settings(store: &impl KeyValueStore) -> AppSettings {
    read_json(store, SETTINGS_KEY).unwrap_or_default()
}

pub fn save_settings(store: &impl KeyValueStore, settings: &AppSettings) -> Result<(), AppError> {
    write_json(store, SETTINGS_KEY, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn defaults_to_rupee() {
        let settings = load_settings(&MemoryStorage::default());
        assert_eq!(settings.currency_code, "INR");
        assert_eq!(settings.currency_symbol, "₹");
    }

    #[test]
    fn malformed_settings_fall_back() {
        let store = MemoryStorage::with(SETTINGS_KEY, r#"{"currency":"USD"}"#);
        assert_eq!(load_settings(&store), AppSettings::default());
    }

    #[test]
    fn saved_settings_round_trip_through_storage() {
        let store = MemoryStorage::default();
        save_settings(&store, &AppSettings::for_currency("EUR")).unwrap();

        let loaded = load_settings(&store);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn unknown_code_gets_default_symbol() {
        assert_eq!(currency_symbol_for("XYZ"), "₹");
    }
}
