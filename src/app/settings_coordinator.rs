//! Generic settings persistence coordination.
//!
//! Window preferences are stored in eframe's persistent storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates loading and saving of serializable preferences.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface, absent when persistence is unavailable
    /// * `key` - The storage key for this setting
    /// * `default` - Value used when the key is missing or holds invalid JSON
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        storage
            .and_then(|storage| storage.get_string(key))
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or(default)
    }

    /// Saves a setting to persistent storage and flushes it.
    ///
    /// Values that fail to serialize are skipped.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json) = serde_json::to_string(value) {
            storage.set_string(key, json);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use eframe::Storage;

    /// Simple mock storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
        flushes: usize,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_save_and_load() {
        let mut storage = MockStorage::default();
        SettingsCoordinator::save_setting(&mut storage, "size", &[1200.0f32, 800.0]);

        let loaded: [f32; 2] = SettingsCoordinator::load_setting_or(Some(&storage), "size", [0.0, 0.0]);
        assert_eq!(loaded, [1200.0, 800.0]);
        assert_eq!(storage.flushes, 1);
    }

    #[test]
    fn test_missing_or_invalid_falls_back() {
        let mut storage = MockStorage::default();
        storage.set_string("broken", "{not json".to_string());

        assert_eq!(SettingsCoordinator::load_setting_or(Some(&storage), "missing", 7), 7);
        assert_eq!(SettingsCoordinator::load_setting_or(Some(&storage), "broken", 7), 7);
        assert_eq!(SettingsCoordinator::load_setting_or(None, "missing", 7), 7);
    }
}
