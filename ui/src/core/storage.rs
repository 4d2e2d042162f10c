//! Local persistence for the handful of settings the app keeps on device.
//!
//! Everything goes through [`Settings`], a typed wrapper over a
//! [`KeyValueStore`]:
//! - web: `window.localStorage`
//! - native: a JSON map in the platform data directory
//! - tests: [`MemoryStore`]
//!
//! Keys match what earlier builds of the web client wrote, so existing
//! browser profiles keep working.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::onboarding::UserType;

pub const ONBOARDING_COMPLETED_KEY: &str = "onboarding_completed";
pub const USER_TYPE_KEY: &str = "user_type";
pub const PROFILE_KEY: &str = "profile_edit";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings data: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// In-memory store used by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
        let storage = window
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|_| StorageError::Unavailable(format!("failed reading {key}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable(format!("failed writing {key}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|_| StorageError::Unavailable(format!("failed removing {key}")))
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.storage
            .clear()
            .map_err(|_| StorageError::Unavailable("failed clearing storage".into()))
    }
}

/// JSON map persisted to `<data dir>/settings.json`, rewritten on every change.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
    entries: BTreeMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn open() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("com", "Findmyhome", "Findmyhome")
            .ok_or_else(|| StorageError::Unavailable("no home directory".into()))?;
        Self::open_at(dirs.data_dir().join("settings.json"))
    }

    pub fn open_at(path: std::path::PathBuf) -> Result<Self, StorageError> {
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.flush()
    }
}

#[cfg(target_arch = "wasm32")]
pub type DeviceStore = LocalStore;
#[cfg(not(target_arch = "wasm32"))]
pub type DeviceStore = FileStore;

/// Profile fields edited on `/profile/edit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: "John Smith".into(),
            email: "john.smith@findmyhome.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "Seattle, WA".into(),
        }
    }
}

impl ProfileRecord {
    /// Blank fields take the default value.
    fn or_defaults(self) -> Self {
        let defaults = Self::default();
        let pick = |value: String, fallback: String| {
            if value.trim().is_empty() {
                fallback
            } else {
                value
            }
        };
        Self {
            name: pick(self.name, defaults.name),
            email: pick(self.email, defaults.email),
            phone: pick(self.phone, defaults.phone),
            location: pick(self.location, defaults.location),
        }
    }
}

/// Typed access to every persisted setting.
pub struct Settings<S: KeyValueStore> {
    store: S,
}

impl Settings<DeviceStore> {
    pub fn device() -> Result<Self, StorageError> {
        DeviceStore::open().map(Self::new)
    }
}

impl<S: KeyValueStore> Settings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_profile(&self) -> Result<ProfileRecord, StorageError> {
        match self.store.get(PROFILE_KEY)? {
            Some(raw) => {
                let record: ProfileRecord = serde_json::from_str(&raw)?;
                Ok(record.or_defaults())
            }
            None => Ok(ProfileRecord::default()),
        }
    }

    pub fn save_profile(&mut self, profile: &ProfileRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &raw)?;
        tracing::info!("profile saved");
        Ok(())
    }

    pub fn onboarding_completed(&self) -> Result<bool, StorageError> {
        Ok(self.store.get(ONBOARDING_COMPLETED_KEY)?.as_deref() == Some("true"))
    }

    pub fn complete_onboarding(&mut self, user_type: Option<UserType>) -> Result<(), StorageError> {
        self.store.set(ONBOARDING_COMPLETED_KEY, "true")?;
        if let Some(user_type) = user_type {
            self.store.set(USER_TYPE_KEY, user_type.as_str())?;
        }
        tracing::info!(user_type = ?user_type, "onboarding completed");
        Ok(())
    }

    /// Unknown stored values read as `None`.
    pub fn user_type(&self) -> Result<Option<UserType>, StorageError> {
        Ok(self
            .store
            .get(USER_TYPE_KEY)?
            .and_then(|raw| UserType::parse(&raw)))
    }

    /// Drop everything (sign out).
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.clear()?;
        tracing::info!("local settings cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings<MemoryStore> {
        Settings::new(MemoryStore::default())
    }

    #[test]
    fn profile_defaults_when_absent() {
        let s = settings();
        assert_eq!(s.load_profile().unwrap(), ProfileRecord::default());
    }

    #[test]
    fn profile_round_trips() {
        let mut s = settings();
        let profile = ProfileRecord {
            name: "Ada Obi".into(),
            email: "ada@example.com".into(),
            phone: "+234 800 000 0000".into(),
            location: "Lagos".into(),
        };
        s.save_profile(&profile).unwrap();
        assert_eq!(s.load_profile().unwrap(), profile);
    }

    #[test]
    fn blank_or_missing_profile_fields_fall_back() {
        let mut store = MemoryStore::default();
        store
            .set(PROFILE_KEY, r#"{"name":"","email":"ada@example.com"}"#)
            .unwrap();
        let profile = Settings::new(store).load_profile().unwrap();
        assert_eq!(profile.name, "John Smith");
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.location, "Seattle, WA");
    }

    #[test]
    fn corrupt_profile_is_a_serde_error() {
        let mut store = MemoryStore::default();
        store.set(PROFILE_KEY, "{not json").unwrap();
        let err = Settings::new(store).load_profile().unwrap_err();
        assert!(matches!(err, StorageError::Serde(_)));
    }

    #[test]
    fn onboarding_flag_and_user_type() {
        let mut s = settings();
        assert!(!s.onboarding_completed().unwrap());
        assert_eq!(s.user_type().unwrap(), None);

        s.complete_onboarding(Some(UserType::Landlord)).unwrap();
        assert!(s.onboarding_completed().unwrap());
        assert_eq!(s.user_type().unwrap(), Some(UserType::Landlord));

        s.clear().unwrap();
        assert!(!s.onboarding_completed().unwrap());
    }

    #[test]
    fn skipping_user_type_leaves_it_unset() {
        let mut s = settings();
        s.complete_onboarding(None).unwrap();
        assert!(s.onboarding_completed().unwrap());
        assert_eq!(s.user_type().unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_between_opens() {
        let path = std::env::temp_dir()
            .join(format!("findmyhome-test-{}", uuid::Uuid::new_v4()))
            .join("settings.json");

        let mut first = Settings::new(FileStore::open_at(path.clone()).unwrap());
        first.complete_onboarding(Some(UserType::Tenant)).unwrap();

        let second = Settings::new(FileStore::open_at(path.clone()).unwrap());
        assert_eq!(second.user_type().unwrap(), Some(UserType::Tenant));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn unreadable_device_file_is_an_error_not_an_empty_store() {
        let dir = std::env::temp_dir().join(format!("findmyhome-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(FileStore::open_at(path), Err(StorageError::Serde(_))));

        let _ = std::fs::remove_dir_all(dir);
    }
}
