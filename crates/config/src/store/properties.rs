//! The property store implementation.
//!
//! Responsibilities:
//! - Own the single key/value mapping and perform bulk loads into it.
//! - Overlay process environment variables after every load.
//! - Answer typed queries with defaults and graceful fallback.
//!
//! Does NOT handle:
//! - Properties text parsing (see format.rs).
//! - Storage backend name resolution (see types.rs).
//!
//! Invariants / Assumptions:
//! - `load` calls are serialized by a dedicated mutex; the map lock is held
//!   only per merge step, so readers interleave with an in-flight load.
//! - Typed getters treat an empty-string value the same as an absent key.
//! - Parse failures in typed getters are logged at info and absorbed; the
//!   caller always receives the supplied default.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::error::ConfigError;
use super::format;
use super::types::ResUploadType;
use crate::constants::{COMMON_PROPERTIES_PATH, RESOURCE_STORAGE_TYPE};

/// Process-wide property mapping with typed accessors.
///
/// Constructed once at process startup (usually via [`PropertyStore::bootstrap`])
/// and shared by reference with every component that reads configuration.
pub struct PropertyStore {
    map: RwLock<HashMap<String, String>>,
    load_lock: Mutex<()>,
}

impl Default for PropertyStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl PropertyStore {
    /// Create an empty store with no resources loaded.
    pub fn empty() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            load_lock: Mutex::new(()),
        }
    }

    /// Create a store populated from the default `common.properties` resource.
    ///
    /// This is the startup constructor: the process entry point is expected
    /// to treat an error as fatal and terminate, so that a misconfigured
    /// deployment cannot run with partial settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ResourceRead`] or [`ConfigError::ResourceParse`]
    /// when the default resource is missing or malformed.
    pub fn bootstrap() -> Result<Self, ConfigError> {
        let store = Self::empty();
        store.load(&[COMMON_PROPERTIES_PATH])?;
        Ok(store)
    }

    /// Load properties resources into the store, in order.
    ///
    /// Each resource is parsed into a sub-map and merged into the master
    /// mapping; later resources override earlier ones and prior entries on
    /// key collision. After all resources are merged, every process
    /// environment variable is applied on top via [`PropertyStore::set_value`],
    /// giving operators an override channel that needs no file edits.
    ///
    /// Concurrent `load` calls are serialized. Readers are not blocked for
    /// the whole load: a reader running concurrently may observe the store
    /// between merge steps (after one resource but before the next, or
    /// before the environment overlay). That window is accepted; within a
    /// single step the map is never torn.
    ///
    /// # Errors
    ///
    /// Fails on the first resource that cannot be read or parsed, leaving
    /// already-merged resources in place. Load errors are unrecoverable by
    /// contract; the caller terminates the process.
    pub fn load<P: AsRef<Path>>(&self, paths: &[P]) -> Result<(), ConfigError> {
        let _serialized = self
            .load_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        for path in paths {
            let path = path.as_ref();
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ResourceRead {
                path: path.to_path_buf(),
                source,
            })?;
            let sub = format::parse(&text).map_err(|e| ConfigError::ResourceParse {
                path: path.to_path_buf(),
                line: e.line,
                message: e.message,
            })?;

            let mut map = self.write();
            for (key, value) in sub {
                debug!(%key, %value, "Loaded property");
                map.insert(key, value);
            }
        }

        self.overlay_env();
        Ok(())
    }

    /// Overwrite entries from the process environment, one variable at a time.
    fn overlay_env(&self) {
        let mut count = 0usize;
        let mut map = self.write();
        for (key, value) in std::env::vars_os() {
            let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) else {
                debug!("Skipping non-UTF-8 environment variable");
                continue;
            };
            debug!(%key, "Overriding property from environment");
            map.insert(key, value);
            count += 1;
        }
        drop(map);
        info!(count, "Applied environment variable overlay");
    }

    /// Get a property value. The key is trimmed before lookup.
    pub fn get(&self, key: &str) -> Option<String> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        self.read().get(key).cloned()
    }

    /// Get a property value, falling back to `default` when the value is
    /// absent or empty.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }

    /// Get a property value upper-cased. Empty values stay empty.
    pub fn get_upper(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| if value.is_empty() { value } else { value.to_uppercase() })
    }

    /// Get an integer property; `-1` when absent or unparseable.
    pub fn get_i32(&self, key: &str) -> i32 {
        self.get_i32_or(key, -1)
    }

    /// Get an integer property with an explicit default.
    pub fn get_i32_or(&self, key: &str, default: i32) -> i32 {
        self.parse_or(key, default)
    }

    /// Get a long property; `-1` when absent or unparseable.
    pub fn get_i64(&self, key: &str) -> i64 {
        self.get_i64_or(key, -1)
    }

    /// Get a long property with an explicit default.
    pub fn get_i64_or(&self, key: &str, default: i64) -> i64 {
        self.parse_or(key, default)
    }

    /// Get a double property with an explicit default.
    pub fn get_f64_or(&self, key: &str, default: f64) -> f64 {
        self.parse_or(key, default)
    }

    /// Get a boolean property; `false` when absent.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get_bool_or(key, false)
    }

    /// Get a boolean property with an explicit default.
    ///
    /// A present, non-empty value parses as case-insensitive `"true"`;
    /// any other text yields `false`, not the default. Only absent or
    /// empty values fall back to the default.
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(value) if !value.is_empty() => value.eq_ignore_ascii_case("true"),
            _ => default,
        }
    }

    /// Split a property value by a literal separator.
    ///
    /// Returns an empty vector, never absent, for absent or empty values.
    /// Trailing empty segments are dropped (`"a,b,"` yields `["a", "b"]`).
    pub fn get_array(&self, key: &str, separator: &str) -> Vec<String> {
        let Some(value) = self.get(key) else {
            return Vec::new();
        };
        if value.is_empty() {
            return Vec::new();
        }
        let mut parts: Vec<String> = value.split(separator).map(str::to_string).collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        parts
    }

    /// Get an enum property by exact constant-name match.
    ///
    /// A value that matches no constant is logged and absorbed; the default
    /// is returned. Contrast with [`PropertyStore::res_upload_startup_state`],
    /// which fails hard on an unrecognized name.
    pub fn get_enum<T: FromStr>(&self, key: &str, default: T) -> T {
        let Some(value) = self.get(key) else {
            return default;
        };
        if value.is_empty() {
            return default;
        }
        match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                info!(key, %value, "No enum constant matches property value, using default");
                default
            }
        }
    }

    /// All entries whose key starts with `prefix`, keys kept as-is.
    pub fn get_prefixed_properties(&self, prefix: &str) -> HashMap<String, String> {
        self.read()
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// All entries whose key *contains* `prefix`, re-keyed with the first
    /// `"{prefix}."` occurrence stripped.
    ///
    /// Returns `None` for an empty prefix or an empty store. This view is
    /// deliberately not unified with [`PropertyStore::get_prefixed_properties`]:
    /// the two have distinct matching (contains vs. starts-with) and this
    /// one rewrites keys.
    pub fn get_properties_by_prefix(&self, prefix: &str) -> Option<HashMap<String, String>> {
        if prefix.is_empty() {
            return None;
        }
        let map = self.read();
        if map.is_empty() {
            return None;
        }
        let strip = format!("{prefix}.");
        Some(
            map.iter()
                .filter(|(key, _)| key.contains(prefix))
                .map(|(key, value)| (key.replacen(&strip, "", 1), value.clone()))
                .collect(),
        )
    }

    /// Get a set-valued property through a caller-supplied transform.
    ///
    /// The store does not know the value's real shape; the transform turns
    /// the raw string into the caller's element type (a comma-split into a
    /// typed set, say). Absent or empty values yield `default` without
    /// invoking the transform. The key is looked up raw, untrimmed.
    pub fn get_set<T, F>(&self, key: &str, transform: F, default: HashSet<T>) -> HashSet<T>
    where
        F: FnOnce(&str) -> HashSet<T>,
    {
        let value = self.read().get(key).cloned();
        match value {
            Some(value) if !value.is_empty() => transform(&value),
            _ => default,
        }
    }

    /// Insert or overwrite a single entry.
    ///
    /// Not serialized with `load` beyond the map lock's per-operation
    /// atomicity; concurrent writers are last-write-wins per key.
    pub fn set_value(&self, key: &str, value: &str) {
        self.write().insert(key.to_string(), value.to_string());
    }

    /// Whether resource upload is enabled for this deployment.
    ///
    /// Resolves the upper-cased `resource.storage.type` value against
    /// [`ResUploadType`]; an absent or empty value means the `NONE`
    /// sentinel. Unlike [`PropertyStore::get_enum`], an unrecognized name
    /// here is a hard configuration error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownStorageType`] when the configured value
    /// matches no known backend.
    pub fn res_upload_startup_state(&self) -> Result<bool, ConfigError> {
        let tag = match self.get_upper(RESOURCE_STORAGE_TYPE) {
            Some(tag) if !tag.is_empty() => tag,
            _ => ResUploadType::None.to_string(),
        };
        let resolved: ResUploadType = tag.parse()?;
        Ok(resolved != ResUploadType::None)
    }

    /// Parse a property value, logging and absorbing parse failures.
    fn parse_or<T: FromStr + Copy>(&self, key: &str, default: T) -> T {
        let Some(value) = self.get(key) else {
            return default;
        };
        if value.is_empty() {
            return default;
        }
        match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                info!(key, %value, "Failed to parse property value, using default");
                default
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.map.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.map.write().unwrap_or_else(PoisonError::into_inner)
    }
}
