//! Tests for enum resolution: the forgiving `get_enum` accessor and the
//! fail-hard resource upload startup check.

use std::str::FromStr;

use crate::constants::RESOURCE_STORAGE_TYPE;
use crate::store::{ConfigError, PropertyStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandPriority {
    High,
    Medium,
    Low,
}

impl FromStr for CommandPriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(CommandPriority::High),
            "MEDIUM" => Ok(CommandPriority::Medium),
            "LOW" => Ok(CommandPriority::Low),
            _ => Err(()),
        }
    }
}

#[test]
fn test_get_enum_matching_constant() {
    let store = PropertyStore::empty();
    store.set_value("command.priority", "HIGH");
    assert_eq!(
        store.get_enum("command.priority", CommandPriority::Medium),
        CommandPriority::High
    );
}

#[test]
fn test_get_enum_missing_key_returns_default() {
    let store = PropertyStore::empty();
    assert_eq!(
        store.get_enum("missing.key", CommandPriority::Medium),
        CommandPriority::Medium
    );
}

#[test]
fn test_get_enum_non_matching_value_returns_default() {
    // A value matching no constant is absorbed, not raised.
    let store = PropertyStore::empty();
    store.set_value("command.priority", "URGENT");
    assert_eq!(
        store.get_enum("command.priority", CommandPriority::Low),
        CommandPriority::Low
    );
}

#[test]
fn test_get_enum_is_exact_match() {
    let store = PropertyStore::empty();
    store.set_value("command.priority", "high");
    assert_eq!(
        store.get_enum("command.priority", CommandPriority::Medium),
        CommandPriority::Medium
    );
}

#[test]
fn test_get_enum_empty_value_returns_default() {
    let store = PropertyStore::empty();
    store.set_value("command.priority", "");
    assert_eq!(
        store.get_enum("command.priority", CommandPriority::Low),
        CommandPriority::Low
    );
}

#[test]
fn test_res_upload_disabled_when_unset_or_none() {
    let store = PropertyStore::empty();
    assert!(!store.res_upload_startup_state().unwrap());

    store.set_value(RESOURCE_STORAGE_TYPE, "");
    assert!(!store.res_upload_startup_state().unwrap());

    store.set_value(RESOURCE_STORAGE_TYPE, "NONE");
    assert!(!store.res_upload_startup_state().unwrap());
}

#[test]
fn test_res_upload_enabled_for_real_backends() {
    let store = PropertyStore::empty();
    store.set_value(RESOURCE_STORAGE_TYPE, "HDFS");
    assert!(store.res_upload_startup_state().unwrap());

    // Resolution goes through the upper-casing getter, so lower case works
    // here even though ResUploadType::from_str itself is exact-match.
    store.set_value(RESOURCE_STORAGE_TYPE, "s3");
    assert!(store.res_upload_startup_state().unwrap());
}

#[test]
fn test_res_upload_unknown_backend_is_hard_error() {
    // This path fails loudly, unlike get_enum.
    let store = PropertyStore::empty();
    store.set_value(RESOURCE_STORAGE_TYPE, "ftp");
    assert!(matches!(
        store.res_upload_startup_state(),
        Err(ConfigError::UnknownStorageType(v)) if v == "FTP"
    ));
}
