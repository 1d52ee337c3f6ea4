//! Centralized property keys and defaults for the Taskforge workspace.
//!
//! This module contains the well-known configuration key names used across
//! crates to avoid magic string duplication and improve maintainability.

// =============================================================================
// Resource Paths
// =============================================================================

/// Default properties resource loaded at startup.
pub const COMMON_PROPERTIES_PATH: &str = "common.properties";

// =============================================================================
// Resource Storage Keys
// =============================================================================

/// Storage backend selector for resource upload (e.g. `HDFS`, `S3`, `NONE`).
pub const RESOURCE_STORAGE_TYPE: &str = "resource.storage.type";

/// Prefix shared by all filesystem driver properties (e.g. `fs.defaultFS`).
pub const FS_PREFIX: &str = "fs.";

// =============================================================================
// Local Data Keys
// =============================================================================

/// Local base directory for scratch data.
pub const DATA_BASEDIR_PATH: &str = "data.basedir.path";

/// Default local base directory when `data.basedir.path` is unset.
pub const DATA_BASEDIR_PATH_DEFAULT: &str = "/tmp/taskforge";

// =============================================================================
// Separators
// =============================================================================

/// Separator for list-valued properties.
pub const COMMA: &str = ",";
