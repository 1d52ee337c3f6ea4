//! Process-wide property store.
//!
//! Responsibilities:
//! - Load `.properties` resources into a single in-memory mapping.
//! - Overlay process environment variables after every load.
//! - Answer typed queries (string, int, long, double, bool, enum, array,
//!   set, prefix views) with default-value fallback.
//!
//! Does NOT handle:
//! - Persisting `set_value` changes back to disk (no write path exists).
//! - Hot-reload notification or validation schemas.
//!
//! Invariants / Assumptions:
//! - Keys and values are always strings; typed getters derive from the
//!   string form on every call and never cache typed values.
//! - `load` calls are serialized against each other; readers are only
//!   blocked for the duration of a single merge step, so a reader running
//!   concurrently with `load` may observe a partially-merged store.
//! - Typed-getter parse failures are logged and absorbed; only `load` and
//!   `res_upload_startup_state` surface errors.

mod error;
mod format;
mod properties;
mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use properties::PropertyStore;
pub use types::ResUploadType;
