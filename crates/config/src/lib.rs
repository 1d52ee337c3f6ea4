//! Configuration management for the Taskforge platform.
//!
//! This crate provides the process-wide property store: key/value
//! configuration loaded from `.properties` resources, overlaid with
//! environment variables, and read through typed accessors with defaults.

pub mod constants;
mod store;

pub use store::{ConfigError, PropertyStore, ResUploadType};
