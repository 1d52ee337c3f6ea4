//! Tests for the property store.
//!
//! Responsibilities:
//! - Test typed getters, defaults, and parse-failure fallback.
//! - Test resource loading, merge ordering, and the environment overlay.
//! - Test the two prefix views and their deliberate asymmetry.
//!
//! Does NOT handle:
//! - Properties text parsing details (tested in format.rs).
//! - Storage type name resolution (tested in types.rs).
//!
//! Invariants:
//! - Tests touching environment variables or the working directory use
//!   `serial_test` plus `global_test_lock()` to prevent cross-test pollution.
//! - Temporary resources are cleaned up automatically via `tempfile`.

pub mod enum_tests;
