//! Integration test harness for the study-groups backend.
//!
//! Signs in against a local Firebase auth emulator and drives the backend's
//! HTTP API through a bearer-token session. The `initial-setup` binary seeds
//! the test user; the suites under `tests/` hold the assertions.

pub mod error;
pub mod fixtures;
pub mod models;
pub mod services;
pub mod setup;
