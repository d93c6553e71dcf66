//! Session-scoped fixtures shared by the live test suites.
//!
//! The access token is fetched once per test process and then handed out
//! read-only. A failed fetch is cached too: every later caller sees the same
//! error and no second sign-in is attempted.

use std::sync::OnceLock;

use crate::error::HarnessError;
use crate::models::{AccessToken, TEST_USER_EMAIL, TEST_USER_PASSWORD};
use crate::services::get_access_token;

/// Once-initialised token slot, caching either the token or the sign-in error
pub type SharedToken = OnceLock<Result<AccessToken, String>>;

static ACCESS_TOKEN: SharedToken = OnceLock::new();

/// Initialise `cell` with `fetch` on first use and return the cached outcome
pub fn fetch_shared<F>(cell: &SharedToken, fetch: F) -> Result<&AccessToken, &str>
where
    F: FnOnce() -> Result<AccessToken, HarnessError>,
{
    cell.get_or_init(|| {
        let result = fetch().map_err(|e| e.to_string());
        match &result {
            Ok(_) => tracing::info!("Session access token acquired"),
            Err(e) => tracing::warn!(error = %e, "Session access token unavailable"),
        }
        result
    })
    .as_ref()
    .map_err(String::as_str)
}

/// Token for the seeded test user, or the error that prevented fetching it
pub fn try_access_token() -> Result<&'static AccessToken, &'static str> {
    fetch_shared(&ACCESS_TOKEN, || {
        get_access_token(TEST_USER_EMAIL, TEST_USER_PASSWORD)
    })
}

/// Token for the seeded test user.
///
/// Panics if sign-in failed, which fails every test that depends on it.
pub fn access_token() -> &'static AccessToken {
    match try_access_token() {
        Ok(token) => token,
        Err(e) => panic!("Session fixture `access_token` failed: {e}"),
    }
}
