//! Account administration on the auth emulator.
//!
//! The emulator accepts the literal bearer `owner` as an admin credential for
//! its project-scoped endpoints, so no service account is involved.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::error::HarnessError;
use crate::models::{Credentials, HarnessConfig};

const EMULATOR_ADMIN_BEARER: &str = "Bearer owner";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountRequest<'a> {
    email: &'a str,
    password: &'a str,
    display_name: &'a str,
}

/// Admin client for one emulator project
pub struct EmulatorAdmin {
    client: Client,
    create_account_url: String,
}

impl EmulatorAdmin {
    pub fn new(create_account_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            create_account_url: create_account_url.into(),
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(config.create_account_url())
    }

    /// Create a password user and return its `localId`
    pub fn create_user(
        &self,
        credentials: &Credentials,
        display_name: &str,
    ) -> Result<String, HarnessError> {
        let body = serde_json::to_string(&CreateAccountRequest {
            email: &credentials.email,
            password: &credentials.password,
            display_name,
        })?;

        tracing::debug!(url = %self.create_account_url, email = %credentials.email, "Creating emulator user");

        let response = self
            .client
            .post(&self.create_account_url)
            .header(AUTHORIZATION, EMULATOR_ADMIN_BEARER)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        let data: serde_json::Value = serde_json::from_str(&response.text()?)?;

        match data.get("localId").and_then(|id| id.as_str()) {
            Some(local_id) if status.is_success() => {
                tracing::info!(email = %credentials.email, local_id, "Created emulator user");
                Ok(local_id.to_string())
            }
            _ => {
                let error = HarnessError::user_creation(data.get("error"));
                tracing::warn!(status = %status, %error, "Emulator rejected user creation");
                Err(error)
            }
        }
    }
}
