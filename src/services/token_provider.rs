//! Password sign-in against the Firebase auth emulator.
//!
//! Exchanges an email/password pair for an ID token that the backend accepts
//! as a bearer credential. One request per call, no retries.

use reqwest::blocking::Client;
use serde::Serialize;

use crate::error::HarnessError;
use crate::models::{AccessToken, Credentials, HarnessConfig};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Issues password sign-in requests to the emulator
pub struct TokenProvider {
    client: Client,
    sign_in_url: String,
}

impl TokenProvider {
    pub fn new(sign_in_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            sign_in_url: sign_in_url.into(),
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(config.sign_in_url())
    }

    pub fn sign_in_url(&self) -> &str {
        &self.sign_in_url
    }

    /// Sign in and return the `idToken` from the emulator's response.
    ///
    /// The body is inspected whatever the status code: the emulator reports
    /// bad credentials as a JSON `error` object alongside a 400.
    pub fn fetch_token(&self, credentials: &Credentials) -> Result<AccessToken, HarnessError> {
        if !credentials.is_complete() {
            return Err(HarnessError::TokenRetrieval(
                "email and password must not be empty".to_string(),
            ));
        }

        let body = serde_json::to_string(&SignInRequest {
            email: &credentials.email,
            password: &credentials.password,
            return_secure_token: true,
        })?;

        tracing::debug!(url = %self.sign_in_url, email = %credentials.email, "Signing in");

        let response = self
            .client
            .post(&self.sign_in_url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        let data: serde_json::Value = serde_json::from_str(&response.text()?)?;

        match data.get("idToken").and_then(|t| t.as_str()) {
            Some(token) => {
                tracing::debug!(status = %status, "Sign-in succeeded");
                Ok(AccessToken::new(token))
            }
            None => {
                let error = HarnessError::token_retrieval(data.get("error"));
                tracing::warn!(status = %status, %error, "Sign-in failed");
                Err(error)
            }
        }
    }
}

/// Fetch a token from the emulator named by the environment configuration
pub fn get_access_token(email: &str, password: &str) -> Result<AccessToken, HarnessError> {
    TokenProvider::from_config(HarnessConfig::global()).fetch_token(&Credentials::new(email, password))
}
