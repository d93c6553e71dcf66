use std::sync::OnceLock;
use std::time::Duration;

/// Default `host:port` of the backend under test
pub const DEFAULT_BACKEND_HOST: &str = "127.0.0.1:8080";

/// Default `host:port` of the Firebase auth emulator
pub const DEFAULT_AUTH_EMULATOR_HOST: &str = "127.0.0.1:9099";

/// Demo project the emulator is started with
pub const DEFAULT_PROJECT_ID: &str = "demo-backend";

/// Seconds the setup process waits for the emulator before seeding
pub const DEFAULT_SETUP_DELAY_SECS: u64 = 30;

/// The emulator accepts any API key.
const EMULATOR_API_KEY: &str = "foo";

const IDENTITY_TOOLKIT_PREFIX: &str = "identitytoolkit.googleapis.com/v1";

/// Harness configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// `BACKEND_HOST`
    pub backend_host: String,

    /// `FIREBASE_AUTH_EMULATOR_HOST`
    pub auth_emulator_host: String,

    /// `FIREBASE_PROJECT_ID`
    pub project_id: String,

    /// `SETUP_DELAY_SECS`
    pub setup_delay: Duration,
}

static GLOBAL_CONFIG: OnceLock<HarnessConfig> = OnceLock::new();

impl HarnessConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let setup_delay_secs = match get("SETUP_DELAY_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => secs,
                Err(e) => {
                    tracing::warn!(value = %raw, %e, "Invalid SETUP_DELAY_SECS, using default");
                    DEFAULT_SETUP_DELAY_SECS
                }
            },
            None => DEFAULT_SETUP_DELAY_SECS,
        };

        let config = Self {
            backend_host: get("BACKEND_HOST").unwrap_or_else(|| DEFAULT_BACKEND_HOST.to_string()),
            auth_emulator_host: get("FIREBASE_AUTH_EMULATOR_HOST")
                .unwrap_or_else(|| DEFAULT_AUTH_EMULATOR_HOST.to_string()),
            project_id: get("FIREBASE_PROJECT_ID").unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string()),
            setup_delay: Duration::from_secs(setup_delay_secs),
        };

        tracing::debug!(
            backend_host = %config.backend_host,
            auth_emulator_host = %config.auth_emulator_host,
            project_id = %config.project_id,
            "Loaded harness configuration"
        );

        config
    }

    /// Process-wide configuration, read from the environment on first use
    pub fn global() -> &'static HarnessConfig {
        GLOBAL_CONFIG.get_or_init(Self::from_env)
    }

    /// Base URL every backend path is resolved against. Always ends in `/`.
    pub fn backend_base_url(&self) -> String {
        format!("http://{}/api/", self.backend_host)
    }

    /// Emulator password sign-in endpoint
    pub fn sign_in_url(&self) -> String {
        format!(
            "http://{}/{}/accounts:signInWithPassword?key={}",
            self.auth_emulator_host, IDENTITY_TOOLKIT_PREFIX, EMULATOR_API_KEY
        )
    }

    /// Emulator admin endpoint for creating accounts in the project
    pub fn create_account_url(&self) -> String {
        format!(
            "http://{}/{}/projects/{}/accounts",
            self.auth_emulator_host, IDENTITY_TOOLKIT_PREFIX, self.project_id
        )
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
