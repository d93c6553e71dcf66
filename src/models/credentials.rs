use std::fmt;

/// Email of the user seeded into the auth emulator
pub const TEST_USER_EMAIL: &str = "testuser@example.com";

/// Password of the seeded test user
pub const TEST_USER_PASSWORD: &str = "password123";

/// Display name of the seeded test user
pub const TEST_USER_DISPLAY_NAME: &str = "Test User";

/// Bearer credential issued by the auth emulator.
///
/// Valid for one test run; there is no refresh or expiry handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email/password pair for password sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The fixed identity seeded by `initial-setup`
    pub fn test_user() -> Self {
        Self::new(TEST_USER_EMAIL, TEST_USER_PASSWORD)
    }

    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}
