//! One-time seeding of the auth emulator, run before the test suite.

use std::io::Write;

use crate::error::HarnessError;
use crate::models::{Credentials, HarnessConfig, TEST_USER_DISPLAY_NAME};
use crate::services::EmulatorAdmin;

pub const SETUP_STARTED: &str = "Initial setup started. Waiting for Firebase emulator.";
pub const SETUP_COMPLETED: &str = "Initial setup completed.";

/// Wait for the emulator, then create the test user.
///
/// Nothing checks that the emulator is ready: the configured delay is simply slept out.
/// Status lines go to `out` and are flushed immediately.
pub fn run_initial_setup<W: Write>(config: &HarnessConfig, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{SETUP_STARTED}")?;
    out.flush()?;

    tracing::info!(
        delay_secs = config.setup_delay.as_secs(),
        emulator = %config.auth_emulator_host,
        "Waiting for auth emulator"
    );
    std::thread::sleep(config.setup_delay);

    seed_test_user(config)?;

    writeln!(out, "{SETUP_COMPLETED}")?;
    out.flush()?;
    Ok(())
}

/// Create the fixed test identity in the configured emulator project
pub fn seed_test_user(config: &HarnessConfig) -> Result<String, HarnessError> {
    tracing::info!(project_id = %config.project_id, "Seeding test user");
    EmulatorAdmin::from_config(config).create_user(&Credentials::test_user(), TEST_USER_DISPLAY_NAME)
}
