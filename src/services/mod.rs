pub mod emulator_admin;
pub mod session;
pub mod study_groups;
pub mod token_provider;

pub use emulator_admin::EmulatorAdmin;
pub use session::{AuthenticatedSession, RequestOptions};
pub use study_groups::StudyGroupsApi;
pub use token_provider::{get_access_token, TokenProvider};
