pub mod config;
pub mod credentials;
pub mod study_group;

pub use config::HarnessConfig;
pub use credentials::{
    AccessToken, Credentials, TEST_USER_DISPLAY_NAME, TEST_USER_EMAIL, TEST_USER_PASSWORD,
};
pub use study_group::{NewStudyGroup, StudyGroup, StudyGroupType};
