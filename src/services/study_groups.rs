use reqwest::blocking::Response;

use crate::error::HarnessError;
use crate::models::{NewStudyGroup, StudyGroup};
use crate::services::session::AuthenticatedSession;

const STUDY_GROUPS_PATH: &str = "/study-groups";

/// Study-group endpoints of the backend, on top of a session.
///
/// The raw methods hand back responses so tests can assert on status codes.
pub struct StudyGroupsApi<'a> {
    session: &'a AuthenticatedSession,
}

impl<'a> StudyGroupsApi<'a> {
    pub fn new(session: &'a AuthenticatedSession) -> Self {
        Self { session }
    }

    /// `GET /study-groups`
    pub fn list(&self) -> Result<Response, HarnessError> {
        self.session.get(STUDY_GROUPS_PATH)
    }

    /// `GET /study-groups/{id}`
    pub fn get(&self, id: impl std::fmt::Display) -> Result<Response, HarnessError> {
        self.session.get(&format!("{STUDY_GROUPS_PATH}/{id}"))
    }

    /// `POST /study-groups`
    pub fn create(&self, group: &NewStudyGroup) -> Result<Response, HarnessError> {
        self.session
            .post_json(STUDY_GROUPS_PATH, serde_json::to_value(group)?)
    }

    /// Create a group and parse the backend's reply
    pub fn create_and_parse(&self, group: &NewStudyGroup) -> Result<StudyGroup, HarnessError> {
        let response = self.create(group)?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(HarnessError::UnexpectedResponse(format!(
                "POST {STUDY_GROUPS_PATH} returned {status}: {}",
                body.trim()
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
