use serde::{Deserialize, Serialize};
use std::fmt;

/// Visibility of a study group.
///
/// The backend does not validate `type` and echoes back whatever it was
/// given, so unknown values are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudyGroupType {
    Public,
    Closed,
    InviteOnly,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for StudyGroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyGroupType::Public => write!(f, "public"),
            StudyGroupType::Closed => write!(f, "closed"),
            StudyGroupType::InviteOnly => write!(f, "invite-only"),
            StudyGroupType::Other(other) => write!(f, "{other}"),
        }
    }
}

/// Study group as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: StudyGroupType,
}

/// Creation payload for `POST /study-groups`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudyGroup {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: StudyGroupType,
}

impl NewStudyGroup {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        group_type: StudyGroupType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            group_type,
        }
    }
}
