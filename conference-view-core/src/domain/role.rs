use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a role assigned to a peer by the conferencing backend
///
/// Roles are compared by their exact name; the backend is the source of truth
/// for which names exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RoleName(String);

impl RoleName {
    pub const MODERATOR: &'static str = "moderator";
    pub const INTERVIEWEE: &'static str = "interviewee";
    pub const CANDIDATE: &'static str = "candidate";

    /// Roles that get the one-on-one interview layout
    pub const INTERVIEW_ROLES: [&'static str; 3] =
        [Self::MODERATOR, Self::INTERVIEWEE, Self::CANDIDATE];

    pub fn new(name: impl Into<String>) -> Self {
        RoleName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the moderator role
    pub fn is_moderator(&self) -> bool {
        self.0 == Self::MODERATOR
    }

    /// Check if this role takes part in an interview session
    pub fn is_interview_role(&self) -> bool {
        Self::INTERVIEW_ROLES.contains(&self.0.as_str())
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleName {
    fn from(name: &str) -> Self {
        RoleName::new(name)
    }
}

impl From<String> for RoleName {
    fn from(name: String) -> Self {
        RoleName(name)
    }
}
