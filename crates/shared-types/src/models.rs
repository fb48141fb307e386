use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name used when a role key is not one of the known roles.
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// School role controlling which dashboard panel a user sees.
///
/// - `Admin`: school administration, full overview.
/// - `Clerk`: fees, enrolment and records.
/// - `Teacher`: classes, attendance and marks.
/// - `Parent`: a child's progress and school notices.
/// - `Student`: timetable, homework and results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Clerk,
    Teacher,
    Parent,
    Student,
}

/// All roles in the order the login form lists them.
pub const ALL_ROLES: &[Role] = &[
    Role::Admin,
    Role::Clerk,
    Role::Teacher,
    Role::Parent,
    Role::Student,
];

impl Role {
    /// Parse a lowercase role key. Unknown keys return `None`.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "clerk" => Some(Role::Clerk),
            "teacher" => Some(Role::Teacher),
            "parent" => Some(Role::Parent),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    /// Lowercase key used in storage and in the role select.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Clerk => "clerk",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
            Role::Student => "student",
        }
    }

    /// Label shown in the role select.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Clerk => "Clerk",
            Role::Teacher => "Teacher",
            Role::Parent => "Parent",
            Role::Student => "Student",
        }
    }

    /// Demo account name shown for a signed-in user of this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "John Administrator",
            Role::Clerk => "Sarah Clerk",
            Role::Teacher => "Robert Moyo",
            Role::Parent => "Grace Parent",
            Role::Student => "Tafadzwa Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a display name from a raw role key, falling back to [`FALLBACK_DISPLAY_NAME`].
pub fn display_name_for_key(key: &str) -> &'static str {
    Role::from_key(key)
        .map(|r| r.display_name())
        .unwrap_or(FALLBACK_DISPLAY_NAME)
}

/// The user record persisted under the `currentUser` storage key.
///
/// Field names are camelCase on the wire so existing browser data keeps
/// parsing after an upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub email: String,
    pub display_name: String,
    pub uid: String,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    #[serde(default = "default_true")]
    pub email_verified: bool,
}

fn default_true() -> bool {
    true
}

/// An authenticated (mocked) session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub email: String,
    pub display_name: String,
    pub uid: String,
    pub role: Role,
}

impl Session {
    /// Build a session for `role`, deriving the display name from the role table.
    pub fn new(email: impl Into<String>, uid: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            display_name: role.display_name().to_string(),
            uid: uid.into(),
            role,
        }
    }

    /// Reassemble a session from its persisted record and role.
    pub fn from_stored(user: StoredUser, role: Role) -> Self {
        Self {
            email: user.email,
            display_name: user.display_name,
            uid: user.uid,
            role,
        }
    }

    /// The record written under `currentUser`.
    pub fn to_stored(&self) -> StoredUser {
        StoredUser {
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            uid: self.uid.clone(),
            photo_url: None,
            email_verified: true,
        }
    }

    /// Two-letter initials for avatars.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Overall UI state composed from the session and visibility controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    LoggedOut,
    LoggedIn(Role),
}
