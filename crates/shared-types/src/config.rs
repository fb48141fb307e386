use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Storage keys
// ---------------------------------------------------------------------------

/// Serialized [`StoredUser`](crate::StoredUser) of the signed-in user.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Plain role key of the signed-in user.
pub const USER_ROLE_KEY: &str = "userRole";

pub const API_KEY_KEY: &str = "FIREBASE_API_KEY";
pub const PROJECT_ID_KEY: &str = "FIREBASE_PROJECT_ID";
pub const APP_ID_KEY: &str = "FIREBASE_APP_ID";

pub const DEMO_API_KEY: &str = "demo-api-key";
pub const DEMO_PROJECT_ID: &str = "demo-project-id";
pub const DEMO_APP_ID: &str = "demo-app-id";

// ---------------------------------------------------------------------------
// External service credentials
// ---------------------------------------------------------------------------

/// Credentials for the external data service.
///
/// Missing values fall back to the demo placeholders, which keep the app
/// usable offline but mark it as unconfigured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCredentials {
    pub api_key: String,
    pub project_id: String,
    pub app_id: String,
}

impl Default for ServiceCredentials {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            project_id: DEMO_PROJECT_ID.to_string(),
            app_id: DEMO_APP_ID.to_string(),
        }
    }
}

impl ServiceCredentials {
    /// Build from optional stored values, substituting demo placeholders.
    pub fn from_parts(
        api_key: Option<String>,
        project_id: Option<String>,
        app_id: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.unwrap_or_else(|| DEMO_API_KEY.to_string()),
            project_id: project_id.unwrap_or_else(|| DEMO_PROJECT_ID.to_string()),
            app_id: app_id.unwrap_or_else(|| DEMO_APP_ID.to_string()),
        }
    }

    /// True only when none of the values is a demo placeholder.
    pub fn is_configured(&self) -> bool {
        self.api_key != DEMO_API_KEY
            && self.project_id != DEMO_PROJECT_ID
            && self.app_id != DEMO_APP_ID
    }
}
