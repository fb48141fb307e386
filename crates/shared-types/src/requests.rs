use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Role;

/// Login form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub role: Role,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

/// Service credentials prompt submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, message = "API key is required"))]
    pub api_key: String,
    #[validate(length(min = 1, message = "Project ID is required"))]
    pub project_id: String,
    #[validate(length(min = 1, message = "App ID is required"))]
    pub app_id: String,
}
