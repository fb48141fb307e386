use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Missing or malformed user input. Shown to the user, no state change.
    ValidationError,
    /// Persisted session data could not be parsed. Recovered by clearing storage.
    CorruptState,
    /// The backing key/value store refused a write.
    Storage,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::CorruptState => write!(f, "CorruptState"),
            AppErrorKind::Storage => write!(f, "Storage"),
        }
    }
}

/// Structured application error used by the controllers and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn corrupt_state(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::CorruptState,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Storage,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Replace the summary message, keeping kind and field errors.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_validation(&self) -> bool {
        self.kind == AppErrorKind::ValidationError
    }

    pub fn is_corrupt_state(&self) -> bool {
        self.kind == AppErrorKind::CorruptState
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::corrupt_state(format!("Malformed stored data: {}", err))
    }
}
