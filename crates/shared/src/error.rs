use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a draft could not be committed. Display text is the user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    EmptyField,
    #[error("Please enter a valid price.")]
    InvalidPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course '{token}'; expected one of Starters, Mains, Desserts")]
pub struct ParseCourseError {
    token: String,
}

impl ParseCourseError {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}
