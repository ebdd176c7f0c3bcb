use serde::{Deserialize, Serialize};

/// Validation failures for the add-movie form. The payload is the field label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("{0} is required")]
    Required(String),

    #[error("{0} is not a valid URL")]
    InvalidUrl(String),
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Required(label) => format!("Please enter {}", label.to_lowercase()),
            Self::InvalidUrl(_) => "Please enter a valid url".to_string(),
        }
    }
}
