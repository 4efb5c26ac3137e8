use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Invalid name '{0}': must be between 2 and 50 characters on a single line")]
    InvalidName(String),

    #[error("Invalid number '{0}': only '+', spaces and digits are allowed, 3 to 25 characters long")]
    InvalidNumber(String),

    #[error("Contact not found: {0}")]
    NameNotFound(String),

    #[error("Could not read contacts from {location}: {source}")]
    PersistenceRead {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not save contacts to {location}: {source}")]
    PersistenceWrite {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PhonebookError {
    /// Validation and lookup failures the user can fix by retrying with other input.
    pub fn is_recoverable_input(&self) -> bool {
        matches!(
            self,
            PhonebookError::InvalidName(_)
                | PhonebookError::InvalidNumber(_)
                | PhonebookError::NameNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
