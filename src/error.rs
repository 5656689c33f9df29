use thiserror::Error;

#[derive(Debug, Error)]
pub enum JoinError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} is not a valid email address")]
    InvalidEmail { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Cannot delete own self-contact")]
    CannotDeleteSelf,

    #[error("No contact selected")]
    NoSelection,

    #[error("No contact form open")]
    NoOverlay,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type JoinResult<T> = Result<T, JoinError>;
