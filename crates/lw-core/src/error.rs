use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("{message}")]
    Store { message: String },
}

impl LogError {
    pub fn store(err: impl std::fmt::Display) -> Self {
        LogError::Store {
            message: err.to_string(),
        }
    }
}
