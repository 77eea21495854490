use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("State not found: {type_name}")]
    StateNotFound { type_name: &'static str },
    #[error("Compute not found: {type_name}")]
    ComputeNotFound { type_name: &'static str },
    #[error("Command not registered: {type_name}")]
    CommandNotFound { type_name: &'static str },
}
