//! Shared error types for the admin dashboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid {field} value: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Duplicate record id: {id}")]
    DuplicateRecordId { id: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },
}

impl SharedError {
    pub fn invalid_value(field: &str, value: &str) -> Self {
        SharedError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn invalid_config(field: &str, value: impl ToString) -> Self {
        SharedError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
