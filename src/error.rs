use crate::id::{AccountId, TokenId};
use crate::roles::Role;
use thiserror::Error;

/// Represents all possible errors that can occur when operating on the registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The caller is neither the owner nor holds a sufficient role
    #[error("unauthorized: {caller} requires at least role {required:?}")]
    Unauthorized { caller: AccountId, required: Role },

    /// A mint attempted to reuse an already-minted token id
    #[error("duplicate token: {0} has already been minted")]
    DuplicateToken(TokenId),

    /// Errors related to missing or invalid data
    #[error("not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Generic errors that don't fit in other categories
    #[error("other error: {0}")]
    Other(String),

    /// Anyhow error wrapper for error context
    #[error(transparent)]
    Context(#[from] anyhow::Error),
}

// Additional From conversions for common error types

impl From<bincode::Error> for RegistryError {
    fn from(err: bincode::Error) -> Self {
        RegistryError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization(err.to_string())
    }
}

impl From<String> for RegistryError {
    fn from(err: String) -> Self {
        RegistryError::Other(err)
    }
}

impl From<&str> for RegistryError {
    fn from(err: &str) -> Self {
        RegistryError::Other(err.to_string())
    }
}
