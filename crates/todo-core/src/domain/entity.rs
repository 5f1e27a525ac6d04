//! Domain Layer - Core Entity Trait
//!
//! Basic contract for domain entities plus the shared error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Only repositories and the codec produce these. The store logs them and
/// keeps going, so none of them reach the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    /// Backing storage rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),
    /// Persisted value could not be encoded or decoded
    #[error("Codec error: {0}")]
    Codec(String),
    /// Backing storage does not exist in this environment
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Codec(e.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn test_json_error_maps_to_codec() {
        let parse = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        assert!(matches!(DomainError::from(parse), DomainError::Codec(_)));
    }
}
