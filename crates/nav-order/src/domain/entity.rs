//! Domain Layer - Core Entity Trait
//!
//! Identifiers and the basic contract shared by navigation entities.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for navigation entities
pub trait Entity {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + fmt::Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Backend-assigned identifier. The server may hand out integers or strings,
/// and the value is echoed back in the same JSON shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpaqueId {
    Int(i64),
    Str(String),
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpaqueId::Int(n) => write!(f, "{}", n),
            OpaqueId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OpaqueId {
    fn from(value: i64) -> Self {
        OpaqueId::Int(value)
    }
}

impl From<i32> for OpaqueId {
    fn from(value: i32) -> Self {
        OpaqueId::Int(i64::from(value))
    }
}

impl From<&str> for OpaqueId {
    fn from(value: &str) -> Self {
        OpaqueId::Str(value.to_string())
    }
}

impl From<String> for OpaqueId {
    fn from(value: String) -> Self {
        OpaqueId::Str(value)
    }
}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub OpaqueId);

        impl $name {
            pub fn new(id: impl Into<OpaqueId>) -> Self {
                Self(id.into())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(OpaqueId::Int(value))
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(OpaqueId::from(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(OpaqueId::from(value))
            }
        }
    };
}

typed_id!(
    /// Identifier of a leaf navigation entry
    ItemId
);

typed_id!(
    /// Identifier of a category group
    CategoryId
);

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("item {0} appears more than once")]
    DuplicateItem(ItemId),
    #[error("category {0} appears more than once")]
    DuplicateCategory(CategoryId),
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
