//! Storage-layer error taxonomy.
//!
//! # Responsibility
//! - Describe every way a serialized record can fail reconstruction.
//! - Wrap I/O and text-format failures for the load/save entry points.
//!
//! # Invariants
//! - Record-level errors carry the offending field name or discriminator so
//!   callers can show a precise first-failure message.
//! - This layer never swallows an error or substitutes defaults.

use crate::model::fields::InvalidFieldError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A serialized record violated a domain constraint during reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalValueError {
    /// A mandatory field's raw value was absent from the record.
    MissingField(&'static str),
    /// A present raw value failed its field's format predicate.
    InvalidFormat {
        field: &'static str,
        constraint: &'static str,
    },
    /// The record's `type` discriminator names no known variant.
    UnknownType(String),
    /// Two records in one collection collide under the duplicate rule.
    /// Carries the colliding person's name.
    DuplicateIdentity(String),
}

impl Display for IllegalValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Person's {field} field is missing!"),
            Self::InvalidFormat { constraint, .. } => write!(f, "{constraint}"),
            Self::UnknownType(discriminator) => {
                write!(f, "Unknown person type: {discriminator}")
            }
            Self::DuplicateIdentity(name) => {
                write!(f, "Persons list contains duplicate person(s): {name}")
            }
        }
    }
}

impl Error for IllegalValueError {}

impl From<InvalidFieldError> for IllegalValueError {
    fn from(value: InvalidFieldError) -> Self {
        Self::InvalidFormat {
            field: value.field,
            constraint: value.constraint,
        }
    }
}

/// Failure surfaced by a whole load or save call.
#[derive(Debug)]
pub enum StorageError {
    /// The underlying medium failed; opaque to this layer.
    Io(std::io::Error),
    /// The stored text is not well-formed JSON.
    Format(serde_json::Error),
    /// The stored data is well-formed but violates a domain constraint.
    IllegalValue(IllegalValueError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage I/O failure: {err}"),
            Self::Format(err) => write!(f, "malformed book data: {err}"),
            Self::IllegalValue(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format(err) => Some(err),
            Self::IllegalValue(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Format(value)
    }
}

impl From<IllegalValueError> for StorageError {
    fn from(value: IllegalValueError) -> Self {
        Self::IllegalValue(value)
    }
}
