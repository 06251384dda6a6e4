//! Free-form person tags.
//!
//! # Invariants
//! - Tag names are non-empty and alphanumeric.
//! - Tags live in a `BTreeSet` on each person, so duplicates collapse and
//!   iteration order is deterministic.

use crate::model::fields::InvalidFieldError;
use std::fmt::{Display, Formatter};

/// A single validated tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub const FIELD_NAME: &'static str = "Tag";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
    }

    /// Wraps a validated tag name.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidFieldError> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self { name })
        } else {
            Err(InvalidFieldError {
                field: Self::FIELD_NAME,
                constraint: Self::MESSAGE_CONSTRAINTS,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name)
    }
}
