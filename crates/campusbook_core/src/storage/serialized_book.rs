//! Whole-book wire form and collection-level checks.
//!
//! # Responsibility
//! - Hold the stored list of person records for one load/save call.
//! - Dispatch each record to its variant conversion and enforce the
//!   collection-level duplicate rule.
//!
//! # Invariants
//! - Output order matches input order.
//! - Conversion stops at the first failing record; earlier successes are
//!   discarded, never partially returned.

use crate::model::person::Person;
use crate::storage::error::IllegalValueError;
use crate::storage::serialized_person::SerializedPerson;
use serde::{Deserialize, Serialize};

/// Policy for when two reconstructed records collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateRule {
    /// Records collide only when equal field-for-field.
    #[default]
    FullRecord,
    /// Records collide when their names match, regardless of other fields.
    SameName,
}

impl DuplicateRule {
    fn collides(self, a: &Person, b: &Person) -> bool {
        match self {
            Self::FullRecord => a == b,
            Self::SameName => a.is_same_person(b),
        }
    }
}

/// Stored form of the whole contact book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedBook {
    #[serde(default)]
    pub persons: Vec<SerializedPerson>,
}

impl SerializedBook {
    /// Projects a validated person list into its stored form.
    pub fn from_persons(persons: &[Person]) -> Self {
        Self {
            persons: persons.iter().map(SerializedPerson::from_person).collect(),
        }
    }

    /// Rebuilds the person list, applying the duplicate rule as each record
    /// is accepted.
    pub fn to_persons(&self, rule: DuplicateRule) -> Result<Vec<Person>, IllegalValueError> {
        let mut persons: Vec<Person> = Vec::with_capacity(self.persons.len());
        for record in &self.persons {
            let person = record.to_person()?;
            if persons.iter().any(|existing| rule.collides(existing, &person)) {
                return Err(IllegalValueError::DuplicateIdentity(
                    person.name().as_str().to_string(),
                ));
            }
            persons.push(person);
        }
        Ok(persons)
    }
}
