//! Person domain records.
//!
//! # Responsibility
//! - Define the three contact variants and the `Person` union over them.
//! - Provide identity helpers used by collection-level duplicate checks.
//!
//! # Invariants
//! - Every field holds an already-validated value object; a `Person` cannot
//!   be built from raw unvalidated strings.
//! - Optional profile fields use `Option`; "not supplied" never leaks a
//!   placeholder value into the model.

use crate::model::fields::{Email, Gender, Location, ModuleCode, Name, Phone};
use crate::model::profile::{GithubUsername, OfficeHour, Rating, Specialisation};
use crate::model::tag::Tag;
use std::collections::BTreeSet;

/// A student contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub gender: Gender,
    pub location: Location,
    pub tags: BTreeSet<Tag>,
}

/// A professor contact with optional teaching-profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    pub name: Name,
    pub module_code: ModuleCode,
    pub phone: Phone,
    pub email: Email,
    pub gender: Gender,
    pub location: Location,
    pub tags: BTreeSet<Tag>,
    pub rating: Option<Rating>,
    pub specialisation: Option<Specialisation>,
    pub office_hour: Option<OfficeHour>,
    pub github_username: Option<GithubUsername>,
}

/// A teaching assistant contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeachingAssistant {
    pub name: Name,
    pub module_code: ModuleCode,
    pub phone: Phone,
    pub email: Email,
    pub gender: Gender,
    pub location: Location,
    pub tags: BTreeSet<Tag>,
    pub rating: Option<Rating>,
    pub github_username: Option<GithubUsername>,
}

/// Union over all contact variants.
///
/// Storage adapters and collection logic dispatch by matching on this enum
/// rather than through trait objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Person {
    Student(Student),
    Professor(Professor),
    TeachingAssistant(TeachingAssistant),
}

impl Person {
    /// The person's name value object.
    pub fn name(&self) -> &Name {
        match self {
            Self::Student(student) => &student.name,
            Self::Professor(professor) => &professor.name,
            Self::TeachingAssistant(ta) => &ta.name,
        }
    }

    /// The person's tag set.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        match self {
            Self::Student(student) => &student.tags,
            Self::Professor(professor) => &professor.tags,
            Self::TeachingAssistant(ta) => &ta.tags,
        }
    }

    /// Name-based identity: two persons are "the same" when their names are
    /// equal, regardless of other fields or variant.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name() == other.name()
    }
}

impl From<Student> for Person {
    fn from(value: Student) -> Self {
        Self::Student(value)
    }
}

impl From<Professor> for Person {
    fn from(value: Professor) -> Self {
        Self::Professor(value)
    }
}

impl From<TeachingAssistant> for Person {
    fn from(value: TeachingAssistant) -> Self {
        Self::TeachingAssistant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Person, Professor, Student};
    use crate::model::fields::{Email, Gender, Location, ModuleCode, Name, Phone};
    use crate::model::profile::Rating;
    use crate::model::tag::Tag;
    use std::collections::BTreeSet;

    fn student(name: &str, phone: &str) -> Person {
        Person::Student(Student {
            name: Name::new(name).unwrap(),
            phone: Phone::new(phone).unwrap(),
            email: Email::new("alexyeoh@example.com").unwrap(),
            gender: Gender::new("M").unwrap(),
            location: Location::new("UTown").unwrap(),
            tags: BTreeSet::new(),
        })
    }

    #[test]
    fn same_person_is_name_based() {
        let a = student("Alex Yeoh", "87438807");
        let b = student("Alex Yeoh", "99272758");
        let c = student("Bernice Yu", "87438807");

        assert!(a.is_same_person(&b));
        assert!(!a.is_same_person(&c));
        assert_ne!(a, b);
    }

    #[test]
    fn identity_crosses_variants() {
        let student = student("Wong Tin Lok", "91031282");
        let professor = Person::Professor(Professor {
            name: Name::new("Wong Tin Lok").unwrap(),
            module_code: ModuleCode::new("CS1231S").unwrap(),
            phone: Phone::new("91031282").unwrap(),
            email: Email::new("wongtk@example.com").unwrap(),
            gender: Gender::new("M").unwrap(),
            location: Location::new("COM2 LT4").unwrap(),
            tags: BTreeSet::from([Tag::new("family").unwrap()]),
            rating: Some(Rating::new("5").unwrap()),
            specialisation: None,
            office_hour: None,
            github_username: None,
        });

        assert!(student.is_same_person(&professor));
        assert_ne!(student, professor);
    }
}
