//! Flat wire form of one person record.
//!
//! # Responsibility
//! - Project a validated `Person` into discriminator-tagged key/value text.
//! - Rebuild a `Person` from raw stored text, re-running every field
//!   predicate and failing fast on the first violation.
//!
//! # Invariants
//! - Serialization performs no validation; the model is valid by
//!   construction.
//! - Deserialization checks fields in declared order and reports only the
//!   first violation, as `MissingField` or `InvalidFormat`.
//! - Absent optional fields are written as the sentinel literal, never as
//!   empty string or null, so absence round-trips exactly.

use crate::model::fields::{Email, Gender, InvalidFieldError, Location, ModuleCode, Name, Phone};
use crate::model::person::{Person, Professor, Student, TeachingAssistant};
use crate::model::profile::{GithubUsername, OfficeHour, Rating, Specialisation};
use crate::model::tag::Tag;
use crate::storage::error::IllegalValueError;
use crate::storage::serialized_tag::{deserialize_tag, serialize_tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Discriminator literal for student records.
pub const TYPE_STUDENT: &str = "student";
/// Discriminator literal for professor records.
pub const TYPE_PROFESSOR: &str = "professor";
/// Discriminator literal for teaching assistant records.
pub const TYPE_TEACHING_ASSISTANT: &str = "teachingAssistant";

/// Stored literal meaning "no rating supplied".
pub const EMPTY_RATING: &str = "-";
/// Stored literal meaning "no specialisation supplied".
pub const EMPTY_SPECIALISATION: &str = "-";
/// Stored literal meaning "no office hour supplied".
pub const EMPTY_OFFICE_HOUR: &str = "-";
/// Stored literal meaning "no GitHub username supplied".
pub const EMPTY_GITHUB_USERNAME: &str = "-";

/// One stored person record.
///
/// Every field is an unvalidated raw string; each variant writes exactly its
/// declared key set and ignores the rest. The struct lives only for the
/// duration of a single load or save call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedPerson {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "moduleCode", skip_serializing_if = "Option::is_none")]
    pub module_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub tagged: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "username", skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialisation: Option<String>,
    #[serde(rename = "officeHour", skip_serializing_if = "Option::is_none")]
    pub office_hour: Option<String>,
}

impl SerializedPerson {
    /// Projects a validated person into its stored form.
    ///
    /// Pure copy of raw field text; optional profile fields write their
    /// sentinel when absent.
    pub fn from_person(person: &Person) -> Self {
        match person {
            Person::Student(student) => Self::from_student(student),
            Person::Professor(professor) => Self::from_professor(professor),
            Person::TeachingAssistant(ta) => Self::from_teaching_assistant(ta),
        }
    }

    fn from_student(student: &Student) -> Self {
        Self {
            kind: TYPE_STUDENT.to_string(),
            name: Some(student.name.as_str().to_string()),
            module_code: None,
            phone: Some(student.phone.as_str().to_string()),
            email: Some(student.email.as_str().to_string()),
            gender: Some(student.gender.as_str().to_string()),
            tagged: serialize_tags(&student.tags),
            location: Some(student.location.as_str().to_string()),
            github_username: None,
            rating: None,
            specialisation: None,
            office_hour: None,
        }
    }

    fn from_professor(professor: &Professor) -> Self {
        Self {
            kind: TYPE_PROFESSOR.to_string(),
            name: Some(professor.name.as_str().to_string()),
            module_code: Some(professor.module_code.as_str().to_string()),
            phone: Some(professor.phone.as_str().to_string()),
            email: Some(professor.email.as_str().to_string()),
            gender: Some(professor.gender.as_str().to_string()),
            tagged: serialize_tags(&professor.tags),
            location: Some(professor.location.as_str().to_string()),
            github_username: Some(
                professor
                    .github_username
                    .as_ref()
                    .map_or_else(|| EMPTY_GITHUB_USERNAME.to_string(), |v| v.as_str().to_string()),
            ),
            rating: Some(
                professor
                    .rating
                    .as_ref()
                    .map_or_else(|| EMPTY_RATING.to_string(), |v| v.as_str().to_string()),
            ),
            specialisation: Some(
                professor
                    .specialisation
                    .as_ref()
                    .map_or_else(|| EMPTY_SPECIALISATION.to_string(), |v| v.as_str().to_string()),
            ),
            office_hour: Some(
                professor
                    .office_hour
                    .as_ref()
                    .map_or_else(|| EMPTY_OFFICE_HOUR.to_string(), |v| v.as_str().to_string()),
            ),
        }
    }

    fn from_teaching_assistant(ta: &TeachingAssistant) -> Self {
        Self {
            kind: TYPE_TEACHING_ASSISTANT.to_string(),
            name: Some(ta.name.as_str().to_string()),
            module_code: Some(ta.module_code.as_str().to_string()),
            phone: Some(ta.phone.as_str().to_string()),
            email: Some(ta.email.as_str().to_string()),
            gender: Some(ta.gender.as_str().to_string()),
            tagged: serialize_tags(&ta.tags),
            location: Some(ta.location.as_str().to_string()),
            github_username: Some(
                ta.github_username
                    .as_ref()
                    .map_or_else(|| EMPTY_GITHUB_USERNAME.to_string(), |v| v.as_str().to_string()),
            ),
            rating: Some(
                ta.rating
                    .as_ref()
                    .map_or_else(|| EMPTY_RATING.to_string(), |v| v.as_str().to_string()),
            ),
            specialisation: None,
            office_hour: None,
        }
    }

    /// Rebuilds the person this record encodes.
    ///
    /// Dispatches on the `type` discriminator; an unrecognized literal is
    /// rejected before any field is looked at.
    pub fn to_person(&self) -> Result<Person, IllegalValueError> {
        match self.kind.as_str() {
            TYPE_STUDENT => self.to_student().map(Person::Student),
            TYPE_PROFESSOR => self.to_professor().map(Person::Professor),
            TYPE_TEACHING_ASSISTANT => self.to_teaching_assistant().map(Person::TeachingAssistant),
            other => Err(IllegalValueError::UnknownType(other.to_string())),
        }
    }

    fn to_student(&self) -> Result<Student, IllegalValueError> {
        let tags = self.convert_tags()?;
        Ok(Student {
            name: required(&self.name, Name::FIELD_NAME, Name::new)?,
            phone: required(&self.phone, Phone::FIELD_NAME, Phone::new)?,
            email: required(&self.email, Email::FIELD_NAME, Email::new)?,
            gender: required(&self.gender, Gender::FIELD_NAME, Gender::new)?,
            location: required(&self.location, Location::FIELD_NAME, Location::new)?,
            tags,
        })
    }

    fn to_professor(&self) -> Result<Professor, IllegalValueError> {
        let tags = self.convert_tags()?;
        Ok(Professor {
            name: required(&self.name, Name::FIELD_NAME, Name::new)?,
            phone: required(&self.phone, Phone::FIELD_NAME, Phone::new)?,
            email: required(&self.email, Email::FIELD_NAME, Email::new)?,
            gender: required(&self.gender, Gender::FIELD_NAME, Gender::new)?,
            module_code: required(&self.module_code, ModuleCode::FIELD_NAME, ModuleCode::new)?,
            location: required(&self.location, Location::FIELD_NAME, Location::new)?,
            rating: optional(&self.rating, Rating::FIELD_NAME, EMPTY_RATING, Rating::new)?,
            specialisation: optional(
                &self.specialisation,
                Specialisation::FIELD_NAME,
                EMPTY_SPECIALISATION,
                Specialisation::new,
            )?,
            office_hour: optional(
                &self.office_hour,
                OfficeHour::FIELD_NAME,
                EMPTY_OFFICE_HOUR,
                OfficeHour::new,
            )?,
            github_username: optional(
                &self.github_username,
                GithubUsername::FIELD_NAME,
                EMPTY_GITHUB_USERNAME,
                GithubUsername::new,
            )?,
            tags,
        })
    }

    fn to_teaching_assistant(&self) -> Result<TeachingAssistant, IllegalValueError> {
        let tags = self.convert_tags()?;
        Ok(TeachingAssistant {
            name: required(&self.name, Name::FIELD_NAME, Name::new)?,
            phone: required(&self.phone, Phone::FIELD_NAME, Phone::new)?,
            email: required(&self.email, Email::FIELD_NAME, Email::new)?,
            gender: required(&self.gender, Gender::FIELD_NAME, Gender::new)?,
            module_code: required(&self.module_code, ModuleCode::FIELD_NAME, ModuleCode::new)?,
            location: required(&self.location, Location::FIELD_NAME, Location::new)?,
            rating: optional(&self.rating, Rating::FIELD_NAME, EMPTY_RATING, Rating::new)?,
            github_username: optional(
                &self.github_username,
                GithubUsername::FIELD_NAME,
                EMPTY_GITHUB_USERNAME,
                GithubUsername::new,
            )?,
            tags,
        })
    }

    // Tag conversion references no other field, so it runs before the scalar
    // chain without affecting first-failure ordering.
    fn convert_tags(&self) -> Result<BTreeSet<Tag>, IllegalValueError> {
        self.tagged.iter().map(|raw| deserialize_tag(raw)).collect()
    }
}

/// Converts one mandatory raw field.
///
/// Absent raw value -> `MissingField`; predicate failure inside `construct`
/// -> `InvalidFormat` with that field's constraint message.
fn required<'a, T>(
    raw: &'a Option<String>,
    field: &'static str,
    construct: impl FnOnce(&'a str) -> Result<T, InvalidFieldError>,
) -> Result<T, IllegalValueError> {
    let value = raw
        .as_deref()
        .ok_or(IllegalValueError::MissingField(field))?;
    Ok(construct(value)?)
}

/// Converts one optional raw field.
///
/// Absent raw value -> `MissingField` (the writer always emits the
/// sentinel); sentinel -> `None`, bypassing the predicate; anything else is
/// validated like a mandatory field.
fn optional<'a, T>(
    raw: &'a Option<String>,
    field: &'static str,
    sentinel: &str,
    construct: impl FnOnce(&'a str) -> Result<T, InvalidFieldError>,
) -> Result<Option<T>, IllegalValueError> {
    let value = raw
        .as_deref()
        .ok_or(IllegalValueError::MissingField(field))?;
    if value == sentinel {
        return Ok(None);
    }
    Ok(Some(construct(value)?))
}

fn serialize_tags(tags: &BTreeSet<Tag>) -> Vec<String> {
    tags.iter().map(serialize_tag).collect()
}
