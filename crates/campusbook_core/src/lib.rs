//! Core domain and storage logic for CampusBook.
//! This crate is the single source of truth for contact validation rules
//! and the on-disk book format.

pub mod logging;
pub mod model;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::fields::{Email, Gender, InvalidFieldError, Location, ModuleCode, Name, Phone};
pub use model::person::{Person, Professor, Student, TeachingAssistant};
pub use model::profile::{GithubUsername, OfficeHour, Rating, Specialisation};
pub use model::sample::sample_persons;
pub use model::tag::Tag;
pub use storage::error::{IllegalValueError, StorageError};
pub use storage::json_store::{
    load_book, load_book_with_rule, read_book_file, save_book, write_book_file,
};
pub use storage::serialized_book::{DuplicateRule, SerializedBook};
pub use storage::serialized_person::SerializedPerson;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
