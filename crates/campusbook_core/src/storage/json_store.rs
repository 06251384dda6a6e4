//! Load/save entry points for the JSON book format.
//!
//! # Responsibility
//! - Read and write the whole contact book over any byte stream.
//! - Provide path-based helpers with structured logging events.
//!
//! # Invariants
//! - File handles are scoped; every exit path, including validation
//!   failure, releases the handle.
//! - A failed load never returns a partial person list.

use crate::model::person::Person;
use crate::storage::error::StorageError;
use crate::storage::serialized_book::{DuplicateRule, SerializedBook};
use log::{error, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

/// Loads a contact book from a reader using the default duplicate rule.
pub fn load_book(reader: impl Read) -> Result<Vec<Person>, StorageError> {
    load_book_with_rule(reader, DuplicateRule::default())
}

/// Loads a contact book from a reader with an explicit duplicate rule.
pub fn load_book_with_rule(
    reader: impl Read,
    rule: DuplicateRule,
) -> Result<Vec<Person>, StorageError> {
    let book: SerializedBook = serde_json::from_reader(reader)?;
    Ok(book.to_persons(rule)?)
}

/// Saves a contact book to a writer as pretty-printed JSON.
///
/// Always succeeds in producing valid output for well-formed persons; the
/// only failure sources are the medium itself.
pub fn save_book(persons: &[Person], mut writer: impl Write) -> Result<(), StorageError> {
    let book = SerializedBook::from_persons(persons);
    serde_json::to_writer_pretty(&mut writer, &book)?;
    writer.flush()?;
    Ok(())
}

/// Loads a contact book from a file path.
///
/// # Side effects
/// - Emits `book_load` logging events with duration and status.
pub fn read_book_file(path: impl AsRef<Path>) -> Result<Vec<Person>, StorageError> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=book_load module=storage status=start path={}", path.display());

    let result = File::open(path)
        .map_err(StorageError::from)
        .and_then(|file| load_book(BufReader::new(file)));

    match &result {
        Ok(persons) => {
            info!(
                "event=book_load module=storage status=ok duration_ms={} persons={}",
                started_at.elapsed().as_millis(),
                persons.len()
            );
        }
        Err(err) => {
            error!(
                "event=book_load module=storage status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                error_code(err),
                err
            );
        }
    }

    result
}

/// Saves a contact book to a file path, creating parent directories.
///
/// # Side effects
/// - Emits `book_save` logging events with duration and status.
pub fn write_book_file(persons: &[Person], path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=book_save module=storage status=start path={}", path.display());

    let result = create_book_file(path)
        .and_then(|file| save_book(persons, BufWriter::new(file)));

    match &result {
        Ok(()) => {
            info!(
                "event=book_save module=storage status=ok duration_ms={} persons={}",
                started_at.elapsed().as_millis(),
                persons.len()
            );
        }
        Err(err) => {
            error!(
                "event=book_save module=storage status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                error_code(err),
                err
            );
        }
    }

    result
}

fn create_book_file(path: &Path) -> Result<File, StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}

fn error_code(err: &StorageError) -> &'static str {
    match err {
        StorageError::Io(_) => "book_io_failed",
        StorageError::Format(_) => "book_format_invalid",
        StorageError::IllegalValue(_) => "book_value_illegal",
    }
}
