//! Storage adapter layer.
//!
//! # Responsibility
//! - Convert validated person records to and from the flat,
//!   discriminator-tagged JSON book format.
//! - Re-run every domain predicate on load so invalid stored state is
//!   rejected instead of masked.
//!
//! # Invariants
//! - Serialization never validates; deserialization always does.
//! - Field failures are fail-fast: the first violation in declared order is
//!   the one reported.
//! - Optional fields round-trip absence through sentinel literals that are
//!   never valid field values.

pub mod error;
pub mod json_store;
pub mod serialized_book;
pub mod serialized_person;
pub mod serialized_tag;
