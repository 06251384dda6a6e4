//! Domain model for campus contacts.
//!
//! # Responsibility
//! - Define self-validating field value objects and the person variants
//!   composed from them.
//! - Keep all format rules in one place so storage adapters and UI layers
//!   share exactly one notion of validity.
//!
//! # Invariants
//! - Every constructed model value has already passed its field predicates.
//! - Optional profile attributes are `Option`s in memory; storage sentinels
//!   stay at the storage boundary.

pub mod fields;
pub mod person;
pub mod profile;
pub mod sample;
pub mod tag;
