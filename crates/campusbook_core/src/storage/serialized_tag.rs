//! Tag wire adapter.
//!
//! Tags serialize as bare strings inside the record's `tagged` array; the
//! adapter is an identity copy outward and a validating wrap inward.

use crate::model::tag::Tag;
use crate::storage::error::IllegalValueError;

/// Projects a tag to its serialized form.
pub fn serialize_tag(tag: &Tag) -> String {
    tag.as_str().to_string()
}

/// Reconstructs a tag from its serialized form, validating the name.
pub fn deserialize_tag(raw: &str) -> Result<Tag, IllegalValueError> {
    Ok(Tag::new(raw)?)
}
