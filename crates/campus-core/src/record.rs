//! The [`Record`] trait shared by every collection element.
//!
//! A record type names its draft (create body) and patch (update body)
//! shapes. [`Collection`](crate::collection::Collection) is written once
//! against this trait and serves both courses and students.

use serde::Serialize;
use validator::Validate;

use crate::id::RecordId;

/// An entity stored in a [`Collection`](crate::collection::Collection).
pub trait Record: Clone + Serialize {
    /// Capitalized kind used in messages, e.g. `"Course"`.
    const KIND: &'static str;

    /// Descriptive fields a draft must carry, in the order they are reported.
    const REQUIRED: &'static [&'static str];

    /// Create-request body before an id is assigned.
    type Draft: Validate;

    /// Update-request body; every field optional.
    type Patch;

    /// Returns the record's identifier.
    fn id(&self) -> RecordId;

    /// The id the caller asked for, if it is usable.
    fn supplied_id(draft: &Self::Draft) -> Option<RecordId>;

    /// Builds the stored record from a validated draft.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Overwrites the fields present in `patch`. The id is never touched.
    fn apply(&mut self, patch: Self::Patch);
}
