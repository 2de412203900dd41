//! In-memory ordered collection of records.
//!
//! [`Collection`] owns a `Vec` of records and implements the four CRUD
//! operations behind the HTTP handlers. It has no interior mutability; the
//! server serializes access by wrapping each collection in a mutex.

use validator::Validate;

use crate::error::CoreError;
use crate::id::RecordId;
use crate::record::Record;

/// An ordered, in-memory sequence of records with unique ids.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Collection {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding `records` in the given order.
    ///
    /// The caller is responsible for the ids being unique.
    pub fn with_records(records: Vec<R>) -> Self {
        Collection { records }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// One greater than the largest id present, or 1 when empty.
    pub fn next_id(&self) -> Result<RecordId, CoreError> {
        let max = self
            .records
            .iter()
            .map(|record| record.id().0)
            .max()
            .unwrap_or(0);
        max.checked_add(1)
            .map(RecordId)
            .ok_or(CoreError::IdExhausted { kind: R::KIND })
    }

    /// Validates `draft`, assigns an id and appends the new record.
    ///
    /// A usable caller-supplied id wins over auto-increment but must not
    /// collide with an existing record.
    pub fn create(&mut self, draft: R::Draft) -> Result<R, CoreError> {
        if let Err(errors) = draft.validate() {
            let fields: Vec<&'static str> = R::REQUIRED
                .iter()
                .copied()
                .filter(|field| errors.errors().contains_key(*field))
                .collect();
            return Err(CoreError::MissingFields {
                kind: R::KIND,
                fields: if fields.is_empty() {
                    R::REQUIRED.to_vec()
                } else {
                    fields
                },
                errors,
            });
        }

        let id = match R::supplied_id(&draft) {
            Some(id) if self.get(id).is_some() => {
                return Err(CoreError::DuplicateId { kind: R::KIND, id });
            }
            Some(id) => id,
            None => self.next_id()?,
        };

        let record = R::from_draft(id, draft);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Merges `patch` into the record with `id`, keeping its id and position.
    pub fn update(&mut self, id: RecordId, patch: R::Patch) -> Result<R, CoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(CoreError::NotFound { kind: R::KIND, id })?;
        record.apply(patch);
        Ok(record.clone())
    }

    /// Removes and returns the record with `id`.
    pub fn delete(&mut self, id: RecordId) -> Result<R, CoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(CoreError::NotFound { kind: R::KIND, id })?;
        Ok(self.records.remove(index))
    }
}
