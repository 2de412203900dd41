//! Record identifier newtype.
//!
//! [`RecordId`] wraps the integer identifier shared by courses and students.
//! It serializes as a bare JSON number so records keep the flat
//! `{"id": 1, ...}` shape on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifier of a record, unique within one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Interprets a caller-supplied JSON id.
    ///
    /// Only non-zero integral numbers are accepted. `2.0` counts as integral,
    /// `2.5`, strings, booleans and `0` do not and yield `None`, which makes
    /// the collection fall back to auto-increment.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let serde_json::Value::Number(number) = value else {
            return None;
        };
        let id = match number.as_i64() {
            Some(id) => id,
            None => {
                let float = number.as_f64()?;
                if float.fract() != 0.0 || float < i64::MIN as f64 || float >= i64::MAX as f64 {
                    return None;
                }
                float as i64
            }
        };
        (id != 0).then_some(RecordId(id))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id)
    }
}
