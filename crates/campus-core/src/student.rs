//! Student records.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::id::RecordId;
use crate::record::Record;

/// A student enrolled in the e-learning system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
}

impl Student {
    pub fn new(id: i64, name: &str) -> Self {
        Student {
            id: RecordId(id),
            name: name.to_string(),
        }
    }
}

/// Body of `POST /students`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StudentDraft {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

/// Body of `PUT /students/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPatch {
    pub name: Option<String>,
}

impl Record for Student {
    const KIND: &'static str = "Student";
    const REQUIRED: &'static [&'static str] = &["name"];

    type Draft = StudentDraft;
    type Patch = StudentPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn supplied_id(draft: &StudentDraft) -> Option<RecordId> {
        draft.id.as_ref().and_then(RecordId::from_json)
    }

    fn from_draft(id: RecordId, draft: StudentDraft) -> Self {
        Student {
            id,
            name: draft.name.unwrap_or_default(),
        }
    }

    fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}
