//! Course records.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::id::RecordId;
use crate::record::Record;

/// A course offered by the e-learning catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    pub description: String,
}

impl Course {
    pub fn new(id: i64, title: &str, description: &str) -> Self {
        Course {
            id: RecordId(id),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Body of `POST /courses`.
///
/// `id` stays untyped: any JSON value is accepted and only a usable integer
/// is honored (see [`RecordId::from_json`]).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CourseDraft {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
}

/// Body of `PUT /courses/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Record for Course {
    const KIND: &'static str = "Course";
    const REQUIRED: &'static [&'static str] = &["title", "description"];

    type Draft = CourseDraft;
    type Patch = CoursePatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn supplied_id(draft: &CourseDraft) -> Option<RecordId> {
        draft.id.as_ref().and_then(RecordId::from_json)
    }

    fn from_draft(id: RecordId, draft: CourseDraft) -> Self {
        Course {
            id,
            title: draft.title.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
        }
    }

    fn apply(&mut self, patch: CoursePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}
