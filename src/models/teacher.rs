//! Teacher model.

use serde::{Deserialize, Serialize};

/// How a teacher runs their classroom.
///
/// The fixed category set matched against parent-reported learning styles
/// (see [`crate::models::LearningStyle::matches`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeachingStyle {
    VisualAids,
    Multimedia,
    Lecture,
    Discussion,
    HandsOn,
    Interactive,
    Mixed,
    Balanced,
    Flexible,
}

/// A teacher who can be bound to exactly one class per assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Teaching style category.
    pub style: TeachingStyle,
}

impl Teacher {
    /// Creates a teacher.
    pub fn new(id: impl Into<String>, style: TeachingStyle) -> Self {
        Self {
            id: id.into(),
            style,
        }
    }
}
