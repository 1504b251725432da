//! Parent preference records.
//!
//! Each record belongs to one student and contributes up to three kinds of
//! "statements" to the parent-satisfaction score: one for the preferred
//! teachers as a whole, one per peer preference, and one for a reported
//! learning style (see [`crate::scoring`]).

use serde::{Deserialize, Serialize};

use super::TeachingStyle;

/// Whether a named peer should share a class with the student or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerRelation {
    Together,
    Separate,
}

/// A parent-reported learning style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    Mixed,
}

impl LearningStyle {
    /// Whether a teaching style is compatible with this learning style.
    ///
    /// Fixed compatibility table:
    /// visual ↔ {visual_aids, multimedia, mixed},
    /// auditory ↔ {lecture, discussion, mixed},
    /// kinesthetic ↔ {hands_on, interactive, mixed},
    /// mixed ↔ {mixed, balanced, flexible}.
    pub fn matches(&self, style: TeachingStyle) -> bool {
        use TeachingStyle::*;
        match self {
            LearningStyle::Visual => matches!(style, VisualAids | Multimedia | Mixed),
            LearningStyle::Auditory => matches!(style, Lecture | Discussion | Mixed),
            LearningStyle::Kinesthetic => matches!(style, HandsOn | Interactive | Mixed),
            LearningStyle::Mixed => matches!(style, Mixed | Balanced | Flexible),
        }
    }
}

/// One peer preference: a peer identifier and the desired relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerPreference {
    /// The other student's identifier.
    pub peer_id: String,
    /// Desired relation to that peer.
    pub relation: PeerRelation,
}

/// All preferences recorded by one student's parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentPreference {
    /// The student this record belongs to.
    pub student_id: String,
    /// Acceptable teachers. The whole list counts as a single statement,
    /// satisfied when the assigned teacher appears in it.
    pub preferred_teachers: Vec<String>,
    /// Peer preferences; each counts as one statement.
    pub peers: Vec<PeerPreference>,
    /// Reported learning style; counts as one statement when present.
    pub learning_style: Option<LearningStyle>,
}

impl ParentPreference {
    /// Creates an empty preference record for a student.
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            preferred_teachers: Vec::new(),
            peers: Vec::new(),
            learning_style: None,
        }
    }

    /// Adds a preferred teacher.
    pub fn with_preferred_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.preferred_teachers.push(teacher_id.into());
        self
    }

    /// Adds a peer preference.
    pub fn with_peer(mut self, peer_id: impl Into<String>, relation: PeerRelation) -> Self {
        self.peers.push(PeerPreference {
            peer_id: peer_id.into(),
            relation,
        });
        self
    }

    /// Sets the reported learning style.
    pub fn with_learning_style(mut self, style: LearningStyle) -> Self {
        self.learning_style = Some(style);
        self
    }
}
