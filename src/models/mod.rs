//! Domain data model: students, teachers, preferences, surveys, weights,
//! and the assignment representation the search operates on.

mod assignment;
mod preference;
mod student;
mod survey;
mod teacher;
mod weights;

pub use assignment::{ClassAssignment, ClassGroup};
pub use preference::{LearningStyle, ParentPreference, PeerPreference, PeerRelation};
pub use student::{Student, LEVEL_MAX, LEVEL_MIN};
pub use survey::{PairRelation, SpecialConsideration, StudentPair, TeacherSurvey};
pub use teacher::{Teacher, TeachingStyle};
pub use weights::Weights;
