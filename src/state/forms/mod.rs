//! Ask-a-question form domain layer
//!
//! - `field`: field identities and focus order
//! - `tags`: tag collection and its invariants
//! - `validation`: pure validation rules
//! - `question_form`: form state and event reducer
//! - `submission`: request building and in-flight tracking

mod field;
mod question_form;
mod submission;
mod tags;
mod validation;

pub use field::{FormFocus, QuestionField};
pub use question_form::{FormPhase, QuestionForm};
#[cfg(test)]
pub use question_form::FormEvent;
pub use submission::{SubmissionContext, SubmissionCoordinator, SubmissionRequest};
pub use tags::MAX_TAGS;
