//! Form rendering module
//!
//! - `field_renderer`: bordered field with description and validation message
//! - `question_form`: the ask-a-question page

mod field_renderer;
mod question_form;

pub use question_form::draw_question_form;
