//! Ask-a-question form state
//!
//! `QuestionForm` is the single owner of the form values and the per-field
//! error map. All value changes go through [`QuestionForm::apply`]; the
//! keyboard helpers translate key presses into [`FormEvent`]s.

use super::field::{FormFocus, QuestionField};
use super::tags::{TagCollection, TagCommit, TagError};
use super::validation::{validate, ValidationResult};
use std::collections::BTreeMap;

/// Values collected by the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub explanation: String,
    pub tags: TagCollection,
}

/// State transitions of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    TitleChanged(String),
    ExplanationChanged(String),
    /// Enter pressed in the tag input with its current contents
    TagKeyCommit(String),
    TagRemoved(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitting,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionForm {
    values: FormValues,
    /// Text typed into the tag input but not committed yet
    tag_input: String,
    field_errors: BTreeMap<QuestionField, String>,
    phase: FormPhase,
    focus: FormFocus,
    /// Once a submit was attempted, edits re-validate the edited field
    submit_attempted: bool,
}

impl QuestionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn field_error(&self, field: QuestionField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn set_field_error(&mut self, field: QuestionField, message: impl Into<String>) {
        self.field_errors.insert(field, message.into());
    }

    pub fn clear_field_error(&mut self, field: QuestionField) {
        self.field_errors.remove(&field);
    }

    /// Apply one event to the form
    ///
    /// Only tag commits can fail; the error is also recorded on the `tags`
    /// field so it shows inline.
    pub fn apply(&mut self, event: FormEvent) -> Result<(), TagError> {
        match event {
            FormEvent::TitleChanged(title) => {
                self.values.title = title;
                self.revalidate(QuestionField::Title);
            }
            FormEvent::ExplanationChanged(explanation) => {
                self.values.explanation = explanation;
                self.revalidate(QuestionField::Explanation);
            }
            FormEvent::TagKeyCommit(raw) => return self.commit_tag(&raw),
            FormEvent::TagRemoved(tag) => {
                self.values.tags.remove(&tag);
                self.revalidate(QuestionField::Tags);
            }
        }
        Ok(())
    }

    fn commit_tag(&mut self, raw: &str) -> Result<(), TagError> {
        match self.values.tags.commit(raw) {
            Ok(TagCommit::Added) => {
                self.tag_input.clear();
                self.clear_field_error(QuestionField::Tags);
                Ok(())
            }
            Ok(TagCommit::Duplicate) => Ok(()),
            Ok(TagCommit::Empty) => {
                self.trigger_validation();
                Ok(())
            }
            Err(err) => {
                tracing::debug!("Rejected tag {:?}: {err}", raw.trim());
                self.set_field_error(QuestionField::Tags, err.to_string());
                Err(err)
            }
        }
    }

    /// Validate every field and refresh the inline errors
    pub fn trigger_validation(&mut self) -> ValidationResult {
        let result = validate(&self.values);
        for field in QuestionField::ALL {
            match result.first_error(field) {
                Some(message) => self.set_field_error(field, message),
                None => self.clear_field_error(field),
            }
        }
        result
    }

    fn revalidate(&mut self, field: QuestionField) {
        if !self.submit_attempted {
            return;
        }
        let result = validate(&self.values);
        match result.first_error(field) {
            Some(message) => self.set_field_error(field, message),
            None => self.clear_field_error(field),
        }
    }

    /// Validate for submission
    ///
    /// Returns a snapshot of the values when every field passes. Refuses
    /// while a submission is in flight.
    pub fn prepare_submit(&mut self) -> Option<FormValues> {
        if self.is_submitting() {
            return None;
        }

        self.submit_attempted = true;
        self.phase = FormPhase::Validating;
        let result = self.trigger_validation();
        self.phase = FormPhase::Editing;

        if result.is_valid() {
            Some(self.values.clone())
        } else {
            tracing::debug!(
                "Question form invalid: {:?}",
                self.field_errors.keys().map(|f| f.name()).collect::<Vec<_>>()
            );
            // Move to the first field that needs fixing
            if let Some(field) = self.field_errors.keys().next().copied() {
                self.set_focus(FormFocus::from(field));
            }
            None
        }
    }

    pub fn mark_submitting(&mut self) {
        self.phase = FormPhase::Submitting;
    }

    pub fn mark_editing(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormFocus::Title => {
                let mut title = self.values.title.clone();
                title.push(c);
                let _ = self.apply(FormEvent::TitleChanged(title));
            }
            FormFocus::Explanation => {
                let mut explanation = self.values.explanation.clone();
                explanation.push(c);
                let _ = self.apply(FormEvent::ExplanationChanged(explanation));
            }
            FormFocus::Tags => self.tag_input.push(c),
            FormFocus::SubmitButton => {}
        }
    }

    /// Delete backwards in the focused field
    ///
    /// In the tag input, backspace on an empty buffer removes the last tag.
    pub fn backspace(&mut self) {
        match self.focus {
            FormFocus::Title => {
                let mut title = self.values.title.clone();
                if title.pop().is_some() {
                    let _ = self.apply(FormEvent::TitleChanged(title));
                }
            }
            FormFocus::Explanation => {
                let mut explanation = self.values.explanation.clone();
                if explanation.pop().is_some() {
                    let _ = self.apply(FormEvent::ExplanationChanged(explanation));
                }
            }
            FormFocus::Tags => {
                if self.tag_input.pop().is_none() {
                    if let Some(last) = self.values.tags.last().map(str::to_string) {
                        let _ = self.apply(FormEvent::TagRemoved(last));
                    }
                }
            }
            FormFocus::SubmitButton => {}
        }
    }

    pub fn newline(&mut self) {
        if self.focus == FormFocus::Explanation {
            let mut explanation = self.values.explanation.clone();
            explanation.push('\n');
            let _ = self.apply(FormEvent::ExplanationChanged(explanation));
        }
    }

    /// Enter in the tag input commits its contents
    pub fn commit_tag_input(&mut self) -> Result<(), TagError> {
        let raw = self.tag_input.clone();
        self.apply(FormEvent::TagKeyCommit(raw))
    }
}
