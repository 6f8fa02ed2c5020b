//! Validation rules for the question form
//!
//! Pure functions of the current form values; cheap enough to run on every
//! keystroke.

use super::field::QuestionField;
use super::question_form::FormValues;
use super::tags::{MAX_TAGS, MAX_TAG_CHARS};
use std::collections::{BTreeMap, HashSet};

/// Minimum explanation length, in characters
pub const MIN_EXPLANATION_CHARS: usize = 20;

/// Per-field error messages. An empty list means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<QuestionField, Vec<String>>,
}

impl ValidationResult {
    fn push(&mut self, field: QuestionField, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    pub fn errors(&self, field: QuestionField) -> &[String] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message for a field, as shown inline under it
    pub fn first_error(&self, field: QuestionField) -> Option<&str> {
        self.errors(field).first().map(String::as_str)
    }
}

/// Validate a snapshot of the form
pub fn validate(values: &FormValues) -> ValidationResult {
    let mut result = ValidationResult::default();
    for field in QuestionField::ALL {
        result.errors.insert(field, Vec::new());
    }

    if values.title.trim().is_empty() {
        result.push(QuestionField::Title, "Title is required");
    }

    if values.explanation.chars().count() < MIN_EXPLANATION_CHARS {
        result.push(
            QuestionField::Explanation,
            format!("Explanation must be at least {MIN_EXPLANATION_CHARS} characters"),
        );
    }

    for message in validate_tags(values.tags.as_slice()) {
        result.push(QuestionField::Tags, message);
    }

    result
}

/// Rules for a tag list, independent of how it was built
pub fn validate_tags(tags: &[String]) -> Vec<String> {
    let mut messages = Vec::new();

    if tags.is_empty() {
        messages.push("Add at least one tag".to_string());
    }
    if tags.len() > MAX_TAGS {
        messages.push(format!("Add up to {MAX_TAGS} tags"));
    }
    if tags.iter().any(|t| t.trim().is_empty()) {
        messages.push("Tags cannot be empty".to_string());
    }
    if tags.iter().any(|t| t.chars().count() > MAX_TAG_CHARS) {
        messages.push(format!("Tag must be {MAX_TAG_CHARS} characters or fewer"));
    }

    let mut seen = HashSet::new();
    if !tags.iter().all(|t| seen.insert(t.as_str())) {
        messages.push("Tags must be unique".to_string());
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::tags::TagCollection;
    use pretty_assertions::assert_eq;

    fn values(title: &str, explanation: &str, tags: &[&str]) -> FormValues {
        let mut collection = TagCollection::default();
        for tag in tags {
            collection.commit(tag).unwrap();
        }
        FormValues {
            title: title.to_string(),
            explanation: explanation.to_string(),
            tags: collection,
        }
    }

    fn strings(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let v = values(
            "How do I center a div?",
            "I have tried flexbox a lot",
            &["css", "layout"],
        );
        let result = validate(&v);
        assert!(result.is_valid());
        for field in QuestionField::ALL {
            assert!(result.errors(field).is_empty());
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let result = validate(&FormValues::default());
        assert!(!result.is_valid());
        assert_eq!(result.first_error(QuestionField::Title), Some("Title is required"));
        assert_eq!(
            result.first_error(QuestionField::Explanation),
            Some("Explanation must be at least 20 characters")
        );
        assert_eq!(
            result.first_error(QuestionField::Tags),
            Some("Add at least one tag")
        );
    }

    #[test]
    fn test_whitespace_title_is_required_error() {
        let v = values("   ", "twenty characters long!", &["a"]);
        assert_eq!(
            validate(&v).errors(QuestionField::Title),
            &["Title is required".to_string()]
        );
    }

    #[test]
    fn test_explanation_boundary() {
        let nineteen = "x".repeat(19);
        let twenty = "x".repeat(20);
        assert!(!validate(&values("t", &nineteen, &["a"])).is_valid());
        assert!(validate(&values("t", &twenty, &["a"])).is_valid());
    }

    #[test]
    fn test_explanation_only_failure_blocks() {
        let v = values("Valid title", "", &["rust"]);
        let result = validate(&v);
        assert!(!result.is_valid());
        assert!(result.errors(QuestionField::Title).is_empty());
        assert!(result.errors(QuestionField::Tags).is_empty());
        assert_eq!(result.errors(QuestionField::Explanation).len(), 1);
    }

    #[test]
    fn test_validate_tags_counts() {
        assert_eq!(validate_tags(&[]), vec!["Add at least one tag".to_string()]);
        assert!(validate_tags(&strings(&["a", "b", "c", "d"])).is_empty());
        assert_eq!(
            validate_tags(&strings(&["a", "b", "c", "d", "e"])),
            vec!["Add up to 4 tags".to_string()]
        );
    }

    #[test]
    fn test_validate_tags_rejects_long_empty_and_duplicates() {
        let messages = validate_tags(&strings(&[
            "a-very-long-tag-exceeding-twenty-chars",
            " ",
            "css",
            "css",
        ]));
        assert_eq!(
            messages,
            vec![
                "Tags cannot be empty".to_string(),
                "Tag must be 20 characters or fewer".to_string(),
                "Tags must be unique".to_string(),
            ]
        );
    }
}
