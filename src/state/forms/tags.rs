//! Tag collection for a single question form session
//!
//! Owns the ordered tag list and enforces its invariants: tags are unique
//! (case-sensitive), non-empty after trimming, at most [`MAX_TAG_CHARS`]
//! characters long, and there are never more than [`MAX_TAGS`] of them.
//! The collection knows nothing about input widgets; callers clear their own
//! input buffer when [`TagCollection::commit`] reports [`TagCommit::Added`].

use thiserror::Error;

/// Maximum number of tags on a question
pub const MAX_TAGS: usize = 4;

/// Maximum length of a single tag, in characters
pub const MAX_TAG_CHARS: usize = 20;

/// Outcome of a successful commit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCommit {
    /// The tag was appended
    Added,
    /// The tag was already present; nothing changed
    Duplicate,
    /// The input was blank; callers treat this as a validation trigger
    Empty,
}

/// Rejected tag commit. The attempted tag is never consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("Tag must be {max} characters or fewer")]
    TooLong { max: usize },
    #[error("Add up to {max} tags")]
    LimitReached { max: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCollection {
    tags: Vec<String>,
}

impl TagCollection {
    /// Try to add a raw input string as a tag
    pub fn commit(&mut self, raw: &str) -> Result<TagCommit, TagError> {
        let tag = raw.trim();

        if tag.is_empty() {
            return Ok(TagCommit::Empty);
        }

        if tag.chars().count() > MAX_TAG_CHARS {
            return Err(TagError::TooLong { max: MAX_TAG_CHARS });
        }

        if self.contains(tag) {
            return Ok(TagCommit::Duplicate);
        }

        if self.is_full() {
            return Err(TagError::LimitReached { max: MAX_TAGS });
        }

        self.tags.push(tag.to_string());
        Ok(TagCommit::Added)
    }

    /// Remove a tag. Absent tags are ignored.
    pub fn remove(&mut self, tag: &str) {
        if let Some(index) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(index);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= MAX_TAGS
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.tags.last().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}
