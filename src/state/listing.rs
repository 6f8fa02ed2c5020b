//! Home page listing: search, filter and selection

use super::Question;
use serde::{Deserialize, Serialize};

/// Home page filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeFilter {
    #[default]
    Newest,
    Recommended,
    Frequent,
    Unanswered,
}

impl HomeFilter {
    pub const ALL: [HomeFilter; 4] = [
        Self::Newest,
        Self::Recommended,
        Self::Frequent,
        Self::Unanswered,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Newest => Self::Recommended,
            Self::Recommended => Self::Frequent,
            Self::Frequent => Self::Unanswered,
            Self::Unanswered => Self::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Recommended => "Recommended",
            Self::Frequent => "Frequent",
            Self::Unanswered => "Unanswered",
        }
    }

    /// Value sent to the question service
    pub fn value(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Recommended => "recommended",
            Self::Frequent => "frequent",
            Self::Unanswered => "unanswered",
        }
    }
}

/// Parameters for listing questions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionQuery {
    pub search_query: String,
    pub filter: HomeFilter,
}

#[derive(Debug, Default)]
pub struct Listing {
    pub questions: Vec<Question>,
    pub search_query: String,
    pub search_focused: bool,
    pub filter: HomeFilter,
    pub selected_index: usize,
}

impl Listing {
    pub fn query(&self) -> QuestionQuery {
        QuestionQuery {
            search_query: self.search_query.trim().to_string(),
            filter: self.filter,
        }
    }

    pub fn set_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.clamp_selection();
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected_index = 0;
    }

    pub fn search_push(&mut self, c: char) {
        self.search_query.push(c);
        self.selected_index = 0;
    }

    pub fn search_pop(&mut self) {
        self.search_query.pop();
        self.selected_index = 0;
    }

    /// Questions matching the search box, ordered by the active filter
    pub fn visible(&self) -> Vec<&Question> {
        let needle = self.search_query.trim().to_lowercase();
        let mut questions: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| {
                needle.is_empty()
                    || q.title.to_lowercase().contains(&needle)
                    || q.tags.iter().any(|t| t.name.to_lowercase() == needle)
            })
            .filter(|q| self.filter != HomeFilter::Unanswered || q.answer_count == 0)
            .collect();

        match self.filter {
            HomeFilter::Newest | HomeFilter::Unanswered => {
                questions.sort_by(|a, b| b.created_at.cmp(&a.created_at))
            }
            HomeFilter::Recommended => questions.sort_by(|a, b| b.upvotes.cmp(&a.upvotes)),
            HomeFilter::Frequent => questions.sort_by(|a, b| b.views.cmp(&a.views)),
        }

        questions
    }

    pub fn move_selection_down(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}
