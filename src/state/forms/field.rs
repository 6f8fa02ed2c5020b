//! Question form fields and focus targets

/// The editable fields of the question form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionField {
    Title,
    Explanation,
    Tags,
}

impl QuestionField {
    pub const ALL: [QuestionField; 3] = [Self::Title, Self::Explanation, Self::Tags];

    /// Field name as used in error maps and logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Explanation => "explanation",
            Self::Tags => "tags",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Question Title *",
            Self::Explanation => "Detailed explanation of your problem *",
            Self::Tags => "Tags *",
        }
    }

    /// Help text rendered under the field
    pub fn description(&self) -> &'static str {
        match self {
            Self::Title => "Be specific and imagine you're asking a question to another person",
            Self::Explanation => {
                "Introduce the problem and expand on what you put in the title. Minimum 20 characters."
            }
            Self::Tags => "Add up to 4 tags to describe what your question is about. Enter adds a tag.",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Explanation)
    }
}

/// What currently has keyboard focus in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Title,
    Explanation,
    Tags,
    SubmitButton,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Explanation,
            Self::Explanation => Self::Tags,
            Self::Tags => Self::SubmitButton,
            Self::SubmitButton => Self::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Title => Self::SubmitButton,
            Self::Explanation => Self::Title,
            Self::Tags => Self::Explanation,
            Self::SubmitButton => Self::Tags,
        }
    }

    /// The field under focus, `None` for the submit button
    pub fn field(&self) -> Option<QuestionField> {
        match self {
            Self::Title => Some(QuestionField::Title),
            Self::Explanation => Some(QuestionField::Explanation),
            Self::Tags => Some(QuestionField::Tags),
            Self::SubmitButton => None,
        }
    }
}

impl From<QuestionField> for FormFocus {
    fn from(field: QuestionField) -> Self {
        match field {
            QuestionField::Title => Self::Title,
            QuestionField::Explanation => Self::Explanation,
            QuestionField::Tags => Self::Tags,
        }
    }
}
