use std::collections::BTreeMap;

pub type QuestionId = u64;
pub type CategoryId = u64;

/// A question category as served by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Display name; the API calls this field `type`.
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    /// Icon file the rendering layer looks up for this category, e.g. `science.svg`.
    pub fn icon_file(&self) -> String {
        format!("{}.svg", self.kind.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: Category,
    pub difficulty: u32,
}

/// One page of questions returned by any of the three read operations.
///
/// `categories` is only present for the unfiltered list; the filtered reads
/// leave the category directory alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: u32,
    pub categories: Option<BTreeMap<CategoryId, Category>>,
    pub current_category: Option<Category>,
}
