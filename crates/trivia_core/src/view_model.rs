use crate::{Category, CategoryId, Mode, Notice, PageEntry, QuestionId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: Mode,
    pub page: u32,
    pub total_questions: u32,
    pub questions: Vec<QuestionRowView>,
    pub categories: Vec<CategoryView>,
    pub current_category: Option<Category>,
    /// Empty when everything fits on one page.
    pub pages: Vec<PageEntry>,
    pub notice: Option<Notice>,
    /// Question awaiting delete confirmation, if any.
    pub pending_delete: Option<QuestionId>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRowView {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category_icon: String,
    pub difficulty: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub id: CategoryId,
    pub kind: String,
    pub icon_file: String,
    pub selected: bool,
}
