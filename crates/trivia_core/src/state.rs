use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, CategoryView, QuestionRowView};
use crate::{
    max_page, page_entries, Category, CategoryId, FetchRequest, Mode, Notice, Question,
    QuestionId, QuestionPage,
};

/// What the question list currently shows.
///
/// Only changed from [`crate::update`]; fields carried by a response are
/// replaced wholesale, everything else is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    page: u32,
    questions: Vec<Question>,
    total_questions: u32,
    categories: BTreeMap<CategoryId, Category>,
    current_category: Option<Category>,
    mode: Mode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            questions: Vec::new(),
            total_questions: 0,
            categories: BTreeMap::new(),
            current_category: None,
            mode: Mode::Default,
        }
    }
}

impl ViewState {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    pub fn categories(&self) -> &BTreeMap<CategoryId, Category> {
        &self.categories
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.current_category.as_ref()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn max_page(&self) -> u32 {
        max_page(self.total_questions)
    }

    /// The request a refresh of the current mode and page would issue.
    pub fn bound_request(&self) -> FetchRequest {
        self.mode.request_for_page(self.page)
    }

    /// Switches mode and resets the page. Returns the request for page 1.
    pub(crate) fn switch_mode(&mut self, mode: Mode) -> FetchRequest {
        self.mode = mode;
        self.page = 1;
        self.bound_request()
    }

    /// Binds search mode after a successful search response.
    pub(crate) fn enter_search_mode(&mut self, term: String, page: u32) {
        self.mode = Mode::Search(term);
        self.page = page;
    }

    /// Adopts the page of a successful response, provided the response
    /// belongs to the mode that is currently bound.
    pub(crate) fn commit_page(&mut self, request: &FetchRequest) {
        let page = request.page();
        if self.mode.request_for_page(page) == *request {
            self.page = page;
        }
    }

    pub(crate) fn apply_page(&mut self, response: QuestionPage) {
        self.questions = response.questions;
        self.total_questions = response.total_questions;
        if let Some(categories) = response.categories {
            self.categories = categories;
        }
        self.current_category = response.current_category;
    }

    /// Pulls `page` back into `[1, max_page]` after a load that shrank the list.
    ///
    /// Returns the request for the clamped page when a reload is needed.
    pub(crate) fn clamp_page(&mut self) -> Option<FetchRequest> {
        let max = self.max_page();
        if max >= 1 && self.page > max {
            self.page = max;
            Some(self.bound_request())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    view_state: ViewState,
    notice: Option<Notice>,
    pending_delete: Option<QuestionId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn pending_delete(&self) -> Option<QuestionId> {
        self.pending_delete
    }

    pub fn view(&self) -> AppViewModel {
        let view_state = &self.view_state;
        AppViewModel {
            mode: view_state.mode.clone(),
            page: view_state.page,
            total_questions: view_state.total_questions,
            questions: view_state
                .questions
                .iter()
                .map(|question| QuestionRowView {
                    id: question.id,
                    question: question.question.clone(),
                    answer: question.answer.clone(),
                    category_icon: question.category.icon_file(),
                    difficulty: question.difficulty,
                })
                .collect(),
            categories: view_state
                .categories
                .values()
                .map(|category| CategoryView {
                    id: category.id,
                    kind: category.kind.clone(),
                    icon_file: category.icon_file(),
                    selected: view_state.mode == Mode::ByCategory(category.id),
                })
                .collect(),
            current_category: view_state.current_category.clone(),
            pages: page_entries(view_state.total_questions, view_state.page),
            notice: self.notice.clone(),
            pending_delete: self.pending_delete,
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn view_state_mut(&mut self) -> &mut ViewState {
        self.dirty = true;
        &mut self.view_state
    }

    pub(crate) fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
        self.dirty = true;
    }

    pub(crate) fn set_pending_delete(&mut self, question_id: Option<QuestionId>) {
        self.pending_delete = question_id;
        self.dirty = true;
    }
}
