//! Trivia core: pure browsing state machine and view-model helpers.
//!
//! All state changes go through [`update`]; IO is requested through the
//! returned [`Effect`]s and its outcome is fed back as a [`Msg`].
mod effect;
mod mode;
mod model;
mod msg;
mod notice;
mod pagination;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use mode::{FetchRequest, Mode};
pub use model::{Category, CategoryId, Question, QuestionId, QuestionPage};
pub use msg::{FetchFailed, Msg};
pub use notice::{Notice, NoticeAction, LOAD_FAILED_MESSAGE};
pub use pagination::{max_page, page_entries, PageEntry, MAX_PAGE_ENTRIES, PAGE_SIZE};
pub use state::{AppState, ViewState};
pub use update::update;
pub use view_model::{AppViewModel, CategoryView, QuestionRowView};
