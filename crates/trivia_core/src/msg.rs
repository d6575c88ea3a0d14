use thiserror::Error;

/// Any transport or HTTP-level failure. No finer distinction is made here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("request to the question API failed")]
pub struct FetchFailed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view was mounted and should load its first page.
    Mounted,
    /// User clicked the "Categories" header to go back to all questions.
    CategoriesClicked,
    /// User clicked a category in the directory.
    CategorySelected(crate::CategoryId),
    /// The search widget submitted a term.
    SearchSubmitted(String),
    /// User clicked a page number.
    PageSelected(u32),
    /// A read request finished.
    FetchCompleted {
        request: crate::FetchRequest,
        result: Result<crate::QuestionPage, FetchFailed>,
    },
    /// User asked to delete a question; confirmation is still pending.
    DeleteClicked(crate::QuestionId),
    /// User confirmed the pending delete.
    DeleteConfirmed,
    /// User cancelled the pending delete.
    DeleteCancelled,
    /// A delete request finished.
    DeleteCompleted {
        question_id: crate::QuestionId,
        result: Result<(), FetchFailed>,
    },
    /// User acknowledged the current notice.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
