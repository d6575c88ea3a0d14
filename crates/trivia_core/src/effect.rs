use crate::{FetchRequest, QuestionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a read against the question API.
    Fetch(FetchRequest),
    /// Ask the user to confirm deleting a question.
    ConfirmDelete { question_id: QuestionId },
    /// Issue the delete request; only emitted after confirmation.
    DeleteQuestion { question_id: QuestionId },
}
