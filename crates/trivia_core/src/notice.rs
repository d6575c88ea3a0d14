pub const LOAD_FAILED_MESSAGE: &str = "Unable to load questions. Please try your request again";

/// Which user action a notice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    LoadQuestions,
    DeleteQuestion,
}

/// A failure the presentation layer should show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub action: NoticeAction,
    pub message: String,
}

impl Notice {
    pub fn fetch_failed(action: NoticeAction) -> Self {
        Self {
            action,
            message: LOAD_FAILED_MESSAGE.to_string(),
        }
    }
}
