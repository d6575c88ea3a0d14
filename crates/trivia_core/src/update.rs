use trivia_logging::{trivia_debug, trivia_info, trivia_trace};

use crate::{AppState, Effect, FetchRequest, Mode, Msg, Notice, NoticeAction};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted | Msg::CategoriesClicked => enter_mode(&mut state, Mode::Default),
        Msg::CategorySelected(category_id) => enter_mode(&mut state, Mode::ByCategory(category_id)),
        Msg::SearchSubmitted(term) => {
            // Blank terms would be read by the server as a question to create.
            if term.trim().is_empty() {
                trivia_debug!("ignoring blank search term");
                return (state, Vec::new());
            }
            // Search mode is entered once the response arrives, see FetchCompleted.
            vec![Effect::Fetch(FetchRequest::Search { term, page: 1 })]
        }
        Msg::PageSelected(page) => {
            let max = state.view_state().max_page();
            if page == 0 || page > max {
                trivia_debug!("ignoring page {} outside 1..={}", page, max);
                return (state, Vec::new());
            }
            // The page is committed once the response arrives, see FetchCompleted.
            vec![Effect::Fetch(state.view_state().mode().request_for_page(page))]
        }
        Msg::FetchCompleted { request, result } => match result {
            Ok(response) => {
                let view_state = state.view_state_mut();
                view_state.apply_page(response);
                match request {
                    FetchRequest::Search { term, page } => {
                        if view_state.mode() != &Mode::Search(term.clone()) {
                            trivia_info!("entering search mode for {:?}", term);
                        }
                        view_state.enter_search_mode(term, page);
                    }
                    other => view_state.commit_page(&other),
                }
                view_state
                    .clamp_page()
                    .map(Effect::Fetch)
                    .into_iter()
                    .collect()
            }
            Err(err) => {
                trivia_debug!("fetch {:?} failed: {}", request, err);
                state.set_notice(Some(Notice::fetch_failed(NoticeAction::LoadQuestions)));
                Vec::new()
            }
        },
        Msg::DeleteClicked(question_id) => {
            state.set_pending_delete(Some(question_id));
            vec![Effect::ConfirmDelete { question_id }]
        }
        Msg::DeleteConfirmed => match state.pending_delete() {
            Some(question_id) => {
                state.set_pending_delete(None);
                vec![Effect::DeleteQuestion { question_id }]
            }
            None => Vec::new(),
        },
        Msg::DeleteCancelled => {
            if state.pending_delete().is_some() {
                state.set_pending_delete(None);
            }
            Vec::new()
        }
        Msg::DeleteCompleted {
            question_id,
            result,
        } => match result {
            Ok(()) => {
                let request = state.view_state().bound_request();
                trivia_debug!("question {} deleted, reloading {:?}", question_id, request);
                vec![Effect::Fetch(request)]
            }
            Err(err) => {
                trivia_debug!("delete of question {} failed: {}", question_id, err);
                state.set_notice(Some(Notice::fetch_failed(NoticeAction::DeleteQuestion)));
                Vec::new()
            }
        },
        Msg::NoticeDismissed => {
            if state.notice().is_some() {
                state.set_notice(None);
            }
            Vec::new()
        }
        Msg::NoOp => {
            trivia_trace!("no-op message");
            Vec::new()
        }
    };

    (state, effects)
}

fn enter_mode(state: &mut AppState, mode: Mode) -> Vec<Effect> {
    trivia_info!("entering {:?} mode", mode);
    let request = state.view_state_mut().switch_mode(mode);
    vec![Effect::Fetch(request)]
}
