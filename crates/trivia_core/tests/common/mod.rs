#![allow(dead_code)]

use std::collections::BTreeMap;

use trivia_core::{update, AppState, Category, Effect, FetchRequest, Msg, Question, QuestionPage};

pub fn init_logging() {
    trivia_logging::initialize_for_tests();
}

pub fn science() -> Category {
    Category::new(3, "Science")
}

pub fn directory() -> BTreeMap<u64, Category> {
    [
        Category::new(1, "Art"),
        Category::new(2, "Geography"),
        science(),
    ]
    .into_iter()
    .map(|category| (category.id, category))
    .collect()
}

/// Questions for `page`, sized the way the server pages `total` questions.
pub fn questions_for(page: u32, total: u32) -> Vec<Question> {
    let start = (page - 1) * 10;
    let count = total.saturating_sub(start).min(10);
    (start..start + count)
        .map(|index| Question {
            id: u64::from(index) + 1,
            question: format!("Question {}", index + 1),
            answer: format!("Answer {}", index + 1),
            category: science(),
            difficulty: index % 5 + 1,
        })
        .collect()
}

pub fn list_page(page: u32, total: u32) -> QuestionPage {
    QuestionPage {
        questions: questions_for(page, total),
        total_questions: total,
        categories: Some(directory()),
        current_category: None,
    }
}

pub fn filtered_page(page: u32, total: u32, current: Option<Category>) -> QuestionPage {
    QuestionPage {
        questions: questions_for(page, total),
        total_questions: total,
        categories: None,
        current_category: current,
    }
}

/// Runs the request a `Fetch` effect asks for and feeds the response back.
pub fn complete(
    state: AppState,
    request: FetchRequest,
    response: QuestionPage,
) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FetchCompleted {
            request,
            result: Ok(response),
        },
    )
}

pub fn single_fetch(effects: &[Effect]) -> FetchRequest {
    match effects {
        [Effect::Fetch(request)] => request.clone(),
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

/// A state mounted in default mode with `total` questions loaded on page 1.
pub fn mounted(total: u32) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Mounted);
    let request = single_fetch(&effects);
    let (state, effects) = complete(state, request, list_page(1, total));
    assert!(effects.is_empty());
    state
}

/// A state in search mode for `term`, with `total` matches, on page 1.
pub fn searching(term: &str, total: u32) -> AppState {
    let state = mounted(42);
    let (state, effects) = update(state, Msg::SearchSubmitted(term.to_string()));
    let request = single_fetch(&effects);
    let (state, _) = complete(state, request, filtered_page(1, total, None));
    state
}
