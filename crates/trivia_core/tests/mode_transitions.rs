mod common;

use common::{
    complete, filtered_page, init_logging, list_page, mounted, science, searching, single_fetch,
};
use pretty_assertions::assert_eq;
use trivia_core::{update, AppState, Effect, FetchFailed, FetchRequest, Mode, Msg, PageEntry};

#[test]
fn mount_loads_first_page_in_default_mode() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted);

    assert_eq!(effects, vec![Effect::Fetch(FetchRequest::List { page: 1 })]);
    assert_eq!(state.view_state().mode(), &Mode::Default);
    assert_eq!(state.view_state().page(), 1);
    assert!(state.view_state().questions().is_empty());
}

#[test]
fn mount_with_25_questions_shows_three_pages() {
    init_logging();
    let state = mounted(25);
    let view = state.view();

    assert_eq!(view.questions.len(), 10);
    assert_eq!(
        view.pages,
        vec![
            PageEntry {
                number: 1,
                active: true
            },
            PageEntry {
                number: 2,
                active: false
            },
            PageEntry {
                number: 3,
                active: false
            },
        ]
    );
    assert_eq!(view.categories.len(), 3);
}

#[test]
fn category_click_switches_mode_and_keeps_directory() {
    init_logging();
    let state = mounted(25);
    let directory_before = state.view_state().categories().clone();

    let (state, effects) = update(state, Msg::PageSelected(3));
    let (state, _) = complete(state, single_fetch(&effects), list_page(3, 25));
    assert_eq!(state.view_state().page(), 3);

    let (state, effects) = update(state, Msg::CategorySelected(3));
    assert_eq!(
        effects,
        vec![Effect::Fetch(FetchRequest::ByCategory {
            category_id: 3,
            page: 1
        })]
    );
    assert_eq!(state.view_state().mode(), &Mode::ByCategory(3));
    assert_eq!(state.view_state().page(), 1);

    let (state, effects) = complete(
        state,
        single_fetch(&effects),
        filtered_page(1, 4, Some(science())),
    );
    assert!(effects.is_empty());
    assert_eq!(state.view_state().mode(), &Mode::ByCategory(3));
    assert_eq!(state.view_state().page(), 1);
    assert_eq!(state.view_state().total_questions(), 4);
    assert_eq!(state.view_state().current_category(), Some(&science()));
    assert_eq!(state.view_state().categories(), &directory_before);
    assert!(state.view().categories.iter().any(|c| c.id == 3 && c.selected));
}

#[test]
fn search_mode_is_entered_after_the_response() {
    init_logging();
    let state = mounted(25);

    let (state, effects) = update(state, Msg::SearchSubmitted("title".to_string()));
    let request = single_fetch(&effects);
    assert_eq!(
        request,
        FetchRequest::Search {
            term: "title".to_string(),
            page: 1
        }
    );
    assert_eq!(state.view_state().mode(), &Mode::Default);

    let (state, effects) = complete(state, request, filtered_page(1, 12, None));
    assert!(effects.is_empty());
    assert_eq!(state.view_state().mode(), &Mode::Search("title".to_string()));
    assert_eq!(state.view_state().page(), 1);
    assert_eq!(state.view_state().total_questions(), 12);
}

#[test]
fn search_pagination_reuses_the_term() {
    init_logging();
    let state = searching("title", 12);

    let (state, effects) = update(state, Msg::PageSelected(2));
    assert_eq!(
        effects,
        vec![Effect::Fetch(FetchRequest::Search {
            term: "title".to_string(),
            page: 2
        })]
    );
    assert_eq!(state.view_state().page(), 1);

    let (state, effects) = complete(state, single_fetch(&effects), filtered_page(2, 12, None));
    assert!(effects.is_empty());
    assert_eq!(state.view_state().page(), 2);
    assert_eq!(state.view_state().mode(), &Mode::Search("title".to_string()));
}

#[test]
fn categories_header_returns_to_default_mode_on_page_one() {
    init_logging();
    let state = searching("title", 25);
    let (state, effects) = update(state, Msg::PageSelected(3));
    let (state, _) = complete(state, single_fetch(&effects), filtered_page(3, 25, None));

    let (state, effects) = update(state, Msg::CategoriesClicked);
    assert_eq!(effects, vec![Effect::Fetch(FetchRequest::List { page: 1 })]);
    assert_eq!(state.view_state().mode(), &Mode::Default);
    assert_eq!(state.view_state().page(), 1);
}

#[test]
fn page_change_never_changes_mode() {
    init_logging();
    let default_state = mounted(35);
    let (category_state, effects) = update(mounted(35), Msg::CategorySelected(3));
    let (category_state, _) = complete(
        category_state,
        single_fetch(&effects),
        filtered_page(1, 35, Some(science())),
    );
    let search_state = searching("capital", 35);

    for state in [default_state, category_state, search_state] {
        let mode_before = state.view_state().mode().clone();
        for page in [2, 4, 1, 3] {
            let (next, effects) = update(state.clone(), Msg::PageSelected(page));
            let request = single_fetch(&effects);
            assert_eq!(request, mode_before.request_for_page(page));
            assert_eq!(next.view_state(), state.view_state());

            let (next, _) = complete(next, request, filtered_page(page, 35, None));
            assert_eq!(next.view_state().mode(), &mode_before);
            assert_eq!(next.view_state().page(), page);
        }
    }
}

#[test]
fn mode_change_always_resets_page() {
    init_logging();
    let state = mounted(35);
    let (state, effects) = update(state, Msg::PageSelected(4));
    let (state, _) = complete(state, single_fetch(&effects), list_page(4, 35));

    let (state, _) = update(state, Msg::CategorySelected(2));
    assert_eq!(state.view_state().page(), 1);

    let (state, _) = update(state, Msg::CategoriesClicked);
    assert_eq!(state.view_state().page(), 1);
}

#[test]
fn search_from_a_later_page_starts_on_page_one() {
    init_logging();
    let state = mounted(25);
    let (state, effects) = update(state, Msg::PageSelected(3));
    let (state, _) = complete(state, single_fetch(&effects), list_page(3, 25));
    assert_eq!(state.view_state().page(), 3);

    let (state, effects) = update(state, Msg::SearchSubmitted("river".to_string()));
    let request = single_fetch(&effects);
    assert_eq!(request.page(), 1);
    let (state, effects) = complete(state, request, filtered_page(1, 14, None));

    assert!(effects.is_empty());
    assert_eq!(state.view_state().mode(), &Mode::Search("river".to_string()));
    assert_eq!(state.view_state().page(), 1);
    let active = state.view().pages.into_iter().find(|entry| entry.active);
    assert_eq!(active.map(|entry| entry.number), Some(1));
}

#[test]
fn failed_search_from_a_later_page_stays_put() {
    init_logging();
    let state = mounted(25);
    let (state, effects) = update(state, Msg::PageSelected(3));
    let (state, _) = complete(state, single_fetch(&effects), list_page(3, 25));

    let (state, effects) = update(state, Msg::SearchSubmitted("river".to_string()));
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            request: single_fetch(&effects),
            result: Err(FetchFailed),
        },
    );

    assert_eq!(state.view_state().mode(), &Mode::Default);
    assert_eq!(state.view_state().page(), 3);
    assert!(state.notice().is_some());
}

#[test]
fn blank_search_is_ignored() {
    init_logging();
    let state = mounted(25);
    let (next, effects) = update(state.clone(), Msg::SearchSubmitted("   ".to_string()));

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn out_of_range_page_is_ignored() {
    init_logging();
    let state = mounted(25);

    for page in [0, 4, 99] {
        let (next, effects) = update(state.clone(), Msg::PageSelected(page));
        assert!(effects.is_empty());
        assert_eq!(next.view_state(), state.view_state());
    }
}
