use std::fmt::Write;

use trivia_core::{AppViewModel, Mode};

/// Renders the view model as plain text for the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== Categories ==");
    for category in &view.categories {
        let marker = if category.selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} [{}] {} ({})",
            category.id, category.kind, category.icon_file
        );
    }

    let heading = match &view.mode {
        Mode::Default => "All questions".to_string(),
        Mode::ByCategory(_) => match &view.current_category {
            Some(category) => format!("Category: {}", category.kind),
            None => "Category".to_string(),
        },
        Mode::Search(term) => format!("Search: {term:?}"),
    };
    let _ = writeln!(
        out,
        "== {heading} ({} total, page {}) ==",
        view.total_questions, view.page
    );
    if view.questions.is_empty() {
        let _ = writeln!(out, "  (no questions)");
    }
    for question in &view.questions {
        let _ = writeln!(
            out,
            "#{} [{}] difficulty {}",
            question.id, question.category_icon, question.difficulty
        );
        let _ = writeln!(out, "   Q: {}", question.question);
        let _ = writeln!(out, "   A: {}", question.answer);
    }

    if !view.pages.is_empty() {
        let pages: Vec<String> = view
            .pages
            .iter()
            .map(|entry| {
                if entry.active {
                    format!("[{}]", entry.number)
                } else {
                    entry.number.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "Pages: {}", pages.join(" "));
    }

    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "! {}", notice.message);
    }

    out
}
