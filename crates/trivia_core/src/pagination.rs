/// Questions per page, fixed by the API.
pub const PAGE_SIZE: u32 = 10;

/// Number of pages needed for `total_questions`, i.e. `ceil(total / PAGE_SIZE)`.
pub fn max_page(total_questions: u32) -> u32 {
    total_questions.div_ceil(PAGE_SIZE)
}

/// Most entries the pagination menu offers at once.
pub const MAX_PAGE_ENTRIES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub number: u32,
    pub active: bool,
}

/// Selectable page entries for the pagination menu.
///
/// A single page is not worth navigating, so nothing is produced unless there
/// are at least two pages. Beyond [`MAX_PAGE_ENTRIES`] pages only a window
/// around `current_page` is listed.
pub fn page_entries(total_questions: u32, current_page: u32) -> Vec<PageEntry> {
    let max = max_page(total_questions);
    if max <= 1 {
        return Vec::new();
    }
    let last_start = max.saturating_sub(MAX_PAGE_ENTRIES - 1).max(1);
    let first = current_page
        .saturating_sub(MAX_PAGE_ENTRIES / 2)
        .clamp(1, last_start);
    let last = first.saturating_add(MAX_PAGE_ENTRIES - 1).min(max);
    (first..=last)
        .map(|number| PageEntry {
            number,
            active: number == current_page,
        })
        .collect()
}
