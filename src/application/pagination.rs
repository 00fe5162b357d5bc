//! Page-number pagination shared by the blog listing and the admin list views.
//!
//! [`PaginationController`] owns a single [`PageState`] and turns page-change
//! intents into validated targets. It never fetches anything: a change is
//! reported back to the hosting view, which loads the matching slice and
//! reports the fresh total through [`PaginationController::set_total_items`].

use std::num::NonZeroU64;

use metrics::counter;
use serde::Serialize;
use tracing::debug;

pub const METRIC_PAGE_REQUESTS: &str = "labelsite_page_requests_total";

/// Current page, page size and total item count of one list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    current_page: u64,
    items_per_page: NonZeroU64,
    total_items: u64,
}

impl PageState {
    /// State of a freshly mounted view, positioned on the first page.
    pub fn new(items_per_page: NonZeroU64, total_items: u64) -> Self {
        Self {
            current_page: 1,
            items_per_page,
            total_items,
        }
    }

    /// State positioned on `page`, clamped into the valid range.
    pub fn at(page: u64, items_per_page: NonZeroU64, total_items: u64) -> Self {
        let mut state = Self::new(items_per_page, total_items);
        state.current_page = page.clamp(1, state.total_pages());
        state
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page.get()
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// `ceil(total_items / items_per_page)`, never less than one.
    pub fn total_pages(&self) -> u64 {
        self.total_items
            .div_ceil(self.items_per_page.get())
            .max(1)
    }

    /// Whether page controls should be shown at all.
    pub fn is_paginated(&self) -> bool {
        self.total_pages() > 1
    }

    /// One-based index of the first item on the current page.
    pub fn first_item_index(&self) -> u64 {
        (self.current_page - 1)
            .saturating_mul(self.items_per_page.get())
            .saturating_add(1)
    }

    /// One-based index of the last item on the current page.
    pub fn last_item_index(&self) -> u64 {
        self.current_page
            .saturating_mul(self.items_per_page.get())
            .min(self.total_items)
    }

    fn clamp(&self, target: i64) -> u64 {
        let total_pages = self.total_pages();
        match u64::try_from(target) {
            Ok(0) | Err(_) => 1,
            Ok(page) => page.min(total_pages),
        }
    }
}

/// A page transition the caller must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageChange {
    pub from: u64,
    pub to: u64,
}

/// One control in the rendered page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowSlot {
    Page { number: u64, current: bool },
    Gap,
}

/// Bounded run of page controls around the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageWindow {
    pub slots: Vec<WindowSlot>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Page numbers in display order, gaps skipped.
    pub fn pages(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            WindowSlot::Page { number, .. } => Some(*number),
            WindowSlot::Gap => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PaginationController {
    state: PageState,
}

impl PaginationController {
    pub fn new(items_per_page: NonZeroU64, total_items: u64) -> Self {
        Self {
            state: PageState::new(items_per_page, total_items),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn current_page(&self) -> u64 {
        self.state.current_page
    }

    pub fn total_pages(&self) -> u64 {
        self.state.total_pages()
    }

    /// Whether the controller renders anything.
    pub fn is_visible(&self) -> bool {
        self.state.is_paginated()
    }

    /// Clamp `target` into `[1, total_pages]` and move there.
    ///
    /// Returns `None` when the list fits on a single page, or when the clamped
    /// target is already the current page.
    pub fn request_page(&mut self, target: i64) -> Option<PageChange> {
        if !self.state.is_paginated() {
            counter!(METRIC_PAGE_REQUESTS, "outcome" => "suppressed").increment(1);
            return None;
        }

        let to = self.state.clamp(target);
        if u64::try_from(target).ok() != Some(to) {
            debug!(
                requested = target,
                clamped = to,
                total_pages = self.state.total_pages(),
                "page request clamped"
            );
        }

        let from = self.state.current_page;
        if to == from {
            counter!(METRIC_PAGE_REQUESTS, "outcome" => "unchanged").increment(1);
            return None;
        }

        self.state.current_page = to;
        counter!(METRIC_PAGE_REQUESTS, "outcome" => "changed").increment(1);
        Some(PageChange { from, to })
    }

    pub fn next(&mut self) -> Option<PageChange> {
        self.request_page(Self::offset(self.state.current_page, 1))
    }

    pub fn previous(&mut self) -> Option<PageChange> {
        self.request_page(Self::offset(self.state.current_page, -1))
    }

    /// Record a fresh total from the backend, pulling the current page back
    /// into range if the list shrank.
    pub fn set_total_items(&mut self, total_items: u64) -> Option<PageChange> {
        let from = self.state.current_page;
        self.state = PageState::at(from, self.state.items_per_page, total_items);
        let to = self.state.current_page;
        (to != from).then_some(PageChange { from, to })
    }

    /// Move to `page` after a slice for it was loaded, adopting `total_items`.
    pub(crate) fn settle(&mut self, page: u64, total_items: u64) -> u64 {
        self.state = PageState::at(page, self.state.items_per_page, total_items);
        self.state.current_page
    }

    /// At most `width` consecutive pages containing the current one, plus
    /// anchors to the first and last page when the run does not reach them.
    pub fn window(&self, width: usize) -> PageWindow {
        if !self.state.is_paginated() {
            return PageWindow::default();
        }

        let total = self.state.total_pages();
        let current = self.state.current_page;
        let width = u64::try_from(width.max(1)).unwrap_or(u64::MAX).min(total);

        let mut start = current.saturating_sub((width - 1) / 2).max(1);
        let end = start.saturating_add(width - 1).min(total);
        start = end.saturating_sub(width - 1).max(1);

        let mut slots = Vec::new();
        if start > 1 {
            slots.push(WindowSlot::Page {
                number: 1,
                current: false,
            });
            if start > 2 {
                slots.push(WindowSlot::Gap);
            }
        }
        for number in start..=end {
            slots.push(WindowSlot::Page {
                number,
                current: number == current,
            });
        }
        if end < total {
            if end + 1 < total {
                slots.push(WindowSlot::Gap);
            }
            slots.push(WindowSlot::Page {
                number: total,
                current: false,
            });
        }

        PageWindow {
            slots,
            has_previous: current > 1,
            has_next: current < total,
        }
    }

    fn offset(page: u64, delta: i64) -> i64 {
        i64::try_from(page).unwrap_or(i64::MAX).saturating_add(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_page(value: u64) -> NonZeroU64 {
        NonZeroU64::new(value).expect("non-zero page size")
    }

    #[test]
    fn total_pages_rounds_up_and_never_drops_below_one() {
        assert_eq!(PageState::new(per_page(10), 0).total_pages(), 1);
        assert_eq!(PageState::new(per_page(10), 10).total_pages(), 1);
        assert_eq!(PageState::new(per_page(10), 11).total_pages(), 2);
        assert_eq!(PageState::new(per_page(10), 25).total_pages(), 3);
    }

    #[test]
    fn out_of_range_requests_are_clamped() {
        let mut controller = PaginationController::new(per_page(10), 25);

        assert_eq!(
            controller.request_page(5),
            Some(PageChange { from: 1, to: 3 })
        );
        assert_eq!(controller.current_page(), 3);

        assert_eq!(
            controller.request_page(0),
            Some(PageChange { from: 3, to: 1 })
        );
        assert_eq!(controller.current_page(), 1);

        controller.request_page(i64::MAX);
        assert_eq!(controller.current_page(), 3);
        controller.request_page(i64::MIN);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn requesting_current_page_emits_nothing() {
        let mut controller = PaginationController::new(per_page(10), 25);
        assert_eq!(controller.request_page(1), None);
        assert_eq!(controller.request_page(-7), None);
    }

    #[test]
    fn single_page_lists_suppress_the_controller() {
        let mut controller = PaginationController::new(per_page(10), 0);
        assert!(!controller.is_visible());
        assert_eq!(controller.request_page(4), None);
        assert_eq!(controller.current_page(), 1);
        assert!(controller.window(5).is_empty());

        let mut controller = PaginationController::new(per_page(10), 10);
        assert_eq!(controller.next(), None);
        assert!(controller.window(5).is_empty());
    }

    #[test]
    fn next_and_previous_stop_at_the_edges() {
        let mut controller = PaginationController::new(per_page(10), 25);
        assert_eq!(controller.previous(), None);
        assert_eq!(controller.next(), Some(PageChange { from: 1, to: 2 }));
        assert_eq!(controller.next(), Some(PageChange { from: 2, to: 3 }));
        assert_eq!(controller.next(), None);
        assert_eq!(controller.previous(), Some(PageChange { from: 3, to: 2 }));
    }

    #[test]
    fn item_indices_cover_the_current_slice() {
        let mut controller = PaginationController::new(per_page(10), 25);
        assert_eq!(controller.state().first_item_index(), 1);
        assert_eq!(controller.state().last_item_index(), 10);

        controller.request_page(3);
        assert_eq!(controller.state().first_item_index(), 21);
        assert_eq!(controller.state().last_item_index(), 25);
    }

    #[test]
    fn shrinking_total_pulls_current_page_back() {
        let mut controller = PaginationController::new(per_page(10), 55);
        controller.request_page(6);

        assert_eq!(
            controller.set_total_items(21),
            Some(PageChange { from: 6, to: 3 })
        );
        assert_eq!(controller.current_page(), 3);
        assert_eq!(controller.set_total_items(30), None);
    }

    #[test]
    fn window_is_centered_with_anchors() {
        let mut controller = PaginationController::new(per_page(10), 100);
        controller.request_page(5);
        let window = controller.window(5);

        assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 3, 4, 5, 6, 7, 10]);
        assert_eq!(window.slots[1], WindowSlot::Gap);
        assert!(window.slots.contains(&WindowSlot::Page {
            number: 5,
            current: true
        }));
        assert!(window.has_previous);
        assert!(window.has_next);
    }

    #[test]
    fn window_shifts_at_the_edges() {
        let mut controller = PaginationController::new(per_page(10), 100);
        let window = controller.window(5);
        assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 10]);
        assert!(!window.has_previous);

        controller.request_page(10);
        let window = controller.window(5);
        assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 6, 7, 8, 9, 10]);
        assert!(!window.has_next);
    }

    #[test]
    fn window_omits_gap_next_to_anchor() {
        let mut controller = PaginationController::new(per_page(10), 100);
        controller.request_page(4);
        let window = controller.window(5);

        assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 10]);
        assert_eq!(
            window
                .slots
                .iter()
                .filter(|slot| **slot == WindowSlot::Gap)
                .count(),
            1
        );
    }

    #[test]
    fn narrow_lists_show_every_page() {
        let controller = PaginationController::new(per_page(10), 25);
        let window = controller.window(5);
        assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!window.slots.contains(&WindowSlot::Gap));
    }
}
