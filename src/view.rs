// Caller-side state for a filtered, paginated list

use crate::filter::FilterState;
use crate::paginate::{PageState, Window, paginate};
use crate::query::QueryEngine;
use crate::record::Record;
use std::num::NonZeroUsize;

/// Filter and page state of one list view
///
/// Every mutation of the query or an exact filter sends the view back to
/// page 1, so a stale page number never outlives the result set it pointed
/// into.
#[derive(Debug, Clone)]
pub struct ListView {
    engine: QueryEngine,
    filters: FilterState,
    page: PageState,
}

/// Derived result of applying a [`ListView`] to a collection
#[derive(Debug, Clone)]
pub struct ViewSnapshot<'a, R> {
    /// All matching records, unpaginated
    pub filtered: Vec<&'a R>,
    /// Size of the collection before filtering
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    range: (usize, usize),
    start: usize,
    end: usize,
}

impl<'a, R> ViewSnapshot<'a, R> {
    /// Records on the current page
    pub fn visible(&self) -> &[&'a R] {
        &self.filtered[self.start..self.end]
    }

    /// 1-based positions shown on the current page, `(0, 0)` when empty
    pub fn item_range(&self) -> (usize, usize) {
        self.range
    }
}

impl ListView {
    pub fn new(engine: QueryEngine, page_size: NonZeroUsize) -> Self {
        Self {
            engine,
            filters: FilterState::new(),
            page: PageState::new(page_size),
        }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.page.current()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
        self.page.reset();
    }

    /// Set an exact filter; an empty value removes the restriction
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        set_exact(&mut self.filters, field.into(), value.into());
        self.page.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page.reset();
    }

    pub fn go_to(&mut self, page: i64, total_pages: usize) {
        self.page.go_to(page, total_pages);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page.next(total_pages);
    }

    pub fn prev_page(&mut self) {
        self.page.prev();
    }

    /// Filtered view of `records`, without touching the stored page
    pub fn matching<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        self.engine.filter(records, &self.filters)
    }

    /// Filter and paginate `records`, storing the clamped page back
    pub fn snapshot<'a, R: Record>(&mut self, records: &'a [R]) -> ViewSnapshot<'a, R> {
        let filtered = self.matching(records);

        let (page, total_pages, range, len) = {
            let page = paginate(&filtered, self.page.page_size(), self.page.current() as i64);
            self.page.sync(&page);
            (page.page, page.total_pages, page.item_range(), page.visible.len())
        };

        let start = (page - 1) * self.page.page_size().get();
        let start = start.min(filtered.len());
        let end = start + len;

        ViewSnapshot {
            filtered,
            total: records.len(),
            page,
            total_pages,
            range,
            start,
            end,
        }
    }
}

fn set_exact(filters: &mut FilterState, field: String, value: String) {
    if value.is_empty() {
        filters.exact.remove(&field);
    } else {
        filters.exact.insert(field, value);
    }
}

/// Filter state plus a "load more" window, for views that grow instead of paging
///
/// Any change to the query or an exact filter shrinks the window back to
/// its first batch.
#[derive(Debug, Clone)]
pub struct WindowedView {
    engine: QueryEngine,
    filters: FilterState,
    window: Window,
}

/// Derived result of applying a [`WindowedView`] to a collection
#[derive(Debug, Clone)]
pub struct WindowSnapshot<'a, R> {
    /// All matching records, unwindowed
    pub filtered: Vec<&'a R>,
    /// Size of the collection before filtering
    pub total: usize,
    shown: usize,
}

impl<'a, R> WindowSnapshot<'a, R> {
    /// Records revealed so far
    pub fn visible(&self) -> &[&'a R] {
        &self.filtered[..self.shown]
    }

    /// Matching records not yet revealed
    pub fn remaining(&self) -> usize {
        self.filtered.len() - self.shown
    }
}

impl WindowedView {
    pub fn new(engine: QueryEngine, step: NonZeroUsize) -> Self {
        Self {
            engine,
            filters: FilterState::new(),
            window: Window::new(step),
        }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn visible_count(&self) -> usize {
        self.window.visible_count()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
        self.window.reset();
    }

    /// Set an exact filter; an empty value removes the restriction
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        set_exact(&mut self.filters, field.into(), value.into());
        self.window.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.window.reset();
    }

    /// Reveal one more batch of the matching records; returns how many are shown
    pub fn load_more<R: Record>(&mut self, records: &[R]) -> usize {
        let matching = self.matching(records).len();
        self.window.load_more(matching)
    }

    pub fn matching<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        self.engine.filter(records, &self.filters)
    }

    pub fn snapshot<'a, R: Record>(&self, records: &'a [R]) -> WindowSnapshot<'a, R> {
        let filtered = self.matching(records);
        let shown = self.window.slice(&filtered).len();

        WindowSnapshot {
            filtered,
            total: records.len(),
            shown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use crate::models::Event;

    fn events_view() -> ListView {
        ListView::new(
            QueryEngine::new(["event_id", "endpoint", "event_type"], ["status", "endpoint"]),
            NonZeroUsize::new(10).unwrap(),
        )
    }

    #[test]
    fn test_snapshot_first_page() {
        let events: Vec<Event> = demo::events();
        let mut view = events_view();

        let snap = view.snapshot(&events);
        assert_eq!(snap.total, 12);
        assert_eq!(snap.filtered.len(), 12);
        assert_eq!(snap.total_pages, 2);
        assert_eq!(snap.visible().len(), 10);
        assert_eq!(snap.item_range(), (1, 10));
    }

    #[test]
    fn test_snapshot_second_page() {
        let events: Vec<Event> = demo::events();
        let mut view = events_view();

        view.go_to(2, 2);
        let snap = view.snapshot(&events);
        assert_eq!(snap.page, 2);
        assert_eq!(snap.visible().len(), 2);
        assert_eq!(snap.item_range(), (11, 12));
        assert_eq!(snap.visible()[0].event_id, "evt_1k2l3m4n5o");
    }

    #[test]
    fn test_query_change_resets_page() {
        let events: Vec<Event> = demo::events();
        let mut view = events_view();

        view.go_to(2, 2);
        assert_eq!(view.current_page(), 2);

        view.set_query("order");
        assert_eq!(view.current_page(), 1);

        view.go_to(2, 2);
        view.set_filter("status", "failed");
        assert_eq!(view.current_page(), 1);

        let snap = view.snapshot(&events);
        assert_eq!(snap.filtered.len(), 1);
        assert_eq!(snap.filtered[0].event_id, "evt_3c4d5e6f7g");
    }

    #[test]
    fn test_snapshot_clamps_stale_page() {
        let events: Vec<Event> = demo::events();
        let mut view = events_view();

        view.go_to(7, 7);
        let snap = view.snapshot(&events);
        assert_eq!(snap.page, 2);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_empty_filter_value_removes_restriction() {
        let events: Vec<Event> = demo::events();
        let mut view = events_view();

        view.set_filter("status", "failed");
        assert_eq!(view.matching(&events).len(), 3);

        view.set_filter("status", "");
        assert!(!view.filters().is_active());
        assert_eq!(view.matching(&events).len(), 12);
    }

    #[test]
    fn test_clear_filters() {
        let events: Vec<Event> = demo::events();
        let mut view = events_view();

        view.set_query("stripe");
        view.set_filter("status", "success");
        view.clear_filters();

        let snap = view.snapshot(&events);
        assert_eq!(snap.filtered.len(), 12);
        assert_eq!(snap.page, 1);
    }

    fn logs_view() -> WindowedView {
        WindowedView::new(
            QueryEngine::new(["message", "source"], ["level", "source"]),
            NonZeroUsize::new(10).unwrap(),
        )
    }

    #[test]
    fn test_windowed_view_load_more() {
        let logs = demo::logs();
        let mut view = logs_view();

        let snap = view.snapshot(&logs);
        assert_eq!(snap.visible().len(), 10);
        assert_eq!(snap.remaining(), 10);

        assert_eq!(view.load_more(&logs), 20);
        let snap = view.snapshot(&logs);
        assert_eq!(snap.visible().len(), 20);
        assert_eq!(snap.remaining(), 0);
    }

    #[test]
    fn test_windowed_view_resets_on_filter_change() {
        let logs = demo::logs();
        let mut view = logs_view();

        view.load_more(&logs);
        assert_eq!(view.visible_count(), 20);
        view.set_query("delivered");
        assert_eq!(view.visible_count(), 10);

        view.load_more(&logs);
        view.set_filter("level", "error");
        assert_eq!(view.visible_count(), 10);

        view.load_more(&logs);
        view.clear_filters();
        assert_eq!(view.visible_count(), 10);
    }

    #[test]
    fn test_windowed_view_short_result() {
        let logs = demo::logs();
        let mut view = logs_view();

        view.set_filter("level", "error");
        let snap = view.snapshot(&logs);
        let ids: Vec<&str> = snap.visible().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "10", "17"]);
        assert_eq!(snap.remaining(), 0);
        assert_eq!(snap.total, 20);
    }

    #[test]
    fn test_no_matches() {
        let events: Vec<Event> = demo::events();
        let mut view = events_view();

        view.set_query("no such thing");
        let snap = view.snapshot(&events);
        assert!(snap.visible().is_empty());
        assert_eq!(snap.total_pages, 1);
        assert_eq!(snap.item_range(), (0, 0));
    }
}
