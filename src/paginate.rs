// Page slicing and navigation state

use std::num::NonZeroUsize;

/// One page of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Records on this page
    pub visible: &'a [T],
    /// Always at least 1, even for an empty sequence
    pub total_pages: usize,
    /// The requested page after clamping into `1..=total_pages`
    pub page: usize,
    /// Length of the whole sequence
    pub total_items: usize,
    page_size: usize,
}

/// Slice `records` into the page numbered `page` (1-based)
///
/// Out-of-range requests are clamped, never rejected.
pub fn paginate<T>(records: &[T], page_size: NonZeroUsize, page: i64) -> Page<'_, T> {
    let size = page_size.get();
    let total_pages = records.len().div_ceil(size).max(1);
    let page = clamp_page(page, total_pages);

    let start = ((page - 1) * size).min(records.len());
    let end = (start + size).min(records.len());

    Page {
        visible: &records[start..end],
        total_pages,
        page,
        total_items: records.len(),
        page_size: size,
    }
}

/// Constrain a requested page into `1..=total_pages`
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let total_pages = total_pages.max(1);
    if page < 1 {
        1
    } else {
        usize::try_from(page).map_or(total_pages, |p| p.min(total_pages))
    }
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based positions of the first and last visible item, `(0, 0)` when empty
    pub fn item_range(&self) -> (usize, usize) {
        if self.visible.is_empty() {
            return (0, 0);
        }
        let first = (self.page - 1) * self.page_size + 1;
        (first, first + self.visible.len() - 1)
    }
}

/// Entry in a page-number bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Number(usize),
    /// Elided run of pages
    Gap,
}

/// Page-number bar: the first `max_links` pages, then a gap and the last page
pub fn page_links(total_pages: usize, max_links: usize) -> Vec<PageLink> {
    let total_pages = total_pages.max(1);
    let shown = total_pages.min(max_links.max(1));

    let mut links: Vec<PageLink> = (1..=shown).map(PageLink::Number).collect();
    if total_pages > shown {
        links.push(PageLink::Gap);
        links.push(PageLink::Number(total_pages));
    }
    links
}

/// Page position for one list view
///
/// The page size is fixed for the lifetime of the state. The current page is
/// only ever moved through methods that keep it within `1..=total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_size: NonZeroUsize,
    current: usize,
}

impl PageState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size, current: 1 }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Back to page 1
    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn go_to(&mut self, page: i64, total_pages: usize) {
        self.current = clamp_page(page, total_pages);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.current = (self.current + 1).min(total_pages.max(1));
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    /// Store the clamped page a [`paginate`] call settled on
    pub fn sync<T>(&mut self, page: &Page<'_, T>) {
        self.current = page.page;
    }

    /// Slice `records` at the current position
    pub fn apply<'a, T>(&self, records: &'a [T]) -> Page<'a, T> {
        paginate(records, self.page_size, self.current as i64)
    }
}

/// Growing prefix of a sequence, revealed one batch at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    step: NonZeroUsize,
    visible: usize,
}

impl Window {
    pub fn new(step: NonZeroUsize) -> Self {
        Self {
            step,
            visible: step.get(),
        }
    }

    /// Number of items currently revealed (may exceed the sequence length)
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        &records[..self.visible.min(records.len())]
    }

    /// Reveal one more batch; returns how many items are now shown
    pub fn load_more(&mut self, total: usize) -> usize {
        self.visible = (self.visible + self.step.get()).min(total.max(self.step.get()));
        self.visible.min(total)
    }

    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.visible)
    }

    pub fn reset(&mut self) {
        self.visible = self.step.get();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_first_and_last_page() {
        let records: Vec<u32> = (1..=12).collect();

        let page = paginate(&records, size(10), 1);
        assert_eq!(page.visible, &records[0..10]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 1);
        assert!(!page.has_prev());
        assert!(page.has_next());

        let page = paginate(&records, size(10), 2);
        assert_eq!(page.visible, &[11, 12]);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_clamps_out_of_range_pages() {
        let records: Vec<u32> = (1..=12).collect();

        assert_eq!(paginate(&records, size(10), 0).page, 1);
        assert_eq!(paginate(&records, size(10), -5).page, 1);
        assert_eq!(paginate(&records, size(10), 1_000_000_000).page, 2);
        assert_eq!(paginate(&records, size(10), i64::MAX).page, 2);
    }

    #[test]
    fn test_empty_records_have_one_page() {
        let records: Vec<u32> = Vec::new();
        let page = paginate(&records, size(10), 3);

        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.item_range(), (0, 0));
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let records: Vec<u32> = (1..=16).collect();
        let page = paginate(&records, size(8), 2);

        assert_eq!(page.total_pages, 2);
        assert_eq!(page.visible.len(), 8);
        assert_eq!(page.item_range(), (9, 16));
    }

    #[test]
    fn test_item_range_on_partial_page() {
        let records: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&records, size(10), 2).item_range(), (11, 12));
    }

    #[test]
    fn test_page_links() {
        use PageLink::*;

        assert_eq!(page_links(1, 5), vec![Number(1)]);
        assert_eq!(page_links(0, 5), vec![Number(1)]);
        assert_eq!(
            page_links(5, 5),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
        assert_eq!(
            page_links(9, 5),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5), Gap, Number(9)]
        );
    }

    #[test]
    fn test_page_state_navigation() {
        let mut state = PageState::new(size(10));
        assert_eq!(state.current(), 1);

        state.prev();
        assert_eq!(state.current(), 1);

        state.next(3);
        state.next(3);
        state.next(3);
        assert_eq!(state.current(), 3);

        state.go_to(0, 3);
        assert_eq!(state.current(), 1);

        state.go_to(99, 3);
        assert_eq!(state.current(), 3);

        state.reset();
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn test_page_state_sync_after_shrink() {
        let mut state = PageState::new(size(5));
        state.go_to(4, 4);

        let shrunk: Vec<u32> = (1..=7).collect();
        let page = state.apply(&shrunk);
        assert_eq!(page.page, 2);

        state.sync(&page);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn test_window_load_more() {
        let logs: Vec<u32> = (1..=20).collect();
        let mut window = Window::new(size(10));

        assert_eq!(window.slice(&logs).len(), 10);
        assert_eq!(window.remaining(logs.len()), 10);

        assert_eq!(window.load_more(logs.len()), 20);
        assert_eq!(window.slice(&logs).len(), 20);
        assert_eq!(window.remaining(logs.len()), 0);

        // Nothing left to reveal
        assert_eq!(window.load_more(logs.len()), 20);

        window.reset();
        assert_eq!(window.visible_count(), 10);
    }

    #[test]
    fn test_window_on_short_sequence() {
        let logs: Vec<u32> = (1..=3).collect();
        let mut window = Window::new(size(10));

        assert_eq!(window.slice(&logs), &[1, 2, 3]);
        assert_eq!(window.remaining(logs.len()), 0);
        assert_eq!(window.load_more(logs.len()), 3);
    }
}
