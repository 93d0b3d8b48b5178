//! Page state, navigation, and the derived view over a borrowed collection.
//!
//! [`Paginator`] owns the two integers that make up the page state. It never
//! owns the collection: callers bind one with [`Paginator::bind`] for the
//! duration of a read/navigate cycle, and every read recomputes the view
//! from whatever collection is bound at that moment.

use std::ops::Range;

use tracing::debug;

use super::math::{self, DEFAULT_PAGE_SIZE};
use crate::config::Config;

/// Owned page state: the current one-based page and the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// Current page (1-based)
    page: usize,

    /// Items per page, never zero
    page_size: usize,
}

impl Paginator {
    /// Create a paginator positioned on page 1.
    ///
    /// A non-positive `initial_page_size` is clamped to 1 rather than
    /// rejected, so construction never fails.
    pub fn new(initial_page_size: i64) -> Self {
        Self {
            page: 1,
            page_size: math::normalize_page_size(initial_page_size),
        }
    }

    /// Create a paginator using the configured default page size.
    pub fn from_config(config: &Config) -> Self {
        Self {
            page: 1,
            page_size: config.pagination.default_page_size.max(1),
        }
    }

    /// Current page as last settled.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Bind a collection and settle the page against its length.
    ///
    /// If the collection shrank since the last bind, the page is pulled
    /// back into range here and stays there.
    pub fn bind<'p, 'a, T>(&'p mut self, items: &'a [T]) -> Pager<'p, 'a, T> {
        let mut pager = Pager { state: self, items };
        pager.settle();
        pager
    }

    /// Shorthand for `bind(items).view()`.
    pub fn view<'a, T>(&mut self, items: &'a [T]) -> PageView<'a, T> {
        self.bind(items).view()
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A [`Paginator`] bound to a collection.
///
/// All operations are total: out-of-range requests are clamped.
#[derive(Debug)]
pub struct Pager<'p, 'a, T> {
    state: &'p mut Paginator,
    items: &'a [T],
}

impl<'p, 'a, T> Pager<'p, 'a, T> {
    pub fn page(&self) -> usize {
        self.state.page
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> usize {
        math::total_pages(self.items.len(), self.state.page_size)
    }

    pub fn has_next_page(&self) -> bool {
        self.state.page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.state.page > 1
    }

    /// Go to a specific page, clamped into range.
    ///
    /// Returns whether the page changed.
    pub fn go_to_page(&mut self, page: i64) -> bool {
        let old_page = self.state.page;
        let new_page = math::clamp_page(page, self.total_pages());
        if old_page == new_page {
            return false;
        }
        self.state.page = new_page;
        debug!(old_page, new_page, page_size = self.state.page_size, "page changed");
        true
    }

    /// Advance one page. No-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.go_to_page(as_signed(self.state.page) + 1)
    }

    /// Step back one page. No-op on page 1.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous_page() {
            return false;
        }
        self.go_to_page(as_signed(self.state.page) - 1)
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(as_signed(self.total_pages()))
    }

    /// Move forward `pages` pages, stopping at the last page.
    pub fn jump_forward(&mut self, pages: usize) -> bool {
        self.go_to_page(as_signed(self.state.page).saturating_add(as_signed(pages)))
    }

    /// Move back `pages` pages, stopping at page 1.
    pub fn jump_back(&mut self, pages: usize) -> bool {
        self.go_to_page(as_signed(self.state.page).saturating_sub(as_signed(pages)))
    }

    /// Change the page size and return to page 1.
    ///
    /// The page always resets, even when the size is unchanged. Returns
    /// whether either half of the state changed.
    pub fn set_page_size(&mut self, size: i64) -> bool {
        let old_size = self.state.page_size;
        let old_page = self.state.page;
        let new_size = math::normalize_page_size(size);
        self.state.page_size = new_size;
        self.state.page = 1;
        debug!(
            old_size,
            new_size,
            new_total_pages = self.total_pages(),
            "page size changed"
        );
        old_size != new_size || old_page != 1
    }

    /// Recompute the derived view.
    pub fn view(&self) -> PageView<'a, T> {
        let items = self.items;
        let total_items = items.len();
        let total_pages = self.total_pages();
        let page = math::clamp_page(as_signed(self.state.page), total_pages);
        let window = math::page_window(total_items, self.state.page_size, page);

        PageView {
            items: &items[window],
            page,
            page_size: self.state.page_size,
            total_items,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }

    fn settle(&mut self) {
        let settled = math::clamp_page(as_signed(self.state.page), self.total_pages());
        if settled != self.state.page {
            debug!(
                old_page = self.state.page,
                new_page = settled,
                total_items = self.items.len(),
                "collection shrank, page re-clamped"
            );
            self.state.page = settled;
        }
    }
}

/// The derived view: the visible slice plus counts and navigation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<'a, T> PageView<'a, T> {
    /// One-based inclusive `(start, end)` of the visible slice, or `None`
    /// for an empty collection.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = (self.page - 1) * self.page_size + 1;
        Some((start, start + self.items.len() - 1))
    }

    /// Index range of the slice within the collection.
    pub fn index_range(&self) -> Range<usize> {
        math::page_window(self.total_items, self.page_size, self.page)
    }

    /// "Showing {start} to {end} of {total} results".
    pub fn summary(&self) -> String {
        let (start, end) = self.range().unwrap_or((0, 0));
        format!(
            "Showing {} to {} of {} results",
            start, end, self.total_items
        )
    }
}

fn as_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
