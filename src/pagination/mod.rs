//! Client-side pagination over in-memory collections.
//!
//! A [`Paginator`] holds the page state, a [`Pager`] binds it to a borrowed
//! collection for navigation, and a [`PageView`] is the recomputed result
//! of reading it. The [`keys`] and [`widget`] modules wire a pager to a
//! terminal.

pub mod engine;
pub mod keys;
pub mod math;
pub mod widget;

pub use engine::{PageView, Pager, Paginator};
pub use keys::{KeyBinding, KeyMap, PageAction};
pub use math::{clamp_page, normalize_page_size, page_window, total_pages, DEFAULT_PAGE_SIZE};
pub use widget::{page_rows, render_page_list, FooterStyle, PaginationFooter};
