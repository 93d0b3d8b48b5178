//! Pagination engine for in-memory collections, with terminal bindings.

pub mod config;
pub mod error;
pub mod pagination;

pub use config::{Config, PaginationConfig};
pub use error::{PagewiseError, Result};
pub use pagination::{PageAction, PageView, Pager, Paginator};
