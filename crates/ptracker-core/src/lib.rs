//! # ptracker-core - Core Domain Types
//!
//! Foundation crate for the promise tracker. Provides the domain records
//! served by the tracker backend, the canonical promise status, and the
//! pure helpers the dashboard is built on (pagination, citation carousel,
//! completion aggregation, table ordering).
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Candidate`], [`Promise`], [`Action`], [`Citation`]
//! - [`sort_promises()`] - Promise table ordering
//! - [`parse_timestamp()`], [`display_date()`] - Backend date handling
//!
//! ### Status (`status`)
//! - [`PromiseStatus`] - The one status enumeration every view goes through
//! - [`StatusCounts`] - Partition by status and completion percentage
//!
//! ### Pagination (`paging`) and Carousel (`carousel`)
//! - [`paginate()`], [`Paginator`], [`PageButton`]
//! - [`CitationCarousel`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use ptracker_core::prelude::*;
//! ```

pub mod carousel;
pub mod error;
pub mod logging;
pub mod paging;
pub mod prelude;
pub mod status;
pub mod types;

#[cfg(test)]
mod test_properties;

pub use carousel::{next_index, prev_index, CitationCarousel};
pub use error::{Error, Result, ResultExt};
pub use paging::{page_buttons, paginate, total_pages, PageButton, PageSlice, Paginator};
pub use status::{PromiseStatus, StatusCounts};
pub use types::{
    display_date, parse_timestamp, sort_promises, Action, ActionId, Candidate, CandidateId,
    Citation, CitationId, Promise, PromiseId, DISPLAY_DATE_FORMAT,
};
