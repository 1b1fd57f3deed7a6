//! In-memory catalog of literary works.
//!
//! [`WorkStore`] owns the ordered record sequence; [`sort`] implements the
//! list ordering rules and [`aggregates`] the derived statistics.

pub mod aggregates;
pub mod sort;
pub mod store;

pub use aggregates::Aggregates;
pub use sort::{SortDirection, SortField, SortQuery};
pub use store::WorkStore;
