//! Query building for v1 and v3 list endpoints.
//!
//! This module provides the typed filter/sort/pagination values and the pure
//! encoding functions that turn them into wire query parameters. Encoding is
//! referentially transparent and performs all input validation, so malformed
//! queries fail before any network call.
//!
//! # Shared Types
//!
//! - [`FilterSpec`] / [`Modifier`] - v1 field filters
//! - [`SortSpec`] - v1 ordering, precedence follows insertion order
//! - [`RelationList`] - v1 eager-loaded relations
//! - [`DateRange`] / [`RelativeDateRange`] - v3 date windows
//! - [`Page`] - one page of a v3 list result

mod date_range;
mod encode;
mod filter;
mod page;
mod relations;
mod sort;

pub use date_range::DateRange;
pub use date_range::RelativeDateRange;
pub use encode::encode_v1;
pub use encode::DEFAULT_LIMIT;
pub use encode::DEFAULT_OFFSET;
pub use filter::FilterClause;
pub use filter::FilterSpec;
pub use filter::FilterValue;
pub use filter::Modifier;
pub use page::Page;
pub use relations::RelationList;
pub use sort::Direction;
pub use sort::SortSpec;
