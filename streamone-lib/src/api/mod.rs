//! API operations

pub mod query;
pub mod v1;
pub mod v3;
