//! StreamOne ION API client library
//!
//! An async Rust client for the StreamOne ION platform, covering both the
//! deprecated v1 filter/sort API and the v3 resource-oriented API.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod model;

mod client;

pub use client::*;
pub use config::Config;
