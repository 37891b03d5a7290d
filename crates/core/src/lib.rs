//! Storage-agnostic domain vocabulary for the storefront catalog.
//!
//! Nothing in this crate talks to a database; the persistence layer and the
//! HTTP surface both build on these types.

pub mod catalog;
pub mod error;
pub mod principal;
pub mod roles;
pub mod session;
pub mod types;
