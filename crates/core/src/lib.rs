//! Shared domain types, errors, and field rules for the Tuna Piano catalog.

pub mod catalog;
pub mod error;
pub mod types;
