//! Atelier Core - Shared types library.
//!
//! This crate provides common types used across all Atelier components:
//! - `storefront` - Cart ledger, storage, and catalog views
//! - `cli` - Command-line tools for inspecting and mutating the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and discount percentages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
