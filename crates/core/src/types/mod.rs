//! Core types for Atelier.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod discount;
pub mod id;

pub use discount::{DiscountError, DiscountPercent};
pub use id::*;
