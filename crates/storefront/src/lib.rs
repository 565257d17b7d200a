//! Atelier Storefront library.
//!
//! This crate provides the storefront's cart state management as a library:
//! the cart ledger, its durable key-value storage collaborator, and the
//! catalog read-side views. Page rendering and the catalog's HTTP transport
//! live outside this crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
