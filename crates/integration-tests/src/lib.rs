//! Integration tests for Atelier.
//!
//! The tests under `tests/` exercise the cart ledger against the file-backed
//! store: persistence round trips across reopen, clearing, and recovery from
//! malformed persisted data.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atelier-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use atelier_core::ProductId;
use atelier_storefront::models::Product;
use rust_decimal::Decimal;

/// Build a product with one extra catalog field, as the remote catalog
/// would serve it.
#[must_use]
pub fn sample_product(id: i32, name: &str, price: Decimal) -> Product {
    let mut product = Product::new(ProductId::new(id), name, price);
    product.extra.insert(
        "category".to_string(),
        serde_json::Value::String("accessories".to_string()),
    );
    product
}
