//! Catalog read-side views.
//!
//! The catalog itself lives behind [`ProductSource`]; the HTTP transport that
//! implements it is an external collaborator. [`Catalog`] wraps a source and
//! converts fetch failures to an empty result set so page-level callers never
//! see an error, only an empty catalog.

use tracing::warn;

use crate::models::Product;

/// Number of products in the "mini" view.
const MINI_LIMIT: usize = 5;

/// Number of products in the "small" view.
const SMALL_LIMIT: usize = 10;

/// Error raised by a product source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The source could not produce a product list.
    #[error("catalog fetch failed: {0}")]
    Fetch(String),
}

/// Something that can produce the product list.
///
/// Implemented by the network collaborator outside this crate; tests use
/// in-memory stubs.
pub trait ProductSource {
    /// Fetch all products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the product list cannot be produced.
    fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Catalog views over a [`ProductSource`].
///
/// A failed fetch is logged and yields an empty list; errors are never
/// propagated to callers.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    source: S,
}

impl<S: ProductSource> Catalog<S> {
    /// Wrap a product source.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// All products, or empty on fetch failure.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.fetch()
    }

    /// The first ten products.
    #[must_use]
    pub fn products_small(&self) -> Vec<Product> {
        let mut products = self.fetch();
        products.truncate(SMALL_LIMIT);
        products
    }

    /// The first five products.
    #[must_use]
    pub fn products_mini(&self) -> Vec<Product> {
        let mut products = self.fetch();
        products.truncate(MINI_LIMIT);
        products
    }

    fn fetch(&self) -> Vec<Product> {
        match self.source.fetch_products() {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "Failed to fetch products");
                Vec::new()
            }
        }
    }
}
