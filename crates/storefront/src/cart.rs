//! Cart ledger: line items, discount, and the derived total.
//!
//! The ledger is a plain state object owned by one controller. Mutations are
//! synchronous and re-derive the total before returning; persistence is an
//! explicit, separately invoked operation against a [`KeyValueStore`], never
//! an implicit side effect of a mutation.

use atelier_core::{DiscountPercent, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Product;
use crate::storage::{KeyValueStore, StorageError};

/// Storage keys for persisted cart state.
pub mod keys {
    /// Key for the JSON-serialized line item list.
    pub const CART: &str = "cart";

    /// Key for the stringified discount percentage.
    pub const DISCOUNT: &str = "discount";
}

/// One product entry in the cart with its quantity.
///
/// Uniquely keyed by `id` within a cart. Quantity is at least 1; a line that
/// would reach quantity 0 is removed from the cart, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product ID.
    pub id: ProductId,
    /// Display name, captured when the product was added.
    pub product_name: String,
    /// Unit price, captured when the product was added.
    pub product_price: Decimal,
    /// Quantity in the cart.
    pub product_qty: u32,
    /// Remaining catalog fields, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LineItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product_price * Decimal::from(self.product_qty)
    }
}

impl From<&Product> for LineItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name.clone(),
            product_price: product.product_price,
            product_qty: 1,
            extra: product.extra.clone(),
        }
    }
}

/// The cart ledger: an ordered list of line items, a discount percentage,
/// and a derived total.
///
/// Invariants:
/// - at most one [`LineItem`] per product id;
/// - `total == (Σ price × qty × (1 − discount/100))` rounded to 2 decimal
///   places, recomputed after every mutation;
/// - `discount` is standalone state and persists independently of the items.
///
/// # Example
///
/// ```
/// use atelier_core::{DiscountPercent, ProductId};
/// use atelier_storefront::cart::CartLedger;
/// use atelier_storefront::models::Product;
/// use atelier_storefront::storage::MemoryStore;
/// use rust_decimal::Decimal;
///
/// let scarf = Product::new(ProductId::new(1), "Silk Scarf", Decimal::from(10));
///
/// let mut cart = CartLedger::new();
/// cart.add(&scarf);
/// cart.add(&scarf);
/// cart.apply_discount(DiscountPercent::new(Decimal::from(10)).unwrap());
/// assert_eq!(cart.total(), Decimal::from(18));
///
/// let mut store = MemoryStore::new();
/// cart.persist(&mut store).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartLedger {
    items: Vec<LineItem>,
    discount: DiscountPercent,
    total: Decimal,
}

impl CartLedger {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The derived total. Never independently settable.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// The discount currently applied.
    #[must_use]
    pub const fn discount(&self) -> DiscountPercent {
        self.discount
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a product to the cart.
    ///
    /// If a line with the same id exists its quantity is incremented by 1 and
    /// its captured price is kept, ignoring any new price on the input.
    /// Otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.product_qty += 1;
        } else {
            self.items.push(LineItem::from(product));
        }
        self.recompute_total();
    }

    /// Remove the line with the given id. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|i| i.id != id);
        self.recompute_total();
    }

    /// Set the quantity of an existing line. No-op if the id is absent.
    ///
    /// A quantity of 0 removes the line; zero-quantity items are never
    /// retained.
    pub fn set_quantity(&mut self, id: ProductId, qty: u32) {
        if qty == 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.product_qty = qty;
            self.recompute_total();
        }
    }

    /// Apply a discount percentage.
    ///
    /// Range validation lives in [`DiscountPercent::new`], so this never
    /// produces a total outside `[0, subtotal]`.
    pub fn apply_discount(&mut self, discount: DiscountPercent) {
        self.discount = discount;
        self.recompute_total();
    }

    /// Re-derive the total from the current items and discount.
    ///
    /// Pure function of current state; idempotent. Every mutation calls this
    /// before returning, so it only needs to be invoked directly after
    /// constructing state by hand.
    pub fn recompute_total(&mut self) {
        let subtotal: Decimal = self.items.iter().map(LineItem::line_total).sum();
        self.total = (subtotal * self.discount.multiplier()).round_dp(2);
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write items and discount to the store, overwriting prior values.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the store write fails.
    pub fn persist(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        let items = serde_json::to_string(&self.items)?;
        store.set(keys::CART, &items)?;
        store.set(keys::DISCOUNT, &self.discount.as_decimal().to_string())?;
        Ok(())
    }

    /// Hydrate the cart from the store.
    ///
    /// If no item list is persisted the cart is left untouched. Malformed
    /// item data falls back to an empty cart, and a missing, unparsable, or
    /// out-of-range discount falls back to zero; both are logged, neither is
    /// an error. Zero-quantity lines in persisted data are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] only if the store itself cannot be read.
    pub fn restore(&mut self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        let Some(raw_items) = store.get(keys::CART)? else {
            return Ok(());
        };

        self.items = match serde_json::from_str::<Vec<LineItem>>(&raw_items) {
            Ok(items) => items.into_iter().filter(|i| i.product_qty > 0).collect(),
            Err(e) => {
                warn!(error = %e, "Discarding malformed persisted cart");
                Vec::new()
            }
        };

        self.discount = store
            .get(keys::DISCOUNT)?
            .and_then(|raw| match raw.parse::<Decimal>().map(DiscountPercent::new) {
                Ok(Ok(discount)) => Some(discount),
                _ => {
                    warn!(value = %raw, "Discarding malformed persisted discount");
                    None
                }
            })
            .unwrap_or(DiscountPercent::ZERO);

        self.recompute_total();
        Ok(())
    }

    /// Reset the cart and delete the persisted copy.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store write fails.
    pub fn clear(&mut self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        self.items.clear();
        self.discount = DiscountPercent::ZERO;
        self.total = Decimal::ZERO;
        store.remove(keys::CART)?;
        store.remove(keys::DISCOUNT)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn product(id: i32, price: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("product-{id}"),
            Decimal::from(price),
        )
    }

    fn percent(value: i64) -> DiscountPercent {
        DiscountPercent::new(Decimal::from(value)).unwrap()
    }

    #[test]
    fn test_add_distinct_products_appends_in_order() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 10));
        cart.add(&product(2, 20));
        cart.add(&product(3, 5));

        assert_eq!(cart.product_count(), 3);
        let ids: Vec<i32> = cart.items().iter().map(|i| i.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(cart.total(), Decimal::from(35));
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 10));
        cart.add(&product(1, 10));
        cart.add(&product(1, 10));

        assert_eq!(cart.product_count(), 1);
        assert_eq!(cart.items()[0].product_qty, 3);
        assert_eq!(cart.total(), Decimal::from(30));
    }

    #[test]
    fn test_add_existing_id_keeps_captured_price() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 10));
        // Same id, new price on the input: the captured price wins.
        cart.add(&product(1, 99));

        assert_eq!(cart.items()[0].product_price, Decimal::from(10));
        assert_eq!(cart.items()[0].product_qty, 2);
        assert_eq!(cart.total(), Decimal::from(20));
    }

    #[test]
    fn test_remove_absent_id_leaves_state_unchanged() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 10));
        let before = cart.clone();

        cart.remove(ProductId::new(42));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 10));

        cart.set_quantity(ProductId::new(1), 5);
        assert_eq!(cart.items()[0].product_qty, 5);
        assert_eq!(cart.total(), Decimal::from(50));

        // Absent id is a no-op.
        cart.set_quantity(ProductId::new(42), 3);
        assert_eq!(cart.total(), Decimal::from(50));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 10));
        cart.add(&product(2, 20));

        cart.set_quantity(ProductId::new(1), 0);
        assert_eq!(cart.product_count(), 1);
        assert_eq!(cart.items()[0].id, ProductId::new(2));
        assert_eq!(cart.total(), Decimal::from(20));
    }

    #[test]
    fn test_worked_example() {
        // add A (price 10) -> 10; add A -> qty 2, 20; 10% off -> 18; remove -> 0
        let mut cart = CartLedger::new();
        let a = product(1, 10);

        cart.add(&a);
        assert_eq!(cart.total(), Decimal::from(10));

        cart.add(&a);
        assert_eq!(cart.items()[0].product_qty, 2);
        assert_eq!(cart.total(), Decimal::from(20));

        cart.apply_discount(percent(10));
        assert_eq!(cart.total(), Decimal::from(18));

        cart.remove(a.id);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_discount_survives_item_changes() {
        let mut cart = CartLedger::new();
        cart.apply_discount(percent(50));
        cart.add(&product(1, 10));
        assert_eq!(cart.total(), Decimal::from(5));

        cart.remove(ProductId::new(1));
        assert!(cart.is_empty());
        // Discount is standalone state, not derived from items.
        assert_eq!(cart.discount(), percent(50));
    }

    #[test]
    fn test_total_rounds_to_two_decimal_places() {
        let mut cart = CartLedger::new();
        let odd = Product::new(ProductId::new(1), "odd", Decimal::new(1999, 2)); // 19.99
        cart.add(&odd);
        cart.apply_discount(percent(15));
        // 19.99 * 0.85 = 16.9915 -> 16.99
        assert_eq!(cart.total(), Decimal::new(1699, 2));
    }

    #[test]
    fn test_recompute_total_is_idempotent() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 7));
        cart.apply_discount(percent(33));

        let once = cart.total();
        cart.recompute_total();
        assert_eq!(cart.total(), once);
    }

    #[test]
    fn test_persist_restore_roundtrip() {
        let mut store = MemoryStore::new();

        let mut cart = CartLedger::new();
        cart.add(&product(1, 10));
        cart.add(&product(2, 25));
        cart.set_quantity(ProductId::new(2), 4);
        cart.apply_discount(percent(10));
        cart.persist(&mut store).unwrap();

        let mut restored = CartLedger::new();
        restored.restore(&store).unwrap();

        assert_eq!(restored.items(), cart.items());
        assert_eq!(restored.discount(), cart.discount());
        assert_eq!(restored.total(), cart.total());
    }

    #[test]
    fn test_restore_with_empty_store_leaves_state_untouched() {
        let store = MemoryStore::new();
        let mut cart = CartLedger::new();
        cart.restore(&store).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_restore_malformed_cart_falls_back_to_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::CART, "definitely not json").unwrap();
        store.set(keys::DISCOUNT, "10").unwrap();

        let mut cart = CartLedger::new();
        cart.restore(&store).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.discount(), percent(10));
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_restore_malformed_discount_falls_back_to_zero() {
        let mut store = MemoryStore::new();
        store.set(keys::CART, "[]").unwrap();
        store.set(keys::DISCOUNT, "not a number").unwrap();

        let mut cart = CartLedger::new();
        cart.restore(&store).unwrap();
        assert!(cart.discount().is_zero());
    }

    #[test]
    fn test_restore_out_of_range_discount_falls_back_to_zero() {
        let mut store = MemoryStore::new();
        store.set(keys::CART, "[]").unwrap();
        store.set(keys::DISCOUNT, "250").unwrap();

        let mut cart = CartLedger::new();
        cart.restore(&store).unwrap();
        assert!(cart.discount().is_zero());
    }

    #[test]
    fn test_restore_drops_zero_quantity_lines() {
        let mut store = MemoryStore::new();
        let raw = r#"[
            {"id": 1, "product_name": "a", "product_price": "10", "product_qty": 0},
            {"id": 2, "product_name": "b", "product_price": "5", "product_qty": 2}
        ]"#;
        store.set(keys::CART, raw).unwrap();

        let mut cart = CartLedger::new();
        cart.restore(&store).unwrap();

        assert_eq!(cart.product_count(), 1);
        assert_eq!(cart.items()[0].id, ProductId::new(2));
        assert_eq!(cart.total(), Decimal::from(10));
    }

    #[test]
    fn test_clear_resets_state_and_storage() {
        let mut store = MemoryStore::new();
        let mut cart = CartLedger::new();
        cart.add(&product(1, 10));
        cart.apply_discount(percent(10));
        cart.persist(&mut store).unwrap();

        cart.clear(&mut store).unwrap();

        assert!(cart.is_empty());
        assert!(cart.discount().is_zero());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(store.get(keys::CART).unwrap(), None);
        assert_eq!(store.get(keys::DISCOUNT).unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_extra_product_fields_flow_into_line_items() {
        let mut scarf = product(1, 10);
        scarf.extra.insert(
            "category".to_string(),
            serde_json::Value::String("accessories".to_string()),
        );

        let mut cart = CartLedger::new();
        cart.add(&scarf);

        let mut store = MemoryStore::new();
        cart.persist(&mut store).unwrap();

        let mut restored = CartLedger::new();
        restored.restore(&store).unwrap();
        assert_eq!(
            restored.items()[0].extra.get("category").and_then(|v| v.as_str()),
            Some("accessories")
        );
    }
}
