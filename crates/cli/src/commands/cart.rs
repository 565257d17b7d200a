//! Cart subcommands.
//!
//! Every command hydrates the ledger from the persisted store, applies one
//! mutation, and persists the result back. This is a CLI, so it prints.

#![allow(clippy::print_stdout)]

use atelier_core::{DiscountPercent, ProductId};
use atelier_storefront::cart::CartLedger;
use atelier_storefront::config::StorefrontConfig;
use atelier_storefront::error::Result;
use atelier_storefront::models::Product;
use atelier_storefront::storage::FileStore;
use rust_decimal::Decimal;

/// Open the configured store and hydrate a ledger from it.
fn open() -> Result<(CartLedger, FileStore)> {
    let config = StorefrontConfig::from_env()?;
    let store = FileStore::open(config.cart_store_path())?;

    let mut cart = CartLedger::new();
    cart.restore(&store)?;
    Ok((cart, store))
}

fn print_cart(cart: &CartLedger) {
    if cart.is_empty() {
        println!("cart is empty");
    } else {
        for item in cart.items() {
            println!(
                "{:>3} x {} @ {} = {}",
                item.product_qty,
                item.product_name,
                item.product_price,
                item.line_total()
            );
        }
    }
    if !cart.discount().is_zero() {
        println!("discount: {}", cart.discount());
    }
    println!("total: {}", cart.total());
}

/// Print the persisted cart.
pub fn show() -> Result<()> {
    let (cart, _store) = open()?;
    print_cart(&cart);
    Ok(())
}

/// Add a product; an existing line with the same id gains quantity instead.
pub fn add(id: i32, name: &str, price: Decimal) -> Result<()> {
    let (mut cart, mut store) = open()?;
    cart.add(&Product::new(ProductId::new(id), name, price));
    cart.persist(&mut store)?;
    print_cart(&cart);
    Ok(())
}

/// Remove a line by product id.
pub fn remove(id: i32) -> Result<()> {
    let (mut cart, mut store) = open()?;
    cart.remove(ProductId::new(id));
    cart.persist(&mut store)?;
    print_cart(&cart);
    Ok(())
}

/// Set the quantity of an existing line.
pub fn set_quantity(id: i32, qty: u32) -> Result<()> {
    let (mut cart, mut store) = open()?;
    cart.set_quantity(ProductId::new(id), qty);
    cart.persist(&mut store)?;
    print_cart(&cart);
    Ok(())
}

/// Apply a discount percentage.
pub fn discount(percent: Decimal) -> Result<()> {
    let (mut cart, mut store) = open()?;
    cart.apply_discount(DiscountPercent::new(percent)?);
    cart.persist(&mut store)?;
    print_cart(&cart);
    Ok(())
}

/// Empty the cart and delete the persisted copy.
pub fn clear() -> Result<()> {
    let (mut cart, mut store) = open()?;
    cart.clear(&mut store)?;
    println!("cart cleared");
    Ok(())
}
