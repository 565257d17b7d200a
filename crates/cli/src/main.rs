//! Atelier CLI - Cart inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the persisted cart
//! atelier-cli cart show
//!
//! # Add a product (repeat to increment quantity)
//! atelier-cli cart add --id 7 --name "Silk Scarf" --price 120.00
//!
//! # Change a line quantity (0 removes the line)
//! atelier-cli cart qty --id 7 --qty 3
//!
//! # Apply a discount percentage
//! atelier-cli cart discount --percent 10
//!
//! # Remove a line / empty the cart
//! atelier-cli cart remove --id 7
//! atelier-cli cart clear
//! ```
//!
//! The cart is persisted under `$STOREFRONT_DATA_DIR/cart-store.json`
//! (default `data/cart-store.json`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "atelier-cli")]
#[command(author, version, about = "Atelier CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and mutate the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart lines, discount, and total
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        #[arg(long)]
        id: i32,

        /// Product display name
        #[arg(long)]
        name: String,

        /// Unit price (e.g. 120.00)
        #[arg(long)]
        price: Decimal,
    },
    /// Remove a line from the cart
    Remove {
        /// Product ID
        #[arg(long)]
        id: i32,
    },
    /// Set the quantity of an existing line (0 removes it)
    Qty {
        /// Product ID
        #[arg(long)]
        id: i32,

        /// New quantity
        #[arg(long)]
        qty: u32,
    },
    /// Apply a discount percentage (0-100)
    Discount {
        /// Percentage to apply
        #[arg(long)]
        percent: Decimal,
    },
    /// Empty the cart and delete the persisted copy
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> atelier_storefront::error::Result<()> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(),
            CartAction::Add { id, name, price } => commands::cart::add(id, &name, price),
            CartAction::Remove { id } => commands::cart::remove(id),
            CartAction::Qty { id, qty } => commands::cart::set_quantity(id, qty),
            CartAction::Discount { percent } => commands::cart::discount(percent),
            CartAction::Clear => commands::cart::clear(),
        },
    }
}
