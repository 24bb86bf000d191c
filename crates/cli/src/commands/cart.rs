//! Cart walkthrough command.
//!
//! A scripted end-to-end pass over the cart store with two seeded products,
//! the command-line counterpart of a storefront's cart test page. Each step
//! logs the cart's derived state so stock clamping and the quantity floor
//! are visible in the output.

use clementine_cart::{Cart, InvalidItemError, ProductSnapshot};
use clementine_core::ProductId;
use rust_decimal::Decimal;

/// Errors that can occur during the walkthrough.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Seeded product data failed validation.
    #[error("invalid seed product: {0}")]
    InvalidSeed(#[from] InvalidItemError),
}

fn report(step: &str, cart: &Cart) {
    tracing::info!(
        lines = cart.len(),
        items = cart.item_count(),
        total = %cart.total(),
        "{step}"
    );
    for item in cart.items() {
        tracing::info!(
            "  {} x{} @ {} = {}",
            item.product.name,
            item.quantity(),
            item.product.unit_price,
            item.line_total()
        );
    }
}

/// Run the scripted walkthrough.
///
/// # Errors
///
/// Returns [`DemoError`] if the seeded products fail boundary validation
/// (which would indicate a bug in the seed data).
pub fn demo() -> Result<(), DemoError> {
    let shoes = ProductSnapshot::new(
        "prod-1",
        "Running Shoes",
        "running-shoes",
        "https://cdn.example.com/shoes.jpg",
        Decimal::new(8999, 2),
        10,
    )?;
    let tshirt = ProductSnapshot::new(
        "prod-2",
        "Cotton T-Shirt",
        "cotton-t-shirt",
        "https://cdn.example.com/tshirt.jpg",
        Decimal::new(2999, 2),
        15,
    )?;
    let shoes_id = ProductId::new("prod-1");
    let tshirt_id = ProductId::new("prod-2");

    let mut cart = Cart::new();
    report("empty cart", &cart);

    cart.add(shoes.clone());
    cart.add(tshirt);
    report("added one of each product", &cart);

    cart.add(shoes);
    report("added the shoes again (bumps quantity)", &cart);

    for _ in 0..10 {
        cart.increment(&shoes_id);
    }
    report("incremented shoes past the stock ceiling (caps at 10)", &cart);

    cart.decrement(&tshirt_id);
    report("decremented the t-shirt at quantity 1 (floor, no-op)", &cart);

    cart.set_quantity(&tshirt_id, 3);
    report("set t-shirt quantity to 3", &cart);

    cart.remove(&shoes_id);
    report("removed the shoes", &cart);

    cart.clear();
    report("cleared the cart", &cart);

    Ok(())
}
