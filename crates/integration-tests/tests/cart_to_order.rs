//! End-to-end flow across the data layer: catalog documents feed the cart,
//! the cart persists onto a user document, and its lines become order items.

#![allow(clippy::unwrap_used)]

use clementine_cart::{Cart, CartItem};
use clementine_core::{CategoryId, Email, Price, ProductId, UserId};
use clementine_models::{Order, OrderItem, Product, ProductImage, ShippingAddress, User};

fn catalog() -> (Product, Product) {
    let mut shoes = Product::new(
        ProductId::new("prod-1"),
        "Running Shoes",
        "running-shoes",
        "Lightweight everyday running shoes.",
        Price::from_cents(8999).unwrap(),
        10,
        CategoryId::new("cat-footwear"),
    );
    shoes.images.push(ProductImage {
        url: "https://cdn.example.com/shoes.jpg".to_owned(),
        alt: Some("Running Shoes".to_owned()),
    });

    let tshirt = Product::new(
        ProductId::new("prod-2"),
        "Cotton T-Shirt",
        "cotton-t-shirt",
        "Plain cotton t-shirt.",
        Price::from_cents(2999).unwrap(),
        15,
        CategoryId::new("cat-apparel"),
    );

    (shoes, tshirt)
}

fn shipping_address() -> ShippingAddress {
    ShippingAddress {
        name: "Test Shopper".to_owned(),
        street: "1 Main St".to_owned(),
        city: "Springfield".to_owned(),
        state: "IL".to_owned(),
        zip_code: "62701".to_owned(),
        country: "US".to_owned(),
        phone: "+1 555 0100".to_owned(),
    }
}

#[test]
fn catalog_snapshots_flow_into_an_order() {
    let (shoes, tshirt) = catalog();
    shoes.validate().unwrap();
    tshirt.validate().unwrap();

    // A session: one pair of shoes, three t-shirts.
    let mut cart = Cart::new();
    cart.add(shoes.snapshot());
    cart.add(tshirt.snapshot());
    cart.set_quantity(&ProductId::new("prod-2"), 3);

    assert_eq!(cart.item_count(), 4);
    // 89.99 + 3 * 29.99
    assert_eq!(cart.total(), Price::from_cents(17_996).unwrap());

    // Checkout hand-off: cart lines become order items; the captured name,
    // image, and price travel with them.
    let items: Vec<OrderItem> = cart.items().iter().map(OrderItem::from).collect();
    let order = Order::new(
        Order::generate_order_number(),
        UserId::new("u-1"),
        items,
        shipping_address(),
        "card",
        cart.total(),
        Price::ZERO,
        Price::ZERO,
    );

    order.validate().unwrap();
    assert_eq!(order.line_subtotal(), cart.total());
    assert_eq!(order.total, cart.total());
    let first = order.items.first().unwrap();
    assert_eq!(first.name, "Running Shoes");
    assert_eq!(first.image_url, "https://cdn.example.com/shoes.jpg");
}

#[test]
fn cart_survives_a_persistence_round_trip() {
    let (shoes, tshirt) = catalog();

    let mut cart = Cart::new();
    cart.add(shoes.snapshot());
    cart.add(shoes.snapshot());
    cart.add(tshirt.snapshot());

    // The cart has no storage of its own: the session layer snapshots the
    // items, serializes them, and rehydrates later.
    let json = serde_json::to_string(cart.items()).unwrap();
    let items: Vec<CartItem> = serde_json::from_str(&json).unwrap();
    let rehydrated = Cart::from_items(items);

    assert_eq!(rehydrated, cart);
    assert_eq!(rehydrated.total(), cart.total());
}

#[test]
fn rehydration_reestablishes_invariants_on_tampered_items() {
    let (shoes, _) = catalog();

    let mut cart = Cart::new();
    cart.add(shoes.snapshot());

    // Tamper with the persisted form: duplicate the line and inflate its
    // quantity beyond the captured stock ceiling.
    let mut json: Vec<serde_json::Value> =
        serde_json::from_str(&serde_json::to_string(cart.items()).unwrap()).unwrap();
    let mut duplicate = json.first().unwrap().clone();
    duplicate["quantity"] = serde_json::json!(99);
    json.push(duplicate);

    let items: Vec<CartItem> = serde_json::from_value(serde_json::Value::Array(json)).unwrap();
    let rehydrated = Cart::from_items(items);

    assert_eq!(rehydrated.len(), 1);
    let item = rehydrated.get(&ProductId::new("prod-1")).unwrap();
    assert!(item.quantity() >= 1);
    assert!(item.quantity() <= item.stock_limit());
}

#[test]
fn saved_cart_lines_validate_on_the_user_document() {
    let (_, tshirt) = catalog();

    let mut cart = Cart::new();
    cart.add(tshirt.snapshot());
    cart.add(tshirt.snapshot());

    let mut user = User::new(
        UserId::new("u-1"),
        "Test Shopper",
        Email::parse("shopper@example.com").unwrap(),
        "$argon2id$stub",
    );
    user.save_cart(&cart);
    user.validate().unwrap();

    assert_eq!(user.cart_items.len(), 1);
    assert_eq!(user.cart_items.first().unwrap().quantity, 2);

    // Clearing the live cart and saving again empties the persisted lines.
    cart.clear();
    user.save_cart(&cart);
    assert!(user.cart_items.is_empty());
}
