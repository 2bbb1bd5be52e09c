//! Store persistence wiring: hydration round trips and the stock-clamp
//! checkout path, driven through a shared in-memory backend.

use vitrine_commerce::prelude::*;
use vitrine_kv::{MemoryBackend, Store};

fn product(id: &str, price_cents: i64, stock: u32) -> Product {
    Product::new(id, format!("Product {id}"))
        .with_price(Money::new(price_cents, Currency::USD))
        .with_stock(stock)
}

#[test]
fn add_to_cart_clamps_against_stock() {
    let mut cart = CartStore::open(Store::in_memory());
    let a = product("a", 10000, 2);
    let b = product("b", 5000, 0);

    // Requesting more than stock caps at the stock level.
    cart.add_item(&a, 3);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total_price().amount_cents, 20000);

    // An out-of-stock product never creates a line, not even a zero-quantity one.
    cart.add_item(&b, 1);
    assert_eq!(cart.cart().len(), 1);
    assert!(cart.cart().line(&ProductId::new("b")).is_none());
    assert_eq!(cart.total_price().amount_cents, 20000);
}

#[test]
fn cart_round_trips_through_storage() {
    let backend = MemoryBackend::new();

    {
        let mut cart = CartStore::open(Store::new(backend.clone()));
        cart.add_item(&product("a", 45000, 5), 2);
        cart.add_item(&product("b", 22000, 9), 1);
        cart.open_cart();
    }

    // A reload is a fresh store over the same durable state.
    let reloaded = CartStore::open(Store::new(backend.clone()));
    assert_eq!(reloaded.item_count(), 3);
    assert_eq!(reloaded.total_price().amount_cents, 112000);
    assert!(reloaded.is_open());

    // Hydrating twice from the same blob yields identical state.
    let again = CartStore::open(Store::new(backend));
    assert_eq!(again.cart(), reloaded.cart());
}

#[test]
fn wishlist_round_trips_through_storage() {
    let backend = MemoryBackend::new();

    {
        let mut wishlist = WishlistStore::open(Store::new(backend.clone()));
        wishlist.toggle(ProductId::new("a"));
        wishlist.toggle(ProductId::new("b"));
        wishlist.toggle(ProductId::new("a"));
    }

    let reloaded = WishlistStore::open(Store::new(backend));
    assert!(!reloaded.contains(&ProductId::new("a")));
    assert!(reloaded.contains(&ProductId::new("b")));
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn cart_and_wishlist_blobs_stay_separate() {
    let backend = MemoryBackend::new();

    let mut cart = CartStore::open(Store::new(backend.clone()));
    let mut wishlist = WishlistStore::open(Store::new(backend.clone()));

    cart.add_item(&product("a", 1000, 10), 1);
    wishlist.add(ProductId::new("b"));
    cart.clear();

    // Clearing the cart must not disturb the wishlist's blob.
    let wishlist_reloaded = WishlistStore::open(Store::new(backend.clone()));
    assert!(wishlist_reloaded.contains(&ProductId::new("b")));

    let cart_reloaded = CartStore::open(Store::new(backend));
    assert!(cart_reloaded.cart().is_empty());
}

#[test]
fn checkout_flow_against_in_memory_catalog() {
    let catalog = InMemoryCatalog::with_products(vec![
        product("a", 10000, 2),
        product("b", 5000, 0),
        product("c", 2500, 8),
    ]);

    let products = catalog.get_all().unwrap();
    let backend = MemoryBackend::new();
    let mut cart = CartStore::open(Store::new(backend.clone()));

    // The shopper filters, then adds what's shown.
    let affordable = filter_and_sort(
        &products,
        &FilterCriteria::new()
            .with_price_range(None, Some(Money::new(10000, Currency::USD)))
            .with_sort(SortKey::PriceAsc),
    );
    for item in &affordable {
        cart.add_item(item, 1);
    }

    // "b" is out of stock, so only "c" and "a" land in the cart.
    assert_eq!(cart.cart().len(), 2);
    assert_eq!(cart.total_price().amount_cents, 12500);

    // Checkout completion clears the cart; the empty state persists.
    cart.clear();
    let reloaded = CartStore::open(Store::new(backend));
    assert!(reloaded.cart().is_empty());
}
