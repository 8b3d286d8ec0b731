//! Product catalog over an async store.
//!
//! Entity validation, storage and orchestration are all written as railway
//! chains; only `main` looks at the final outcome.
//!
//! Run with: `cargo run --example product_catalog --features async`

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use railway_rail::prelude_async::*;

#[derive(Debug, Clone)]
struct Product {
    id: u64,
    name: String,
    price: f64,
    stock: i64,
}

impl Product {
    fn create(name: &str, price: f64, stock: i64) -> Result<Product> {
        create(Product { id: 0, name: String::new(), price: 0.0, stock: 0 })
            .bind(|p| p.update_price(price))
            .bind(|p| p.update_stock(stock))
            .bind(|p| p.rename(name))
    }

    fn update_price(self, price: f64) -> Result<Product> {
        create(price)
            .ensure(|p| *p >= 0.0, Error::new("INVALID_PRICE", "Price cannot be negative."))
            .map(|price| Product { price, ..self })
    }

    fn update_stock(self, quantity: i64) -> Result<Product> {
        let current = self.stock;
        create(quantity)
            .ensure(|q| current + q >= 0, Error::new("INSUFFICIENT_STOCK", "Not enough stock available."))
            .map(|q| Product { stock: current + q, ..self })
    }

    fn rename(self, name: &str) -> Result<Product> {
        create(name)
            .ensure(|n| !n.trim().is_empty(), Error::new("INVALID_NAME", "Name cannot be empty."))
            .map(|n| Product { name: n.to_owned(), ..self })
    }
}

/// In-memory store that answers after a short delay, standing in for I/O.
#[derive(Clone, Default)]
struct ProductStore {
    inner: Arc<Mutex<(u64, HashMap<u64, Product>)>>,
}

impl ProductStore {
    async fn latency() {
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    async fn get_by_id(self, id: u64) -> Result<Product> {
        Self::latency().await;
        let found = self.inner.lock().unwrap().1.get(&id).cloned();
        found.or_fail_with(|| rail_error!("PRODUCT_NOT_FOUND", "Product with ID {} was not found.", id))
    }

    async fn add(self, product: Product) -> Result<Product> {
        Self::latency().await;
        let mut guard = self.inner.lock().unwrap();
        guard.0 += 1;
        let product = Product { id: guard.0, ..product };
        guard.1.insert(product.id, product.clone());
        success(product)
    }

    async fn update(self, product: Product) -> Result<Product> {
        Self::latency().await;
        let mut guard = self.inner.lock().unwrap();
        match guard.1.get_mut(&product.id) {
            Some(slot) => {
                *slot = product.clone();
                success(product)
            },
            None => fail!("PRODUCT_NOT_FOUND", "Product with ID {} was not found.", product.id),
        }
    }
}

struct ProductService {
    store: ProductStore,
}

impl ProductService {
    async fn create(&self, name: &str, price: f64, stock: i64) -> Result<Product> {
        let store = self.store.clone();
        lift(Product::create(name, price, stock))
            .bind_async(move |p| store.add(p))
            .await
    }

    async fn update_stock(&self, id: u64, quantity: i64) -> Result<Product> {
        let store = self.store.clone();
        self.store
            .clone()
            .get_by_id(id)
            .bind_async(move |p| lift(p.update_stock(quantity)))
            .bind_async(move |p| store.update(p))
            .await
    }

    async fn rename(&self, id: u64, name: String) -> Result<Product> {
        let store = self.store.clone();
        self.store
            .clone()
            .get_by_id(id)
            .bind_async(move |p| lift(p.rename(&name)))
            .ensure_async(
                |p| {
                    let name = p.name.clone();
                    async move { !name.eq_ignore_ascii_case("admin") }
                },
                Error::new("RESERVED_NAME", "That name is reserved."),
            )
            .bind_async(move |p| store.update(p))
            .await
    }
}

fn report(label: &str, outcome: Result<Product>) {
    let line = outcome.match_with(
        |p| format!("{} #{} ({:.2}, stock {})", p.name, p.id, p.price, p.stock),
        |e| format!("error: {}", e),
    );
    println!("{:<24} {}", label, line);
}

#[tokio::main]
async fn main() {
    let service = ProductService { store: ProductStore::default() };

    for (name, price, stock) in [("Laptop", 999.99, 10), ("Mouse", 29.99, 50), ("Keyboard", 79.99, 25)] {
        report("seed", service.create(name, price, stock).await);
    }

    report("create negative price", service.create("Charger", -24.99, 40).await);
    report("restock", service.update_stock(2, 5).await);
    report("oversell", service.update_stock(1, -11).await);
    report("rename", service.rename(3, "Mechanical Keyboard".to_string()).await);
    report("rename reserved", service.rename(3, "Admin".to_string()).await);
    report("rename missing", service.rename(99, "Ghost".to_string()).await);
}
