//! In-memory document store

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::types::Document;
use crate::DocumentStore;

#[derive(Debug, Clone)]
struct ProductEntry {
    product: Document,
    bookings: Vec<Document>,
}

/// Store keeping products and their bookings in insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<ProductEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product with its bookings, builder style
    pub fn with_product(self, product: Document, bookings: Vec<Document>) -> Self {
        self.insert_product(product, bookings);
        self
    }

    /// Add or replace a product and its bookings
    pub fn insert_product(&self, product: Document, bookings: Vec<Document>) {
        let mut products = match self.products.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(entry) = products.iter_mut().find(|e| e.product.id == product.id) {
            entry.product = product;
            entry.bookings = bookings;
        } else {
            products.push(ProductEntry { product, bookings });
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn products_by_branch(&self, branch_code: &str) -> StoreResult<Vec<Document>> {
        let products = self.products.read().map_err(|_| StoreError::Backend {
            message: "memory store lock poisoned".to_string(),
        })?;
        Ok(products
            .iter()
            .filter(|e| e.product.in_branch(branch_code))
            .map(|e| e.product.clone())
            .collect())
    }

    async fn bookings(&self, product_id: &str) -> StoreResult<Vec<Document>> {
        let products = self.products.read().map_err(|_| StoreError::Backend {
            message: "memory store lock poisoned".to_string(),
        })?;
        Ok(products
            .iter()
            .find(|e| e.product.id == product_id)
            .map(|e| e.bookings.clone())
            .unwrap_or_default())
    }
}
