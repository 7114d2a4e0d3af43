//! Document store access for product and booking records
//!
//! Products live in a flat collection partitioned by branch code; each
//! product owns a nested collection of bookings.

use async_trait::async_trait;
use std::sync::Arc;

pub mod error;
pub mod types;
pub mod memory;
pub mod json_dir;

pub use error::{StoreError, StoreResult};
pub use types::{Document, BRANCH_CODE_FIELD};
pub use memory::MemoryStore;
pub use json_dir::JsonDirStore;

// ==================== Store Trait ====================

/// Store reference type
pub type StoreRef = Arc<dyn DocumentStore>;

/// Read contract of the product document store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All product documents whose branch code equals `branch_code`
    async fn products_by_branch(&self, branch_code: &str) -> StoreResult<Vec<Document>>;

    /// Every booking document nested under a product, unpaginated
    async fn bookings(&self, product_id: &str) -> StoreResult<Vec<Document>>;
}
