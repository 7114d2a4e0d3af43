//! Directory-backed document store
//!
//! Layout under the root directory:
//!
//! ```text
//! products/<product-id>.json
//! products/<product-id>/bookings/<booking-id>.json
//! ```
//!
//! Each file holds one JSON object with the document's fields. The document
//! id is the file stem.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::types::Document;
use crate::DocumentStore;

/// Store reading JSON documents from a directory tree
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn products_dir(&self) -> PathBuf {
        self.root.join("products")
    }

    /// Expand `<dir>/*.json` into a sorted list of files
    fn json_files(dir: &Path) -> StoreResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let pattern = format!("{}/*.json", glob::Pattern::escape(&dir.to_string_lossy()));
        let paths = glob::glob(&pattern).map_err(|e| StoreError::Backend {
            message: e.to_string(),
        })?;
        let mut files = Vec::new();
        for entry in paths {
            let path = entry.map_err(glob::GlobError::into_error)?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    async fn read_document(path: &Path) -> StoreResult<Document> {
        let location = path.to_string_lossy().to_string();
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| StoreError::InvalidDocument {
                location: location.clone(),
                message: "file has no name".to_string(),
            })?;

        let content = tokio::fs::read_to_string(path).await?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| StoreError::InvalidDocument {
                location: location.clone(),
                message: e.to_string(),
            })?;

        Document::from_value(id, value).ok_or_else(|| StoreError::InvalidDocument {
            location,
            message: "expected a JSON object".to_string(),
        })
    }
}

#[async_trait]
impl DocumentStore for JsonDirStore {
    async fn products_by_branch(&self, branch_code: &str) -> StoreResult<Vec<Document>> {
        let mut products = Vec::new();
        for path in Self::json_files(&self.products_dir())? {
            let doc = Self::read_document(&path).await?;
            if doc.in_branch(branch_code) {
                products.push(doc);
            }
        }
        log::debug!(
            "Read {} products for branch {} from {}",
            products.len(),
            branch_code,
            self.root.display()
        );
        Ok(products)
    }

    async fn bookings(&self, product_id: &str) -> StoreResult<Vec<Document>> {
        let dir = self.products_dir().join(product_id).join("bookings");
        let mut bookings = Vec::new();
        for path in Self::json_files(&dir)? {
            bookings.push(Self::read_document(&path).await?);
        }
        Ok(bookings)
    }
}
