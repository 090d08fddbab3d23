//! # Inventory Repository
//!
//! Whole-snapshot access to `estoque.json`.
//!
//! There is no per-product update: a movement reloads the snapshot, changes
//! one product in memory and writes the whole file back.

use tally_core::{InventorySnapshot, Product};
use tracing::debug;

use crate::error::StoreResult;
use crate::file::JsonFile;

/// Repository for the product stock snapshot.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    file: JsonFile,
}

impl InventoryRepository {
    pub fn new(file: JsonFile) -> Self {
        InventoryRepository { file }
    }

    /// Loads the snapshot from disk. Never cached.
    pub async fn load(&self) -> StoreResult<InventorySnapshot> {
        let snapshot: InventorySnapshot = self.file.load().await?;
        debug!(products = snapshot.products.len(), "Loaded inventory snapshot");
        Ok(snapshot)
    }

    /// Products in on-disk order.
    pub async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.load().await?.products)
    }

    /// Replaces the snapshot on disk.
    pub async fn save(&self, snapshot: &InventorySnapshot) -> StoreResult<()> {
        self.file.save(snapshot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn product(code: i64, stock: i64) -> Product {
        Product {
            product_code: code,
            description: format!("Produto {}", code),
            current_stock: stock,
        }
    }

    #[tokio::test]
    async fn test_save_then_list_keeps_order() {
        let dir = TempDir::new().unwrap();
        let repo = InventoryRepository::new(JsonFile::new(dir.path().join("estoque.json")));

        let snapshot = InventorySnapshot {
            products: vec![product(3, 1), product(1, 2), product(2, 3)],
        };
        repo.save(&snapshot).await.unwrap();

        let codes: Vec<_> = repo
            .list_products()
            .await
            .unwrap()
            .iter()
            .map(|p| p.product_code)
            .collect();
        assert_eq!(codes, [3, 1, 2]);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let repo = InventoryRepository::new(JsonFile::new(dir.path().join("estoque.json")));
        assert!(repo.load().await.unwrap_err().is_missing_file());
    }
}
