//! # Sales Repository
//!
//! Read-only access to the sales dataset (`vendas.json`).

use tally_core::{Sale, SalesDataset};
use tracing::debug;

use crate::error::StoreResult;
use crate::file::JsonFile;

/// Repository for the static sales dataset.
#[derive(Debug, Clone)]
pub struct SalesRepository {
    file: JsonFile,
}

impl SalesRepository {
    pub fn new(file: JsonFile) -> Self {
        SalesRepository { file }
    }

    /// Loads every sale in dataset order.
    pub async fn load_all(&self) -> StoreResult<Vec<Sale>> {
        let dataset: SalesDataset = self.file.load().await?;
        debug!(count = dataset.sales.len(), "Loaded sales dataset");
        Ok(dataset.sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_all() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vendas.json");
        std::fs::write(
            &path,
            r#"{"vendas": [{"vendedor": "A", "valor": 50}, {"vendedor": "B", "valor": 600.0}]}"#,
        )
        .unwrap();

        let sales = SalesRepository::new(JsonFile::new(&path)).load_all().await.unwrap();
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[1].salesperson, "B");
        assert_eq!(sales[1].amount, tally_core::Money::new(600, 0));
    }

    #[tokio::test]
    async fn test_out_of_range_amount_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vendas.json");
        std::fs::write(&path, r#"{"vendas": [{"vendedor": "A", "valor": 1e30}]}"#).unwrap();

        let err = SalesRepository::new(JsonFile::new(&path))
            .load_all()
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vendas.json");
        std::fs::write(&path, r#"[{"vendedor": "A", "valor": 50}]"#).unwrap();

        let err = SalesRepository::new(JsonFile::new(&path))
            .load_all()
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
