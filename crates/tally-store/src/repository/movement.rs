//! # Movement Repository
//!
//! Access to the movement history file (`movimentacoes.json`), a bare JSON
//! array of movements in insertion order.

use tally_core::Movement;
use tracing::debug;

use crate::error::StoreResult;
use crate::file::JsonFile;

/// Repository for the movement history.
#[derive(Debug, Clone)]
pub struct MovementRepository {
    file: JsonFile,
}

impl MovementRepository {
    pub fn new(file: JsonFile) -> Self {
        MovementRepository { file }
    }

    pub fn file(&self) -> &JsonFile {
        &self.file
    }

    /// Loads the whole history.
    pub async fn load_all(&self) -> StoreResult<Vec<Movement>> {
        let movements: Vec<Movement> = self.file.load().await?;
        debug!(count = movements.len(), "Loaded movement history");
        Ok(movements)
    }

    /// Replaces the history on disk.
    pub async fn save_all(&self, movements: &[Movement]) -> StoreResult<()> {
        self.file.save(movements).await
    }
}
