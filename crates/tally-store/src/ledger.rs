//! # Inventory Ledger
//!
//! The single mutating path of the system: apply a stock movement, persist
//! the new snapshot and the grown history, and keep the in-memory history in
//! step with the file.
//!
//! ## Apply Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  apply_movement(request)                                               │
//! │    │                                                                    │
//! │    ▼  validate (no lock)             → InvalidInput                     │
//! │    ▼  tokio::spawn                   runs to the end even if dropped    │
//! │    ▼  apply_lock.lock()              one movement at a time             │
//! │    ▼  reload estoque.json            → Io / Parse                       │
//! │    ▼  stock::apply_movement          → NotFound / InsufficientStock     │
//! │    ▼  save estoque.json              → Io (nothing recorded)            │
//! │    ▼  save movimentacoes.json        → Io (estoque.json restored)       │
//! │    ▼  history.write(): push, next_id += 1                               │
//! │    ▼  return Movement                                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locks
//! - `apply_lock` serializes writers across all products. It is held across
//!   file I/O.
//! - `history` is only held to clone or append, so `list_movements` never
//!   waits for a writer's disk I/O.
//! - `current_inventory` takes neither lock; files are replaced atomically.
//!
//! ## Cancellation
//! Everything from taking `apply_lock` to the in-memory append runs in a
//! spawned task. Dropping the caller's future (client disconnect, timeout)
//! only stops the wait; the task still finishes, so the two files and the
//! in-memory history never drift apart.

use std::sync::Arc;

use chrono::Utc;
use tally_core::stock;
use tally_core::validation::validate_movement_request;
use tally_core::{CoreError, Movement, MovementRequest, Product};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::repository::inventory::InventoryRepository;
use crate::repository::movement::MovementRepository;

#[derive(Debug)]
struct History {
    movements: Vec<Movement>,
    next_id: i64,
}

impl History {
    fn from_movements(movements: Vec<Movement>) -> Self {
        let next_id = movements.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        History { movements, next_id }
    }
}

/// Current stock plus append-only movement history.
///
/// Cheap to clone: clones share the same files, lock and history. Owned by
/// the caller (typically server state), never a global, so tests can run
/// isolated ledgers side by side.
#[derive(Debug, Clone)]
pub struct InventoryLedger {
    inner: Arc<LedgerInner>,
}

#[derive(Debug)]
struct LedgerInner {
    inventory: InventoryRepository,
    movements: MovementRepository,
    apply_lock: Mutex<()>,
    history: RwLock<History>,
}

impl InventoryLedger {
    /// Opens the ledger, loading the movement history.
    ///
    /// A missing, unreadable or malformed history file starts an empty
    /// ledger at id 1. Never fails.
    pub async fn open(inventory: InventoryRepository, movements: MovementRepository) -> Self {
        let loaded = match movements.load_all().await {
            Ok(list) => list,
            Err(e) if e.is_missing_file() => {
                warn!(path = %movements.file().path().display(), "No movement history found, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Movement history unreadable, starting empty");
                Vec::new()
            }
        };

        let history = History::from_movements(loaded);
        info!(
            movements = history.movements.len(),
            next_id = history.next_id,
            "Inventory ledger ready"
        );

        InventoryLedger {
            inner: Arc::new(LedgerInner {
                inventory,
                movements,
                apply_lock: Mutex::new(()),
                history: RwLock::new(history),
            }),
        }
    }

    /// Applies one movement and records it.
    ///
    /// Either both files are updated and the movement is returned, or the
    /// inventory file holds its previous content and no movement exists.
    /// Once validation passes the write is detached from the caller, so
    /// dropping the returned future never leaves it half done.
    pub async fn apply_movement(&self, request: MovementRequest) -> StoreResult<Movement> {
        validate_movement_request(&request).map_err(CoreError::from)?;

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.apply(request).await })
            .await
            .map_err(|e| {
                error!(error = %e, "Movement task failed");
                StoreError::Task(e)
            })?
    }

    /// All movements, oldest first.
    pub async fn list_movements(&self) -> Vec<Movement> {
        self.inner.history.read().await.movements.clone()
    }

    /// Products as currently on disk.
    pub async fn current_inventory(&self) -> StoreResult<Vec<Product>> {
        self.inner.inventory.list_products().await
    }

    /// Id the next recorded movement will get.
    pub async fn next_id(&self) -> i64 {
        self.inner.history.read().await.next_id
    }
}

impl LedgerInner {
    async fn apply(&self, request: MovementRequest) -> StoreResult<Movement> {
        let _guard = self.apply_lock.lock().await;

        let mut snapshot = self.inventory.load().await?;
        let previous = snapshot.clone();

        let change = stock::apply_movement(&mut snapshot, &request)?;
        self.inventory.save(&snapshot).await?;

        // apply_lock excludes other writers, so the history can't move
        // between this read and the append below.
        let (movement, mut pending) = {
            let history = self.history.read().await;
            let movement = Movement::record(history.next_id, &change, &request, Utc::now());
            (movement, history.movements.clone())
        };
        pending.push(movement.clone());

        if let Err(e) = self.movements.save_all(&pending).await {
            error!(error = %e, id = movement.id, "History write failed, restoring inventory");
            if let Err(restore) = self.inventory.save(&previous).await {
                error!(
                    error = %restore,
                    product_code = change.product_code,
                    "Inventory restore failed, stock file no longer matches history"
                );
            }
            return Err(e);
        }

        {
            let mut history = self.history.write().await;
            history.movements.push(movement.clone());
            history.next_id += 1;
        }

        debug!(
            id = movement.id,
            product_code = movement.product_code,
            tipo = %movement.movement_type,
            before = movement.stock_before,
            after = movement.stock_after,
            "Movement recorded"
        );

        Ok(movement)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
