use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::cart::model::LineItem;
use business::domain::cart::storage::CartStorage;
use business::domain::errors::StorageError;

/// In-memory slot for tests and ephemeral sessions. `None` models a slot
/// that does not exist, matching the file store's missing-key behavior.
pub struct CartStorageMemory {
    slot: Mutex<Option<Vec<LineItem>>>,
}

impl CartStorageMemory {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl Default for CartStorageMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartStorage for CartStorageMemory {
    async fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        *self.slot.lock().await = Some(items.to_vec());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().await = None;
        Ok(())
    }
}
