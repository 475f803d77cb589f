use async_trait::async_trait;

use business::domain::cart::model::LineItem;
use business::domain::cart::storage::{CART_STORAGE_KEY, CartStorage};
use business::domain::errors::StorageError;

use super::entity::LineItemRecord;
use crate::kv::FileKvStore;

/// Cart slot on top of the file-backed key-value store. The whole cart lives
/// as one JSON array under `CART_STORAGE_KEY`.
pub struct CartStorageFile {
    store: FileKvStore,
}

impl CartStorageFile {
    pub fn new(store: FileKvStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartStorage for CartStorageFile {
    async fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
        let payload = self
            .store
            .read(CART_STORAGE_KEY)
            .await
            .map_err(|_| StorageError::ReadFailed)?;

        match payload {
            Some(payload) => {
                let records: Vec<LineItemRecord> =
                    serde_json::from_str(&payload).map_err(|_| StorageError::CorruptPayload)?;
                Ok(Some(
                    records.into_iter().map(|record| record.into_domain()).collect(),
                ))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        let records: Vec<LineItemRecord> =
            items.iter().map(LineItemRecord::from_domain).collect();
        let payload =
            serde_json::to_string(&records).map_err(|_| StorageError::WriteFailed)?;

        self.store
            .write(CART_STORAGE_KEY, &payload)
            .await
            .map_err(|_| StorageError::WriteFailed)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.store
            .remove(CART_STORAGE_KEY)
            .await
            .map_err(|_| StorageError::WriteFailed)
    }
}
