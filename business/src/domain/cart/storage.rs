use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::LineItem;

/// Key of the single slot the cart occupies in the key-value store.
pub const CART_STORAGE_KEY: &str = "maya_rang_cart";

/// Port for the cart's persistence slot. One cart, one key: `load` reads the
/// whole line list, `save` replaces it, `clear` deletes the slot entirely.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// `Ok(None)` means the slot does not exist yet; a slot whose payload
    /// cannot be decoded is a `CorruptPayload` error.
    async fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError>;
    async fn save(&self, items: &[LineItem]) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}
