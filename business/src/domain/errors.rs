/// Storage errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read_failed")]
    ReadFailed,
    #[error("storage.write_failed")]
    WriteFailed,
    #[error("storage.corrupt_payload")]
    CorruptPayload,
}

impl StorageError {
    pub fn read_failed() -> Self {
        StorageError::ReadFailed
    }
    pub fn write_failed() -> Self {
        StorageError::WriteFailed
    }
    pub fn corrupt_payload() -> Self {
        StorageError::CorruptPayload
    }
}
