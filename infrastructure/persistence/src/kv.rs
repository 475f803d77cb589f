use std::io;
use std::path::PathBuf;

use tokio::fs;

/// Key-value store backed by one JSON file per key under a root directory.
/// This is the storefront's stand-in for the browser storage area: string
/// keys, string payloads, no transactions.
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Reads the payload under `key`. A key that was never written reads as
    /// `None`.
    pub async fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(payload) => Ok(Some(payload)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error),
        }
    }

    pub async fn write(&self, key: &str, payload: &str) -> io::Result<()> {
        fs::write(self.path_for(key), payload).await
    }

    /// Deletes the key. Removing a key that was never written is not an error.
    pub async fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error),
        }
    }
}
