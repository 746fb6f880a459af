use crate::{
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation, one JSON file per key
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const HLAVI_DIR: &'static str = ".hlavi";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::HLAVI_DIR),
        }
    }

    fn item_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(BoardError::StorageError(format!(
                "invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.root_path.join(format!("{}.json", key)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.item_file(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        Ok(Some(contents))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.item_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        fs::write(file_path, value).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let file_path = self.item_file(key)?;

        if file_path.exists() {
            fs::remove_file(file_path).await?;
        }
        Ok(())
    }
}
