use crate::domain::errors::DomainError;
use crate::domain::models::platform::Platform;
use crate::infrastructure::logging::logger;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::{self as tokio_fs, create_dir_all, read_to_string};

/// Represents the relay admin data directory structure
pub struct DataDirectory {
    root: PathBuf,
    groups: PathBuf,
    accounts: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        let groups = root.join("groups");
        let accounts = root.join("accounts");

        Self {
            root,
            groups,
            accounts,
        }
    }

    /// Initialize the data directory structure
    pub async fn initialize(&self) -> Result<(), DomainError> {
        tracing::info!("Initializing data directory at: {:?}", self.root);

        self.create_directory(&self.root).await?;
        self.create_directory(&self.groups).await?;

        // One account directory per provider kind
        for platform in Platform::ALL {
            self.create_directory(&self.accounts_for(platform)).await?;
        }

        tracing::info!("Data directory initialized successfully");
        Ok(())
    }

    /// Create a directory if it doesn't exist
    async fn create_directory(&self, path: &Path) -> Result<(), DomainError> {
        if !path.exists() {
            tracing::info!("Creating directory: {:?}", path);
            create_dir_all(path).await.map_err(|e| {
                tracing::error!("Failed to create directory {:?}: {}", path, e);
                DomainError::InternalError(format!("Failed to create directory: {}", e))
            })?;
        }
        Ok(())
    }

    /// Get the groups directory
    pub fn groups(&self) -> &Path {
        &self.groups
    }

    /// Get the account directory for a platform
    pub fn accounts_for(&self, platform: Platform) -> PathBuf {
        self.accounts.join(platform.as_str())
    }
}

/// Read a JSON file and deserialize it
pub async fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    logger::debug(&format!("Reading JSON file: {:?}", path));

    let contents = read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DomainError::NotFound(format!("File not found: {}", path.display()))
        } else {
            logger::error(&format!("Failed to read file {:?}: {}", path, e));
            DomainError::InternalError(format!("Failed to read file: {}", e))
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        logger::error(&format!("Failed to parse JSON from file {:?}: {}", path, e));
        DomainError::InvalidData(format!("Invalid JSON: {}", e))
    })
}

/// Serialize data to pretty-printed JSON and write it to a file
pub async fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<(), DomainError> {
    logger::debug(&format!("Writing JSON file: {:?}", path));

    if let Some(parent) = path.parent() {
        create_dir_all(parent).await.map_err(|e| {
            logger::error(&format!(
                "Failed to create parent directory for {:?}: {}",
                path, e
            ));
            DomainError::InternalError(format!("Failed to create directory: {}", e))
        })?;
    }

    let json = serde_json::to_string_pretty(data).map_err(|e| {
        logger::error(&format!(
            "Failed to serialize to JSON for file {:?}: {}",
            path, e
        ));
        DomainError::InvalidData(format!("Failed to serialize to JSON: {}", e))
    })?;

    tokio_fs::write(path, json).await.map_err(|e| {
        logger::error(&format!("Failed to write to file {:?}: {}", path, e));
        DomainError::InternalError(format!("Failed to write to file: {}", e))
    })?;

    Ok(())
}

/// List files in a directory with a specific extension
pub async fn list_files_with_extension(
    dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, DomainError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = tokio_fs::read_dir(dir).await.map_err(|e| {
        logger::error(&format!("Failed to read directory {:?}: {}", dir, e));
        DomainError::InternalError(format!("Failed to read directory: {}", e))
    })?;

    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        logger::error(&format!("Failed to read directory entry: {}", e));
        DomainError::InternalError(format!("Failed to read directory entry: {}", e))
    })? {
        let path = entry.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }

    Ok(files)
}
