use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::store::{FileStorage, KeyValueStorage, MemoryStorage};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the file backend; `None` selects the in-memory backend.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Rows per page for derived query views.
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: None }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { page_size: 8 }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load environment variables from .env file if it exists
        dotenvy::dotenv().ok();

        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables with prefix "ERP_"
        config = config.add_source(
            config::Environment::with_prefix("ERP")
                .separator("_")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Open the storage backend the configuration selects: file-backed when
    /// a data directory is set, in-memory otherwise.
    pub fn open_backend(&self) -> anyhow::Result<Arc<dyn KeyValueStorage>> {
        match &self.storage.data_dir {
            Some(dir) => Ok(Arc::new(FileStorage::open(dir)?)),
            None => Ok(Arc::new(MemoryStorage::new())),
        }
    }
}
