pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export logic types
pub use logic::{
    collection, filter, page_count, paginate, FormOutcome, FormSession, QueryState, QueryView,
    ViewMode,
};

// Export all model types
pub use model::*;

// Export seed module
pub use seed::*;

// Export store types
pub use store::{EntityStore, FileStorage, KeyValueStorage, MemoryStorage, StorageError};

// Export configuration
pub use config::AppConfig;
