pub mod entity_store;
pub mod file;
pub mod memory;
pub mod traits;

pub use entity_store::*;
pub use file::*;
pub use memory::*;
pub use traits::*;
