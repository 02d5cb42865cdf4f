pub mod collection;
pub mod form;
pub mod query;

pub use form::*;
pub use query::*;
