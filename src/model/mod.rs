pub mod common;
pub mod employee;
pub mod lead;

pub use common::*;
pub use employee::*;
pub use lead::*;
