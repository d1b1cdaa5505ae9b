//! HTTP handlers for complaint CRUD.

pub mod complaint;
pub use complaint::*;
