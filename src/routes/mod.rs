//! Routers: complaint CRUD and common service endpoints.

pub mod common;
pub mod complaint;
pub use common::common_routes_with_ready;
pub use complaint::complaint_routes;
