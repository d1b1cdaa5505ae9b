//! Complaints API: CRUD over a single `complaints` table, served with axum.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{ApiError, ConfigError, Operation, StoreError};
pub use model::{Complaint, ComplaintInput};
pub use routes::{common_routes_with_ready, complaint_routes};
pub use service::{ComplaintStore, SqliteComplaintStore};
pub use state::AppState;
pub use store::{connect, ensure_complaints_table};

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Request bodies above this are rejected with 413.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application router: complaint routes, common routes, CORS open to any origin.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(complaint_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
