//! Complaint CRUD routes.

use crate::handlers::complaint::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn complaint_routes(state: AppState) -> Router {
    Router::new()
        .route("/complaints", get(list).post(create))
        .route(
            "/complaints/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
