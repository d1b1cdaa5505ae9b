//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Store failure, classified by cause.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("constraint violation: {0}")]
    Constraint(#[source] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
    #[error("database: {0}")]
    Db(#[source] sqlx::Error),
}

impl StoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Constraint(_) => "constraint",
            StoreError::Unavailable(_) => "unavailable",
            StoreError::Db(_) => "database",
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;
        match &e {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => StoreError::Constraint(e),
                _ => StoreError::Db(e),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(e),
            _ => StoreError::Db(e),
        }
    }
}

/// The complaint operation a request was performing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Error creating complaint",
            Operation::List => "Error retrieving complaints",
            Operation::Read => "Error retrieving complaint",
            Operation::Update => "Error updating complaint",
            Operation::Delete => "Error deleting complaint",
        }
    }
}

/// A store failure tied to the operation it interrupted.
/// Rendered as 500 with the operation's fixed message; the cause only goes to the log.
#[derive(Error, Debug)]
#[error("{}: {source}", .op.failure_message())]
pub struct ApiError {
    pub op: Operation,
    #[source]
    pub source: StoreError,
}

impl ApiError {
    pub fn new(op: Operation, source: StoreError) -> Self {
        Self { op, source }
    }

    /// For use with `map_err`: `store.list().await.map_err(ApiError::during(Operation::List))?`.
    pub fn during(op: Operation) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::new(op, source)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(
            operation = ?self.op,
            kind = self.source.kind(),
            error = %self.source,
            "store failure"
        );
        (StatusCode::INTERNAL_SERVER_ERROR, self.op.failure_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_failures_are_unavailable() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(StoreError::from(sqlx::Error::Io(io)), StoreError::Unavailable(_)));
    }

    #[test]
    fn other_failures_are_db() {
        let e = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(e, StoreError::Db(_)));
        assert_eq!(e.kind(), "database");
    }

    #[test]
    fn messages_per_operation() {
        assert_eq!(Operation::Create.failure_message(), "Error creating complaint");
        assert_eq!(Operation::List.failure_message(), "Error retrieving complaints");
        assert_eq!(Operation::Read.failure_message(), "Error retrieving complaint");
        assert_eq!(Operation::Update.failure_message(), "Error updating complaint");
        assert_eq!(Operation::Delete.failure_message(), "Error deleting complaint");
    }

    #[test]
    fn api_error_renders_500_with_fixed_message() {
        let err = ApiError::new(Operation::Update, StoreError::from(sqlx::Error::PoolClosed));
        assert!(err
            .to_string()
            .starts_with("Error updating complaint: store unavailable"));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
