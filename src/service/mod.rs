//! ComplaintStore: the seam between handlers and the database.

mod crud;
pub use crud::{ComplaintStore, SqliteComplaintStore};
