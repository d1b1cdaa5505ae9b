//! SQL text for the complaints table. Values are always bound as parameters.

pub const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS complaints (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT,
        complaint TEXT NOT NULL
    )
"#;

pub const INSERT: &str = "INSERT INTO complaints (email, complaint) VALUES (?, ?)";

/// No ORDER BY: rows come back in whatever order the store yields.
pub const SELECT_ALL: &str = "SELECT id, email, complaint FROM complaints";

pub const SELECT_BY_ID: &str = "SELECT id, email, complaint FROM complaints WHERE id = ?";

pub const UPDATE: &str = "UPDATE complaints SET email = ?, complaint = ? WHERE id = ?";

pub const DELETE: &str = "DELETE FROM complaints WHERE id = ?";

pub const PING: &str = "SELECT 1";
