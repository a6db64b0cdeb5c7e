//! PostgreSQL schema definition and SQL query constants.
//!
//! All statements bind values through `$n` placeholders.

/// SQL statement that creates the messages table if it is missing.
pub const CREATE_MESSAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id SERIAL PRIMARY KEY,
    content TEXT NOT NULL,
    timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

pub const SELECT_MESSAGES: &str = r#"
SELECT id, content, timestamp
FROM messages
ORDER BY timestamp DESC NULLS LAST, id DESC
"#;

pub const INSERT_MESSAGE: &str = r#"
INSERT INTO messages (content)
VALUES ($1)
RETURNING id, content, timestamp
"#;

pub const DELETE_MESSAGE: &str = r#"
DELETE FROM messages
WHERE id = $1
"#;

pub const PING: &str = "SELECT 1";
