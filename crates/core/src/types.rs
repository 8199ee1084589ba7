/// Primary keys are PostgreSQL BIGSERIAL across every table.
pub type DbId = i64;

/// Timestamps are stored and exchanged as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
