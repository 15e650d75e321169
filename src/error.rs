use thiserror::Error;

/// Failures surfaced while reading column metadata from the catalog.
///
/// Any of these aborts generation for the requested table; no partial
/// struct is ever emitted.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("column metadata query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// Zero catalog rows. The table does not exist or the user cannot see
    /// it; an empty struct would be indistinguishable from that, so this
    /// is an error rather than an empty result.
    #[error("no columns found for table {database}.{table}")]
    TableNotFound { database: String, table: String },

    #[error("invalid column metadata: {0}")]
    InvalidColumn(String),
}
