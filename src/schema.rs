use std::collections::HashSet;

use serde::Serialize;
use sqlx::mysql::MySqlPool;
use tracing::debug;

use crate::error::SchemaError;

/// One table column, in catalog ordinal order.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnMetadata {
    pub name: String,
    /// Engine-native type name as reported by the catalog, e.g. `varchar`.
    pub raw_type: String,
    pub nullable: bool,
    pub is_primary_key: bool,
    pub comment: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct ColumnRow {
    column_name: String,
    column_key: String,
    data_type: String,
    is_nullable: String,
    column_comment: String,
}

// DATA_TYPE and COLUMN_COMMENT come back as byte strings on MariaDB
// without the CAST.
const COLUMN_QUERY: &str = "SELECT
     COLUMN_NAME AS column_name,
     COLUMN_KEY AS column_key,
     CAST(DATA_TYPE AS CHAR) AS data_type,
     IS_NULLABLE AS is_nullable,
     CAST(COLUMN_COMMENT AS CHAR) AS column_comment
     FROM INFORMATION_SCHEMA.COLUMNS
     WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
     ORDER BY ORDINAL_POSITION ASC";

/// Reads the ordered column metadata for `database.table`.
///
/// The pool is closed on every exit path, including query failure.
pub async fn read_columns(
    dsn: &str,
    database: &str,
    table: &str,
) -> Result<Vec<ColumnMetadata>, SchemaError> {
    let pool = MySqlPool::connect(dsn)
        .await
        .map_err(SchemaError::Connection)?;

    let result = fetch_columns(&pool, database, table).await;
    pool.close().await;
    result
}

async fn fetch_columns(
    pool: &MySqlPool,
    database: &str,
    table: &str,
) -> Result<Vec<ColumnMetadata>, SchemaError> {
    debug!(database, table, "running: {}", COLUMN_QUERY);

    let rows = sqlx::query_as::<_, ColumnRow>(COLUMN_QUERY)
        .bind(database)
        .bind(table)
        .fetch_all(pool)
        .await
        .map_err(SchemaError::Query)?;

    columns_from_rows(rows, database, table)
}

fn columns_from_rows(
    rows: Vec<ColumnRow>,
    database: &str,
    table: &str,
) -> Result<Vec<ColumnMetadata>, SchemaError> {
    if rows.is_empty() {
        return Err(SchemaError::TableNotFound {
            database: database.to_string(),
            table: table.to_string(),
        });
    }

    let columns: Vec<ColumnMetadata> = rows.into_iter().map(ColumnMetadata::from).collect();
    validate_columns(&columns)?;

    Ok(columns)
}

impl From<ColumnRow> for ColumnMetadata {
    fn from(row: ColumnRow) -> Self {
        Self {
            nullable: row.is_nullable == "YES",
            is_primary_key: row.column_key == "PRI",
            name: row.column_name,
            raw_type: row.data_type,
            comment: row.column_comment,
        }
    }
}

// Field names are derived 1:1 from column names, so empty or duplicate
// names would produce an invalid struct. Rejected here rather than left
// to the generator.
fn validate_columns(columns: &[ColumnMetadata]) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for column in columns {
        if column.name.is_empty() {
            return Err(SchemaError::InvalidColumn(
                "empty column name".to_string(),
            ));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(SchemaError::InvalidColumn(format!(
                "duplicate column name {}",
                column.name
            )));
        }
    }
    Ok(())
}
