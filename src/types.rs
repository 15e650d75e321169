//! MySQL to Go type resolution.
//!
//! Nullable columns map to `sql.NullX` wrappers by default, or to
//! guregu (https://github.com/guregu/null) `null.X` types when the
//! caller asks for them.

/// Resolves a catalog `DATA_TYPE` to the Go type of the generated field.
///
/// Returns `None` for a type with no mapping entry; the caller decides
/// how to render the gap.
pub fn mysql_to_go_type(raw_type: &str, nullable: bool, guregu: bool) -> Option<&'static str> {
    let go_type = match raw_type {
        "tinyint" | "int" | "smallint" | "mediumint" => match (nullable, guregu) {
            (true, true) => "null.Int",
            (true, false) => "sql.NullInt64",
            (false, _) => "int",
        },
        "bigint" => match (nullable, guregu) {
            (true, true) => "null.Int",
            (true, false) => "sql.NullInt64",
            (false, _) => "int64",
        },
        "char" | "enum" | "varchar" | "longtext" | "mediumtext" | "text" | "tinytext"
        | "json" => match (nullable, guregu) {
            (true, true) => "null.String",
            (true, false) => "sql.NullString",
            (false, _) => "string",
        },
        // sql has no null wrapper for time values, so the standard
        // flavor stays time.Time even for nullable columns.
        "date" | "datetime" | "time" | "timestamp" => {
            if nullable && guregu {
                "null.Time"
            } else {
                "time.Time"
            }
        }
        "decimal" | "double" => match (nullable, guregu) {
            (true, true) => "null.Float",
            (true, false) => "sql.NullFloat64",
            (false, _) => "float64",
        },
        "float" => match (nullable, guregu) {
            (true, true) => "null.Float",
            (true, false) => "sql.NullFloat64",
            (false, _) => "float32",
        },
        // Nullability is not representable for byte slices; nil already
        // means absent.
        "binary" | "blob" | "longblob" | "mediumblob" | "varbinary" => "[]byte",
        _ => return None,
    };
    Some(go_type)
}
