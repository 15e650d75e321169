use tracing::warn;

use crate::schema::ColumnMetadata;
use crate::types::mysql_to_go_type;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Prefix used inside db tag values.
    pub struct_name: String,
    pub json_annotation: bool,
    pub gorm_annotation: bool,
    pub db_annotations: bool,
    pub guregu_types: bool,
}

/// Builds the struct body for the given columns, in input order.
///
/// The output opens with `struct {`; the `type <Name> ` header and the
/// closing brace are supplied by the caller.
pub fn generate(columns: &[ColumnMetadata], config: &GeneratorConfig) -> String {
    let mut structure = String::from("struct {");

    for column in columns {
        let field_name = format_field_name(&column.name);
        let go_type = mysql_to_go_type(&column.raw_type, column.nullable, config.guregu_types)
            .unwrap_or_else(|| {
                warn!(column = %column.name, raw_type = %column.raw_type, "no type mapping");
                ""
            });

        // Tag order is fixed: gorm, db, json.
        let mut annotations = Vec::new();
        if config.gorm_annotation {
            annotations.push(gorm_fragment(column));
        }
        if config.db_annotations {
            annotations.push(db_fragment(config, &field_name));
        }
        if config.json_annotation {
            annotations.push(json_fragment(column));
        }

        let mut line = format!("\n{} {}", field_name, go_type);
        if !annotations.is_empty() {
            line = format!("{} `{}`", line, annotations.join(" "));
        }
        if !column.comment.is_empty() {
            line = format!("{} // {}", line, column.comment);
        }
        structure.push_str(&line);
    }

    structure
}

fn gorm_fragment(column: &ColumnMetadata) -> String {
    let primary = if column.is_primary_key {
        ";primary_key"
    } else {
        ""
    };
    format!("gorm:\"column:{}{}\"", column.name, primary)
}

fn db_fragment(config: &GeneratorConfig, field_name: &str) -> String {
    format!("db:\"{}{}\"", config.struct_name, field_name)
}

fn json_fragment(column: &ColumnMetadata) -> String {
    format!("json:\"{}\"", column.name)
}

/// Normalizes a column name into an exported Go field name.
///
/// The name is lower-cased, a leading digit is spelled out, the first
/// character is capitalized, and anything that is not ASCII alphanumeric
/// or `_` becomes `_`.
pub fn format_field_name(column_name: &str) -> String {
    let lowered = column_name.to_lowercase();
    let mut name = String::with_capacity(lowered.len() + 4);

    for (i, c) in lowered.chars().enumerate() {
        if i == 0 {
            if let Some(spelled) = spell_digit(c) {
                name.push_str(spelled);
            } else if c.is_ascii_alphabetic() {
                name.push(c.to_ascii_uppercase());
            } else {
                name.push('_');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
        } else {
            name.push('_');
        }
    }

    name
}

fn spell_digit(c: char) -> Option<&'static str> {
    let spelled = match c {
        '0' => "Zero_",
        '1' => "One_",
        '2' => "Two_",
        '3' => "Three_",
        '4' => "Four_",
        '5' => "Five_",
        '6' => "Six_",
        '7' => "Seven_",
        '8' => "Eight_",
        '9' => "Nine_",
        _ => return None,
    };
    Some(spelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, raw_type: &str, nullable: bool, primary: bool) -> ColumnMetadata {
        ColumnMetadata {
            name: name.to_string(),
            raw_type: raw_type.to_string(),
            nullable,
            is_primary_key: primary,
            comment: String::new(),
        }
    }

    fn config(json: bool, gorm: bool, db: bool, guregu: bool) -> GeneratorConfig {
        GeneratorConfig {
            struct_name: "user".to_string(),
            json_annotation: json,
            gorm_annotation: gorm,
            db_annotations: db,
            guregu_types: guregu,
        }
    }

    #[test]
    fn primary_key_with_all_annotations() {
        let columns = vec![column("id", "int", false, true)];
        let out = generate(&columns, &config(true, true, true, false));
        assert_eq!(
            out,
            "struct {\nId int `gorm:\"column:id;primary_key\" db:\"userId\" json:\"id\"`"
        );
    }

    #[test]
    fn nullable_varchar_keeps_trailing_comment() {
        let mut email = column("email", "varchar", true, false);
        email.comment = "user email".to_string();
        let out = generate(&[email], &config(true, false, false, false));
        assert_eq!(
            out,
            "struct {\nEmail sql.NullString `json:\"email\"` // user email"
        );
    }

    #[test]
    fn comment_kept_without_annotations() {
        let mut email = column("email", "varchar", false, false);
        email.comment = "user email".to_string();
        let out = generate(&[email], &config(false, false, false, false));
        assert_eq!(out, "struct {\nEmail string // user email");
    }

    #[test]
    fn bare_field_without_annotations() {
        let columns = vec![column("id", "int", false, true)];
        assert_eq!(
            generate(&columns, &config(false, false, false, false)),
            "struct {\nId int"
        );
    }

    #[test]
    fn guregu_flavor_selects_alternate_nullable_types() {
        let columns = vec![column("score", "double", true, false)];
        let out = generate(&columns, &config(false, false, false, true));
        assert_eq!(out, "struct {\nScore null.Float");
    }

    #[test]
    fn unmapped_type_renders_empty() {
        let columns = vec![column("shape", "geometry", false, false)];
        assert_eq!(
            generate(&columns, &config(false, false, false, false)),
            "struct {\nShape "
        );
    }

    #[test]
    fn fields_follow_input_order() {
        let columns = vec![
            column("b", "int", false, false),
            column("a", "int", false, false),
            column("c", "int", false, false),
        ];
        assert_eq!(
            generate(&columns, &config(false, false, false, false)),
            "struct {\nB int\nA int\nC int"
        );
    }

    #[test]
    fn generate_is_idempotent() {
        let columns = vec![
            column("id", "int", false, true),
            column("email", "varchar", true, false),
        ];
        let cfg = config(true, true, true, true);
        assert_eq!(generate(&columns, &cfg), generate(&columns, &cfg));
    }

    #[test]
    fn field_names_are_normalized() {
        assert_eq!(format_field_name("id"), "Id");
        assert_eq!(format_field_name("USER_ID"), "User_id");
        assert_eq!(format_field_name("email-address"), "Email_address");
        assert_eq!(format_field_name("1st_place"), "One_st_place");
        assert_eq!(format_field_name("créé"), "Cr__");
    }
}
