use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets::UTF8_FULL};
use serde::Serialize;
use sqlrpn::{BindValue, StatementKind};

/// One built statement, ready for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Built {
    #[serde(skip)]
    pub kind: StatementKind,
    pub sql: String,
    pub binds: Binds,
}

impl Built {
    pub fn new(kind: StatementKind, sql: String, binds: Binds) -> Self {
        Self { kind, sql, binds }
    }
}

/// Insert yields one bind group per row; everything else a single list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Binds {
    Flat(Vec<BindValue>),
    Rows(Vec<Vec<BindValue>>),
}

impl Binds {
    pub fn is_empty(&self) -> bool {
        match self {
            Binds::Flat(v) => v.is_empty(),
            Binds::Rows(rows) => rows.is_empty(),
        }
    }
}

pub fn to_json(built: &Built) -> anyhow::Result<String> {
    serde_json::to_string_pretty(built).map_err(|e| anyhow::anyhow!("failed to encode output: {e}"))
}

pub fn to_text(built: &Built) -> String {
    let mut out = if built.sql.is_empty() {
        format!("-- empty {} clause", built.kind.as_str())
    } else {
        built.sql.clone()
    };
    if !built.binds.is_empty() {
        out.push('\n');
        out.push_str(&binds_table(&built.binds).to_string());
    }
    out
}

fn binds_table(binds: &Binds) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    match binds {
        Binds::Flat(values) => {
            table.set_header(header(&["#", "Type", "Value"]));
            for (i, v) in values.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(v.type_name()),
                    Cell::new(v),
                ]);
            }
        }
        Binds::Rows(rows) => {
            table.set_header(header(&["Row", "#", "Type", "Value"]));
            for (r, row) in rows.iter().enumerate() {
                for (i, v) in row.iter().enumerate() {
                    table.add_row(vec![
                        Cell::new(r + 1),
                        Cell::new(i + 1),
                        Cell::new(v.type_name()),
                        Cell::new(v),
                    ]);
                }
            }
        }
    }
    table
}

fn header(names: &[&str]) -> Vec<Cell> {
    names
        .iter()
        .map(|n| Cell::new(n).add_attribute(Attribute::Bold))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn where_built() -> Built {
        Built::new(
            StatementKind::Where,
            r#"where ("a" = ?)"#.to_string(),
            Binds::Flat(vec![BindValue::from("x")]),
        )
    }

    #[test]
    fn json_has_sql_and_binds_only() {
        let value: serde_json::Value = serde_json::from_str(&to_json(&where_built()).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"sql": "where (\"a\" = ?)", "binds": ["x"]})
        );
    }

    #[test]
    fn json_rows_nest() {
        let built = Built::new(
            StatementKind::Insert,
            "insert".to_string(),
            Binds::Rows(vec![vec![BindValue::Int(1), BindValue::Null]]),
        );
        let value: serde_json::Value = serde_json::from_str(&to_json(&built).unwrap()).unwrap();
        assert_eq!(value["binds"], serde_json::json!([[1, null]]));
    }

    #[test]
    fn text_lists_binds() {
        let text = to_text(&where_built());
        assert!(text.starts_with(r#"where ("a" = ?)"#));
        assert!(text.contains("text"));
        assert!(text.contains(r#""x""#));
    }

    #[test]
    fn text_for_empty_clause() {
        let built = Built::new(StatementKind::Where, String::new(), Binds::Flat(Vec::new()));
        assert_eq!(to_text(&built), "-- empty where clause");
    }
}
