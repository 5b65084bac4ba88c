//! SELECT list builder.

use super::QueryBuilder;
use crate::error::{SqlError, SqlResult};
use crate::expr::json_kind;
use crate::trace::{self, StatementKind};
use serde_json::Value as Json;

impl QueryBuilder {
    /// Build `select c1,c2,...` with each column quoted and `*` kept bare.
    ///
    /// An empty list selects `*`.
    pub fn build_select_query<S: AsRef<str>>(&self, columns: &[S]) -> String {
        let sql = if columns.is_empty() {
            "select *".to_string()
        } else {
            format!("select {}", self.quoter().quote_list(columns, ","))
        };
        trace::emit_built(&self.config, StatementKind::Select, &sql, 0);
        sql
    }

    /// Build a SELECT list from JSON.
    ///
    /// Anything other than an array selects `*`; array entries must be strings.
    pub fn build_select_query_json(&self, columns: &Json) -> SqlResult<String> {
        let Json::Array(items) = columns else {
            return Ok(self.build_select_query::<&str>(&[]));
        };
        let names = items
            .iter()
            .map(|c| {
                c.as_str().ok_or_else(|| {
                    SqlError::mismatch(format!(
                        "select column must be a string, got {}",
                        json_kind(c)
                    ))
                })
            })
            .collect::<SqlResult<Vec<&str>>>()?;
        Ok(self.build_select_query(&names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn select_columns() {
        let sql = QueryBuilder::new().build_select_query(&["id", "u.name", "*"]);
        assert_eq!(sql, r#"select "id","u"."name",*"#);
    }

    #[test]
    fn select_empty_is_star() {
        assert_eq!(QueryBuilder::new().build_select_query::<String>(&[]), "select *");
    }

    #[test]
    fn select_json_non_array_is_star() {
        let qb = QueryBuilder::new();
        assert_eq!(qb.build_select_query_json(&json!(null)).unwrap(), "select *");
        assert_eq!(qb.build_select_query_json(&json!("id")).unwrap(), "select *");
        assert_eq!(qb.build_select_query_json(&json!({"a": 1})).unwrap(), "select *");
    }

    #[test]
    fn select_json_columns() {
        let sql = QueryBuilder::new()
            .build_select_query_json(&json!(["id", "*"]))
            .unwrap();
        assert_eq!(sql, r#"select "id",*"#);
    }

    #[test]
    fn select_json_rejects_non_strings() {
        let err = QueryBuilder::new()
            .build_select_query_json(&json!(["id", 3]))
            .unwrap_err();
        assert!(err.is_mismatch());
    }
}
