//! INSERT statement builder.

use super::QueryBuilder;
use crate::bind::BindValue;
use crate::error::{SqlError, SqlResult};
use crate::expr::json_kind;
use crate::trace::{self, StatementKind};
use serde_json::Value as Json;

impl QueryBuilder {
    /// Build `insert into <table> (<cols>) values (?,...)`.
    ///
    /// The statement has one placeholder per column and is meant to be run
    /// once per row: each row is returned as its own bind group, unchanged.
    /// Every row must have exactly one value per column.
    pub fn build_insert_query<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
        rows: Vec<Vec<BindValue>>,
    ) -> SqlResult<(String, Vec<Vec<BindValue>>)> {
        if columns.is_empty() {
            return Err(SqlError::mismatch("insert requires at least one column"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(SqlError::mismatch(format!(
                    "insert row {} has {} values, expected {}",
                    i + 1,
                    row.len(),
                    columns.len()
                )));
            }
        }

        let q = self.quoter();
        let placeholders = vec!["?"; columns.len()].join(",");
        let sql = format!(
            "insert into {} ({}) values ({})",
            q.quote(table),
            q.quote_list(columns, ","),
            placeholders
        );

        let bound = rows.len() * columns.len();
        trace::emit_built(&self.config, StatementKind::Insert, &sql, bound);
        Ok((sql, rows))
    }

    /// Build an INSERT from `[[col, ...], [value, ...], ...]`.
    ///
    /// The first inner array names the columns; every following array is one
    /// row of scalar values.
    pub fn build_insert_query_json(
        &self,
        table: &str,
        values: &Json,
    ) -> SqlResult<(String, Vec<Vec<BindValue>>)> {
        let Json::Array(items) = values else {
            return Err(SqlError::mismatch(format!(
                "insert values must be an array, got {}",
                json_kind(values)
            )));
        };
        let Some((header, body)) = items.split_first() else {
            return Err(SqlError::mismatch("insert values are missing the column row"));
        };

        let Json::Array(header) = header else {
            return Err(SqlError::mismatch(format!(
                "insert column row must be an array, got {}",
                json_kind(header)
            )));
        };
        let columns = header
            .iter()
            .map(|c| {
                c.as_str().ok_or_else(|| {
                    SqlError::mismatch(format!(
                        "insert column name must be a string, got {}",
                        json_kind(c)
                    ))
                })
            })
            .collect::<SqlResult<Vec<&str>>>()?;

        let mut rows = Vec::with_capacity(body.len());
        for (i, row) in body.iter().enumerate() {
            let Json::Array(cells) = row else {
                return Err(SqlError::mismatch(format!(
                    "insert row {} must be an array, got {}",
                    i + 1,
                    json_kind(row)
                )));
            };
            let row = cells
                .iter()
                .map(|cell| {
                    BindValue::from_json(cell).ok_or_else(|| {
                        SqlError::mismatch(format!(
                            "insert row {} holds a non-scalar {}",
                            i + 1,
                            json_kind(cell)
                        ))
                    })
                })
                .collect::<SqlResult<Vec<_>>>()?;
            rows.push(row);
        }

        self.build_insert_query(table, &columns, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_two_rows() {
        let (sql, rows) = QueryBuilder::new()
            .build_insert_query(
                "t",
                &["a", "b"],
                vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]],
            )
            .unwrap();
        assert_eq!(sql, r#"insert into "t" ("a","b") values (?,?)"#);
        assert_eq!(
            rows,
            vec![
                vec![BindValue::Int(1), BindValue::Int(2)],
                vec![BindValue::Int(3), BindValue::Int(4)],
            ]
        );
    }

    #[test]
    fn insert_event_counts_every_bound_value() {
        let qb = QueryBuilder::new();
        let (built, logged) = crate::trace::capture(|| {
            qb.build_insert_query(
                "t",
                &["a", "b"],
                vec![
                    vec![BindValue::Int(1), BindValue::Int(2)],
                    vec![BindValue::Int(3), BindValue::Int(4)],
                    vec![BindValue::Int(5), BindValue::Int(6)],
                ],
            )
        });
        assert!(built.is_ok());
        assert!(logged.contains("binds=6"), "{logged}");
    }

    #[test]
    fn insert_without_rows_still_builds() {
        let (sql, rows) = QueryBuilder::new()
            .build_insert_query("t", &["a"], Vec::new())
            .unwrap();
        assert_eq!(sql, r#"insert into "t" ("a") values (?)"#);
        assert!(rows.is_empty());
    }

    #[test]
    fn insert_width_mismatch() {
        let err = QueryBuilder::new()
            .build_insert_query("t", &["a", "b"], vec![vec![1.into(), 2.into()], vec![3.into()]])
            .unwrap_err();
        assert_eq!(
            err,
            SqlError::StructuralMismatch("insert row 2 has 1 values, expected 2".to_string())
        );
    }

    #[test]
    fn insert_requires_columns() {
        let err = QueryBuilder::new()
            .build_insert_query::<&str>("t", &[], Vec::new())
            .unwrap_err();
        assert!(err.is_mismatch());
    }

    #[test]
    fn insert_json() {
        let (sql, rows) = QueryBuilder::new()
            .build_insert_query_json("users", &json!([["name", "age"], ["ann", 30], ["bob", null]]))
            .unwrap();
        assert_eq!(sql, r#"insert into "users" ("name","age") values (?,?)"#);
        assert_eq!(
            rows,
            vec![
                vec![BindValue::from("ann"), BindValue::Int(30)],
                vec![BindValue::from("bob"), BindValue::Null],
            ]
        );
    }

    #[test]
    fn insert_json_shape_errors() {
        let qb = QueryBuilder::new();
        assert!(qb.build_insert_query_json("t", &json!({})).unwrap_err().is_mismatch());
        assert!(qb.build_insert_query_json("t", &json!([])).unwrap_err().is_mismatch());
        assert!(qb.build_insert_query_json("t", &json!([[1]])).unwrap_err().is_mismatch());
        assert!(qb.build_insert_query_json("t", &json!([["a"], 5])).unwrap_err().is_mismatch());
        assert!(qb.build_insert_query_json("t", &json!([["a"], [[1]]])).unwrap_err().is_mismatch());
        assert!(qb.build_insert_query_json("t", &json!([["a", "b"], [1]])).unwrap_err().is_mismatch());
    }
}
