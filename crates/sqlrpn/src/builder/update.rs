//! UPDATE statement builder.

use super::QueryBuilder;
use crate::bind::BindValue;
use crate::error::{SqlError, SqlResult};
use crate::expr::json_kind;
use crate::trace::{self, StatementKind};
use serde_json::Value as Json;

impl QueryBuilder {
    /// Build `update <table> set c1 = ?, c2 = ?, ...`.
    ///
    /// One bind per `(column, value)` pair, in iteration order. An empty
    /// input is rejected: UPDATE requires SET.
    ///
    /// # Example
    /// ```
    /// use sqlrpn::{BindValue, QueryBuilder};
    ///
    /// let (sql, binds) = QueryBuilder::new()
    ///     .build_update_query("users", [("name", "ann"), ("status", "active")])?;
    /// assert_eq!(sql, r#"update "users" set "name" = ?, "status" = ?"#);
    /// assert_eq!(binds, vec![BindValue::from("ann"), BindValue::from("active")]);
    /// # Ok::<(), sqlrpn::SqlError>(())
    /// ```
    pub fn build_update_query<I, K, V>(
        &self,
        table: &str,
        values: I,
    ) -> SqlResult<(String, Vec<BindValue>)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<BindValue>,
    {
        let q = self.quoter();
        let mut sets = Vec::new();
        let mut binds = Vec::new();
        for (column, value) in values {
            sets.push(format!("{} = ?", q.quote(column.as_ref())));
            binds.push(value.into());
        }
        if sets.is_empty() {
            return Err(SqlError::mismatch("update requires at least one column"));
        }

        let sql = format!("update {} set {}", q.quote(table), sets.join(", "));
        trace::emit_built(&self.config, StatementKind::Update, &sql, binds.len());
        Ok((sql, binds))
    }

    /// Build an UPDATE from a `{column: value}` object; values must be scalars.
    pub fn build_update_query_json(
        &self,
        table: &str,
        values: &Json,
    ) -> SqlResult<(String, Vec<BindValue>)> {
        let Json::Object(map) = values else {
            return Err(SqlError::mismatch(format!(
                "update values must be an object, got {}",
                json_kind(values)
            )));
        };
        let pairs = map
            .iter()
            .map(|(column, value)| {
                BindValue::from_json(value)
                    .map(|v| (column.as_str(), v))
                    .ok_or_else(|| {
                        SqlError::mismatch(format!(
                            "update value for '{column}' must be a scalar, got {}",
                            json_kind(value)
                        ))
                    })
            })
            .collect::<SqlResult<Vec<_>>>()?;
        self.build_update_query(table, pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuilderConfig;
    use crate::ident::Dialect;
    use serde_json::json;

    #[test]
    fn update_keeps_pair_order() {
        let (sql, binds) = QueryBuilder::new()
            .build_update_query("t", vec![("z", BindValue::Int(1)), ("a", BindValue::Int(2))])
            .unwrap();
        assert_eq!(sql, r#"update "t" set "z" = ?, "a" = ?"#);
        assert_eq!(binds, vec![BindValue::Int(1), BindValue::Int(2)]);
    }

    #[test]
    fn update_json_keeps_insertion_order() {
        let (sql, binds) = QueryBuilder::new()
            .build_update_query_json("t", &json!({"z": "last", "a": true}))
            .unwrap();
        assert_eq!(sql, r#"update "t" set "z" = ?, "a" = ?"#);
        assert_eq!(binds, vec![BindValue::from("last"), BindValue::Bool(true)]);
    }

    #[test]
    fn update_mysql() {
        let qb = QueryBuilder::with_config(BuilderConfig::new().with_dialect(Dialect::MySql));
        let (sql, _) = qb.build_update_query("app.users", [("name", "x")]).unwrap();
        assert_eq!(sql, "update `app`.`users` set `name` = ?");
    }

    #[test]
    fn update_requires_columns() {
        let err = QueryBuilder::new()
            .build_update_query("t", Vec::<(&str, BindValue)>::new())
            .unwrap_err();
        assert!(err.is_mismatch());

        let err = QueryBuilder::new().build_update_query_json("t", &json!({})).unwrap_err();
        assert!(err.is_mismatch());
    }

    #[test]
    fn update_json_rejects_non_scalars() {
        let qb = QueryBuilder::new();
        assert!(qb.build_update_query_json("t", &json!([1])).unwrap_err().is_mismatch());
        assert!(qb.build_update_query_json("t", &json!({"a": {"b": 1}})).unwrap_err().is_mismatch());
    }
}
