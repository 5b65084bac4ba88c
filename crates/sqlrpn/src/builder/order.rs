//! ORDER BY clause builder.

use super::QueryBuilder;
use crate::error::{SqlError, SqlResult};
use crate::trace::{self, StatementKind};
use serde_json::Value as Json;
use std::fmt;
use std::str::FromStr;

/// Sort direction.
///
/// Only the lowercase spellings `asc` and `desc` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl AsRef<str> for Direction {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        match s {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(SqlError::unknown_direction(other)),
        }
    }
}

impl QueryBuilder {
    /// Build `order by c1 asc,c2 desc,...`.
    ///
    /// Directions are given as strings (or [`Direction`]s) and must be `asc`
    /// or `desc`. An empty input produces `""`.
    ///
    /// # Example
    /// ```
    /// use sqlrpn::{Direction, QueryBuilder};
    ///
    /// let qb = QueryBuilder::new();
    /// let sql = qb.build_order_query([("created_at", Direction::Desc), ("id", Direction::Asc)])?;
    /// assert_eq!(sql, r#"order by "created_at" desc,"id" asc"#);
    ///
    /// assert!(qb.build_order_query([("id", "up")]).unwrap_err().is_unknown_direction());
    /// # Ok::<(), sqlrpn::SqlError>(())
    /// ```
    pub fn build_order_query<I, K, D>(&self, columns: I) -> SqlResult<String>
    where
        I: IntoIterator<Item = (K, D)>,
        K: AsRef<str>,
        D: AsRef<str>,
    {
        let q = self.quoter();
        let mut terms = Vec::new();
        for (column, direction) in columns {
            let direction: Direction = direction.as_ref().parse()?;
            terms.push(format!("{} {}", q.quote(column.as_ref()), direction));
        }
        if terms.is_empty() {
            return Ok(String::new());
        }

        let sql = format!("order by {}", terms.join(","));
        trace::emit_built(&self.config, StatementKind::Order, &sql, 0);
        Ok(sql)
    }

    /// Build an ORDER BY clause from a `{column: direction}` object.
    ///
    /// Anything other than an object produces `""`; a non-string direction is
    /// an unknown direction.
    pub fn build_order_query_json(&self, columns: &Json) -> SqlResult<String> {
        let Json::Object(map) = columns else {
            return Ok(String::new());
        };
        let pairs = map
            .iter()
            .map(|(column, direction)| match direction {
                Json::String(d) => Ok((column.as_str(), d.as_str())),
                other => Err(SqlError::unknown_direction(other.to_string())),
            })
            .collect::<SqlResult<Vec<_>>>()?;
        self.build_order_query(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuilderConfig;
    use crate::ident::QuoteStyle;
    use serde_json::json;

    #[test]
    fn order_by_strings() {
        let sql = QueryBuilder::new()
            .build_order_query([("a", "asc"), ("b", "desc")])
            .unwrap();
        assert_eq!(sql, r#"order by "a" asc,"b" desc"#);
    }

    #[test]
    fn order_by_minimal_quoting() {
        let qb = QueryBuilder::with_config(BuilderConfig::new().with_quote_style(QuoteStyle::Minimal));
        let sql = qb.build_order_query([("a", "asc"), ("b", "desc")]).unwrap();
        assert_eq!(sql, "order by a asc,b desc");
    }

    #[test]
    fn unknown_direction() {
        let err = QueryBuilder::new().build_order_query([("a", "up")]).unwrap_err();
        assert_eq!(err, SqlError::UnknownDirection("up".to_string()));
    }

    #[test]
    fn direction_is_case_sensitive() {
        assert!("ASC".parse::<Direction>().unwrap_err().is_unknown_direction());
    }

    #[test]
    fn empty_order_is_blank() {
        let sql = QueryBuilder::new()
            .build_order_query(Vec::<(&str, Direction)>::new())
            .unwrap();
        assert_eq!(sql, "");
    }

    #[test]
    fn order_json() {
        let qb = QueryBuilder::new();
        assert_eq!(
            qb.build_order_query_json(&json!({"b": "desc", "a": "asc"})).unwrap(),
            r#"order by "b" desc,"a" asc"#
        );
        assert_eq!(qb.build_order_query_json(&json!(["a"])).unwrap(), "");
        assert!(qb
            .build_order_query_json(&json!({"a": 1}))
            .unwrap_err()
            .is_unknown_direction());
    }
}
