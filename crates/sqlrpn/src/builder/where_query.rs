//! WHERE clause builder backed by the RPN engine.

use super::QueryBuilder;
use crate::bind::BindValue;
use crate::error::SqlResult;
use crate::expr::Expr;
use crate::rpn;
use crate::trace::{self, StatementKind};
use serde_json::Value as Json;

/// Result of building a WHERE clause.
///
/// An absent or empty tree is not an error; it produces [`WhereQuery::Empty`],
/// which renders as an empty string with no binds.
#[derive(Debug, Clone, PartialEq)]
pub enum WhereQuery {
    /// No predicate: the statement has no WHERE clause.
    Empty,
    /// `where <fragment>` and its binds, in placeholder order.
    Predicate { sql: String, binds: Vec<BindValue> },
}

impl WhereQuery {
    /// Check if no WHERE clause was produced.
    pub fn is_empty(&self) -> bool {
        matches!(self, WhereQuery::Empty)
    }

    /// The clause text, `""` when empty.
    pub fn sql(&self) -> &str {
        match self {
            WhereQuery::Empty => "",
            WhereQuery::Predicate { sql, .. } => sql,
        }
    }

    /// Bind values for the `?` placeholders in [`sql`](Self::sql).
    pub fn binds(&self) -> &[BindValue] {
        match self {
            WhereQuery::Empty => &[],
            WhereQuery::Predicate { binds, .. } => binds,
        }
    }

    /// Split into `(sql, binds)`.
    pub fn into_parts(self) -> (String, Vec<BindValue>) {
        match self {
            WhereQuery::Empty => (String::new(), Vec::new()),
            WhereQuery::Predicate { sql, binds } => (sql, binds),
        }
    }
}

impl QueryBuilder {
    /// Build `where <predicate>` from an expression tree.
    ///
    /// The tree is compiled to postfix tokens and folded on an operand stack;
    /// every literal becomes a `?` and is returned in the bind list in text
    /// order. Nothing is returned on error.
    ///
    /// # Example
    /// ```
    /// use sqlrpn::{BindValue, Expr, QueryBuilder};
    ///
    /// let tree = Expr::and(vec![Expr::eq("a", 1), Expr::gt("b", 2)]);
    /// let (sql, binds) = QueryBuilder::new().build_where_query(&tree)?.into_parts();
    /// assert_eq!(sql, r#"where (("a" = ?) and ("b" > ?))"#);
    /// assert_eq!(binds, vec![BindValue::Int(1), BindValue::Int(2)]);
    /// # Ok::<(), sqlrpn::SqlError>(())
    /// ```
    pub fn build_where_query<'a>(&self, tree: impl Into<Option<&'a Expr>>) -> SqlResult<WhereQuery> {
        let Some(expr) = tree.into() else {
            return Ok(WhereQuery::Empty);
        };

        let tokens = rpn::compile(expr, self.quoter())?;
        let (fragment, binds) = rpn::evaluate(tokens)?.into_sql();

        let sql = format!("where {fragment}");
        trace::emit_built(&self.config, StatementKind::Where, &sql, binds.len());
        Ok(WhereQuery::Predicate { sql, binds })
    }

    /// Build a WHERE clause from the JSON form of an expression tree.
    ///
    /// Anything other than a non-empty object yields [`WhereQuery::Empty`].
    pub fn build_where_query_json(&self, tree: &Json) -> SqlResult<WhereQuery> {
        match tree {
            Json::Object(map) if !map.is_empty() => {
                let expr = Expr::from_json(tree)?;
                self.build_where_query(&expr)
            }
            _ => Ok(WhereQuery::Empty),
        }
    }
}
