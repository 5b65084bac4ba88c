//! Statement builders.
//!
//! [`QueryBuilder`] turns structured input into SQL text with positional `?`
//! placeholders plus the values to bind to them:
//!
//! - `build_where_query`: expression tree → `where ...` via the RPN engine
//! - `build_insert_query` / `build_update_query`: column lists → templated
//!   statements with one bind per column
//! - `build_select_query` / `build_order_query`: quoted column lists, no binds
//!
//! Each method has a `*_json` twin that accepts the loosely-typed JSON form of
//! the same input. The free functions at the bottom of this module use the
//! default [`BuilderConfig`].
//!
//! Builders never execute anything and hold no state between calls.

mod insert;
mod order;
mod select;
mod update;
mod where_query;

pub use order::Direction;
pub use where_query::WhereQuery;

use crate::bind::BindValue;
use crate::config::BuilderConfig;
use crate::error::SqlResult;
use crate::expr::Expr;
use crate::ident::Quoter;
use serde_json::Value as Json;

/// Entry point for all statement builders.
///
/// # Example
/// ```
/// use sqlrpn::{BuilderConfig, Dialect, Expr, QueryBuilder};
///
/// let qb = QueryBuilder::with_config(BuilderConfig::new().with_dialect(Dialect::MySql));
/// let clause = qb.build_where_query(&Expr::eq("id", 7))?;
/// assert_eq!(clause.sql(), "where (`id` = ?)");
/// # Ok::<(), sqlrpn::SqlError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: BuilderConfig,
}

impl QueryBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Quote a dotted identifier for this builder's dialect.
    pub fn quote(&self, name: &str) -> String {
        self.quoter().quote(name)
    }

    pub(crate) fn quoter(&self) -> Quoter {
        self.config.quoter()
    }
}

/// Build a WHERE clause with the default configuration.
///
/// `None` yields [`WhereQuery::Empty`].
pub fn build_where_query<'a>(tree: impl Into<Option<&'a Expr>>) -> SqlResult<WhereQuery> {
    QueryBuilder::default().build_where_query(tree)
}

/// Build a WHERE clause from JSON with the default configuration.
pub fn build_where_query_json(tree: &Json) -> SqlResult<WhereQuery> {
    QueryBuilder::default().build_where_query_json(tree)
}

/// Build an INSERT statement with the default configuration.
pub fn build_insert_query<S: AsRef<str>>(
    table: &str,
    columns: &[S],
    rows: Vec<Vec<BindValue>>,
) -> SqlResult<(String, Vec<Vec<BindValue>>)> {
    QueryBuilder::default().build_insert_query(table, columns, rows)
}

/// Build an INSERT statement from `[[columns...], [row]...]` JSON.
pub fn build_insert_query_json(
    table: &str,
    values: &Json,
) -> SqlResult<(String, Vec<Vec<BindValue>>)> {
    QueryBuilder::default().build_insert_query_json(table, values)
}

/// Build an UPDATE statement with the default configuration.
pub fn build_update_query<I, K, V>(table: &str, values: I) -> SqlResult<(String, Vec<BindValue>)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<BindValue>,
{
    QueryBuilder::default().build_update_query(table, values)
}

/// Build an UPDATE statement from a `{column: value}` JSON object.
pub fn build_update_query_json(table: &str, values: &Json) -> SqlResult<(String, Vec<BindValue>)> {
    QueryBuilder::default().build_update_query_json(table, values)
}

/// Build a SELECT list with the default configuration.
pub fn build_select_query<S: AsRef<str>>(columns: &[S]) -> String {
    QueryBuilder::default().build_select_query(columns)
}

/// Build a SELECT list from JSON; anything but an array selects `*`.
pub fn build_select_query_json(columns: &Json) -> SqlResult<String> {
    QueryBuilder::default().build_select_query_json(columns)
}

/// Build an ORDER BY clause with the default configuration.
pub fn build_order_query<I, K, D>(columns: I) -> SqlResult<String>
where
    I: IntoIterator<Item = (K, D)>,
    K: AsRef<str>,
    D: AsRef<str>,
{
    QueryBuilder::default().build_order_query(columns)
}

/// Build an ORDER BY clause from a `{column: direction}` JSON object.
pub fn build_order_query_json(columns: &Json) -> SqlResult<String> {
    QueryBuilder::default().build_order_query_json(columns)
}
