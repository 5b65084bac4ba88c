//! # sqlrpn
//!
//! Parameterized SQL fragments from structured input.
//!
//! ## Features
//!
//! - **WHERE from trees**: nested `{op: ...}` expressions compile to postfix
//!   tokens and fold on an operand stack into `where (...)` text
//! - **Placeholders only**: every literal becomes `?` and is returned in the
//!   bind list, in the order its placeholder appears
//! - **Statement templates**: INSERT, UPDATE, SELECT lists and ORDER BY from
//!   column lists and mappings
//! - **Dialect-aware quoting**: SQLite (`"`) or MySQL (`` ` ``) identifiers,
//!   always quoted or only when needed
//! - **No I/O**: nothing here opens a connection; hand `(sql, binds)` to
//!   your driver
//!
//! ## Example
//!
//! ```
//! use sqlrpn::{BindValue, Expr, build_order_query, build_where_query};
//!
//! let tree = Expr::and(vec![
//!     Expr::eq("status", "active"),
//!     Expr::or(vec![Expr::gt("age", 18), Expr::like("name", "a%")]),
//! ]);
//! let clause = build_where_query(&tree)?;
//! assert_eq!(
//!     clause.sql(),
//!     r#"where (("status" = ?) and (("age" > ?) or ("name" like ?)))"#
//! );
//! assert_eq!(
//!     clause.binds(),
//!     &[BindValue::from("active"), BindValue::Int(18), BindValue::from("a%")]
//! );
//!
//! let order = build_order_query([("created_at", "desc")])?;
//! assert_eq!(order, r#"order by "created_at" desc"#);
//! # Ok::<(), sqlrpn::SqlError>(())
//! ```
//!
//! ## JSON input
//!
//! Every builder also accepts the JSON form of its input, which is what the
//! `sqlrpn` command line tool reads:
//!
//! ```
//! use serde_json::json;
//!
//! let clause = sqlrpn::build_where_query_json(&json!({"=": {"a": 1}}))?;
//! assert_eq!(clause.sql(), r#"where ("a" = ?)"#);
//!
//! // An empty tree is not an error.
//! assert!(sqlrpn::build_where_query_json(&json!({}))?.is_empty());
//! # Ok::<(), sqlrpn::SqlError>(())
//! ```

pub mod bind;
pub mod builder;
pub mod config;
pub mod error;
pub mod expr;
pub mod ident;
pub mod operator;
pub mod prelude;
pub mod rpn;
pub mod trace;
pub mod value;

pub use bind::BindValue;
pub use builder::{
    Direction, QueryBuilder, WhereQuery, build_insert_query, build_insert_query_json,
    build_order_query, build_order_query_json, build_select_query, build_select_query_json,
    build_update_query, build_update_query_json, build_where_query, build_where_query_json,
};
pub use config::{BuilderConfig, DEFAULT_MAX_LOGGED_SQL};
pub use error::{SqlError, SqlResult};
pub use expr::Expr;
pub use ident::{Dialect, Ident, IdentPart, QuoteStyle, Quoter, quote};
pub use operator::Operator;
pub use rpn::Token;
pub use trace::StatementKind;
pub use value::{Operand, Value};
