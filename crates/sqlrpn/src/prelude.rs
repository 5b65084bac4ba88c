//! Convenient imports for typical `sqlrpn` usage.
//!
//! ```
//! use sqlrpn::prelude::*;
//!
//! let clause = QueryBuilder::new().build_where_query(&Expr::eq("id", 1))?;
//! assert!(!clause.is_empty());
//! # Ok::<(), SqlError>(())
//! ```

pub use crate::{
    BindValue, BuilderConfig, Dialect, Direction, Expr, Operator, QueryBuilder, QuoteStyle,
    SqlError, SqlResult, WhereQuery,
};
