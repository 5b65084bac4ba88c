//! Expression trees for WHERE clauses.
//!
//! An [`Expr`] is either a leaf comparing one column with one literal, or a
//! combinator folding two or more sub-expressions with the same operator:
//!
//! ```text
//! {"=":   {"a": 1}}                          leaf
//! {"and": [{"=": {"a": 1}}, {">": {"b": 2}}]}  combinator
//! ```
//!
//! Trees are built either with the constructors below or parsed from JSON by
//! [`Expr::from_json`], which rejects malformed shapes before anything is
//! compiled.

use crate::bind::BindValue;
use crate::error::{SqlError, SqlResult};
use crate::operator::Operator;
use serde_json::Value as Json;

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `column op ?`
    Leaf {
        op: Operator,
        column: String,
        value: BindValue,
    },

    /// `(((c1 op c2) op c3) ... op cN)`, N >= 2
    Combinator { op: Operator, children: Vec<Expr> },
}

impl Expr {
    /// Create a leaf comparing `column` with a literal.
    pub fn leaf(op: Operator, column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        Expr::Leaf {
            op,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a combinator over `children`.
    ///
    /// Fewer than two children is accepted here and rejected when the tree is
    /// compiled.
    pub fn combine(op: Operator, children: Vec<Expr>) -> Self {
        Expr::Combinator { op, children }
    }

    /// Create an AND combinator.
    pub fn and(children: Vec<Expr>) -> Self {
        Self::combine(Operator::And, children)
    }

    /// Create an OR combinator.
    pub fn or(children: Vec<Expr>) -> Self {
        Self::combine(Operator::Or, children)
    }

    /// Create an equality condition: column = value
    pub fn eq(column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        Self::leaf(Operator::Eq, column, value)
    }

    /// Create an inequality condition: column != value
    pub fn ne(column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        Self::leaf(Operator::Ne, column, value)
    }

    /// Create a greater-than condition: column > value
    pub fn gt(column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        Self::leaf(Operator::Gt, column, value)
    }

    /// Create a greater-than-or-equal condition: column >= value
    pub fn gte(column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        Self::leaf(Operator::Gte, column, value)
    }

    /// Create a less-than condition: column < value
    pub fn lt(column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        Self::leaf(Operator::Lt, column, value)
    }

    /// Create a less-than-or-equal condition: column <= value
    pub fn lte(column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        Self::leaf(Operator::Lte, column, value)
    }

    /// Create a LIKE condition: column like pattern
    pub fn like(column: impl Into<String>, pattern: impl Into<BindValue>) -> Self {
        Self::leaf(Operator::Like, column, pattern)
    }

    /// Number of leaves, i.e. the number of binds this tree will produce.
    pub fn leaf_count(&self) -> usize {
        match self {
            Expr::Leaf { .. } => 1,
            Expr::Combinator { children, .. } => children.iter().map(Expr::leaf_count).sum(),
        }
    }

    /// Parse an expression from its JSON form.
    ///
    /// - the first key of the object is the operator; further keys are ignored
    /// - a single-entry object operand is a leaf `{column: literal}`
    /// - an array operand of two or more expressions is a combinator
    ///
    /// Anything else is [`SqlError::MalformedExpression`]; an unrecognized
    /// operator symbol is [`SqlError::UnknownOperator`].
    pub fn from_json(value: &Json) -> SqlResult<Self> {
        let Json::Object(map) = value else {
            return Err(SqlError::malformed(format!(
                "expression must be an object, got {}",
                json_kind(value)
            )));
        };
        let Some((symbol, operand)) = map.iter().next() else {
            return Err(SqlError::malformed("expression object is empty"));
        };

        let op = Operator::parse(symbol)?;
        if map.len() > 1 {
            tracing::warn!(
                target: crate::trace::TARGET,
                operator = %symbol,
                ignored = map.len() - 1,
                "expression has extra operator keys; using the first"
            );
        }

        match operand {
            Json::Object(leaf) => {
                let mut entries = leaf.iter();
                let (Some((column, literal)), None) = (entries.next(), entries.next()) else {
                    return Err(SqlError::malformed(format!(
                        "leaf operand of '{symbol}' must have exactly one column, got {}",
                        leaf.len()
                    )));
                };
                let value = BindValue::from_json(literal).ok_or_else(|| {
                    SqlError::malformed(format!(
                        "literal for column '{column}' must be a scalar, got {}",
                        json_kind(literal)
                    ))
                })?;
                Ok(Expr::Leaf {
                    op,
                    column: column.clone(),
                    value,
                })
            }
            Json::Array(items) => {
                if items.len() < 2 {
                    return Err(SqlError::malformed(format!(
                        "combinator '{symbol}' needs at least two operands, got {}",
                        items.len()
                    )));
                }
                let children = items
                    .iter()
                    .map(Expr::from_json)
                    .collect::<SqlResult<Vec<_>>>()?;
                Ok(Expr::Combinator { op, children })
            }
            other => Err(SqlError::malformed(format!(
                "operand of '{symbol}' must be an object or array, got {}",
                json_kind(other)
            ))),
        }
    }
}

impl TryFrom<&Json> for Expr {
    type Error = SqlError;

    fn try_from(value: &Json) -> SqlResult<Self> {
        Expr::from_json(value)
    }
}

pub(crate) fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
