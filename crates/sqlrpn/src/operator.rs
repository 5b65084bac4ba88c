//! Binary operators understood by the predicate compiler.
//!
//! Every operator renders through the same rule:
//! `(` + R(x) + ` ` + keyword + ` ` + R(y) + `)`, where a literal operand
//! becomes `?` and is appended to the binds, and any other operand is inlined.

use crate::bind::BindValue;
use crate::error::{SqlError, SqlResult};
use crate::value::{Operand, Value};
use std::fmt;
use std::str::FromStr;

/// Operator symbol in an expression tree.
///
/// # Example
/// ```
/// use sqlrpn::Operator;
///
/// let op: Operator = "<=".parse()?;
/// assert_eq!(op, Operator::Lte);
/// assert!("xor".parse::<Operator>().is_err());
/// # Ok::<(), sqlrpn::SqlError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `and`
    And,
    /// `or`
    Or,
    /// `like`
    Like,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 9] = [
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
        Operator::Eq,
        Operator::Ne,
        Operator::And,
        Operator::Or,
        Operator::Like,
    ];

    /// Look up an operator by its tree symbol.
    pub fn parse(symbol: &str) -> SqlResult<Self> {
        match symbol {
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Lte),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Gte),
            "=" => Ok(Operator::Eq),
            "!=" => Ok(Operator::Ne),
            "and" => Ok(Operator::And),
            "or" => Ok(Operator::Or),
            "like" => Ok(Operator::Like),
            other => Err(SqlError::unknown_operator(other)),
        }
    }

    /// The SQL text substituted between the two operands.
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Like => "like",
        }
    }

    /// Whether this operator joins sub-expressions rather than comparing values.
    pub fn is_logical(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Apply the operator to two operands, producing a [`Value::Chunk`].
    ///
    /// `x` is the operand pushed first. The binds of the result are the binds
    /// of `x` followed by those of `y`, matching placeholder order in the text.
    pub fn apply(self, x: Operand, y: Operand) -> Operand {
        let keyword = self.keyword();
        let mut sql = String::with_capacity(operand_len(&x) + operand_len(&y) + keyword.len() + 4);
        let mut binds: Vec<BindValue> = Vec::with_capacity(x.binds.len() + y.binds.len() + 2);

        sql.push('(');
        x.write_sql(&mut sql, &mut binds);
        sql.push(' ');
        sql.push_str(keyword);
        sql.push(' ');
        y.write_sql(&mut sql, &mut binds);
        sql.push(')');

        Operand {
            value: Value::Chunk(sql),
            binds,
        }
    }
}

fn operand_len(op: &Operand) -> usize {
    op.value.text().map_or(1, str::len)
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Operator {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        Operator::parse(s)
    }
}
