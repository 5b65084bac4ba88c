//! Reverse Polish Notation engine for expression trees.
//!
//! [`compile`] flattens an [`Expr`](crate::Expr) into a postfix token stream
//! and [`evaluate`] folds that stream on an operand stack into one fragment:
//!
//! ```text
//! {"and": [{"=": {"a": 1}}, {">": {"b": 2}}]}
//!   => "a" 1 =  "b" 2 >  and
//!   => (("a" = ?) and ("b" > ?))   binds [1, 2]
//! ```

mod compile;
mod eval;

pub use compile::compile;
pub use eval::evaluate;

use crate::operator::Operator;
use crate::value::Value;

/// One entry of a postfix token stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Pushed onto the operand stack.
    Operand(Value),
    /// Pops two operands and pushes the rendered chunk.
    Operator(Operator),
}

impl From<Value> for Token {
    fn from(value: Value) -> Self {
        Token::Operand(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}
