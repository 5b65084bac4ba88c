use super::Token;
use crate::error::{SqlError, SqlResult};
use crate::expr::Expr;
use crate::ident::Quoter;
use crate::value::Value;

/// Flatten an expression tree into postfix order.
///
/// A leaf becomes `[Identifier, Literal, op]`. A combinator over `c1..cN`
/// becomes `c1 c2 op c3 op ... cN op`, i.e. a left-associative chain of
/// N-1 binary applications. Column names are quoted with `quoter` here, so
/// evaluation never sees a raw name.
pub fn compile(expr: &Expr, quoter: Quoter) -> SqlResult<Vec<Token>> {
    let mut tokens = Vec::with_capacity(expr.leaf_count() * 4);
    compile_into(expr, quoter, &mut tokens)?;
    Ok(tokens)
}

fn compile_into(expr: &Expr, quoter: Quoter, out: &mut Vec<Token>) -> SqlResult<()> {
    match expr {
        Expr::Leaf { op, column, value } => {
            out.push(Token::Operand(Value::Identifier(quoter.quote(column))));
            out.push(Token::Operand(Value::Literal(value.clone())));
            out.push(Token::Operator(*op));
        }
        Expr::Combinator { op, children } => {
            let [first, rest @ ..] = children.as_slice() else {
                return Err(SqlError::malformed(format!(
                    "combinator '{op}' has no operands"
                )));
            };
            if rest.is_empty() {
                return Err(SqlError::malformed(format!(
                    "combinator '{op}' needs at least two operands, got 1"
                )));
            }
            compile_into(first, quoter, out)?;
            for child in rest {
                compile_into(child, quoter, out)?;
                out.push(Token::Operator(*op));
            }
        }
    }
    Ok(())
}
