use super::Token;
use crate::error::{SqlError, SqlResult};
use crate::value::Operand;

/// Fold a postfix token stream into a single operand.
///
/// Operands are pushed; an operator pops `y` (pushed last) and `x` (pushed
/// before it) and pushes `op.apply(x, y)`. Binds travel with each stack entry,
/// so nothing is shared between calls. Exactly one operand must remain at the
/// end.
pub fn evaluate<I>(tokens: I) -> SqlResult<Operand>
where
    I: IntoIterator<Item = Token>,
{
    let mut stack: Vec<Operand> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(value) => stack.push(Operand::new(value)),
            Token::Operator(op) => {
                let available = stack.len();
                let (Some(y), Some(x)) = (stack.pop(), stack.pop()) else {
                    return Err(SqlError::malformed(format!(
                        "operator '{op}' needs two operands, found {available}"
                    )));
                };
                stack.push(op.apply(x, y));
            }
        }
    }

    let remaining = stack.len();
    match (stack.pop(), stack.is_empty()) {
        (Some(root), true) => Ok(root),
        _ => Err(SqlError::malformed(format!(
            "expected one value after evaluation, {remaining} remain"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindValue;
    use crate::operator::Operator;
    use crate::value::Value;

    fn ident(s: &str) -> Token {
        Token::Operand(Value::Identifier(s.to_string()))
    }

    fn lit(v: impl Into<BindValue>) -> Token {
        Token::Operand(Value::Literal(v.into()))
    }

    #[test]
    fn single_comparison() {
        let root = evaluate(vec![ident("a"), lit(1), Operator::Eq.into()]).unwrap();
        assert_eq!(root.value, Value::Chunk("(a = ?)".to_string()));
        assert_eq!(root.binds, vec![BindValue::Int(1)]);
    }

    #[test]
    fn x_is_pushed_first() {
        let root = evaluate(vec![lit(1), ident("a"), Operator::Lt.into()]).unwrap();
        assert_eq!(root.value, Value::Chunk("(? < a)".to_string()));
    }

    #[test]
    fn binds_follow_text_order() {
        let root = evaluate(vec![
            ident("a"),
            lit("first"),
            Operator::Eq.into(),
            ident("b"),
            lit("second"),
            Operator::Eq.into(),
            Operator::And.into(),
        ])
        .unwrap();
        assert_eq!(root.value, Value::Chunk("((a = ?) and (b = ?))".to_string()));
        assert_eq!(
            root.binds,
            vec![BindValue::from("first"), BindValue::from("second")]
        );
    }

    #[test]
    fn lone_operand_is_returned() {
        let root = evaluate(vec![ident("a")]).unwrap();
        assert_eq!(root.value, Value::Identifier("a".to_string()));
    }

    #[test]
    fn underflow_is_malformed() {
        let err = evaluate(vec![ident("a"), Operator::Eq.into()]).unwrap_err();
        assert!(err.is_malformed());

        let err = evaluate(vec![Token::Operator(Operator::And)]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn leftover_operands_are_malformed() {
        let err = evaluate(vec![ident("a"), lit(1)]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn empty_stream_is_malformed() {
        assert!(evaluate(Vec::<Token>::new()).unwrap_err().is_malformed());
    }
}
