//! Operand values for the stack evaluator.

use crate::bind::BindValue;

/// A single operand in an RPN token stream.
///
/// Only [`Value::Literal`] ever reaches the bind list. `Identifier` and `Chunk`
/// text is inlined verbatim, so it must never carry untrusted input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw parameter data, rendered as `?`.
    Literal(BindValue),
    /// A pre-quoted SQL name.
    Identifier(String),
    /// An already-parenthesized fragment produced by an operator.
    Chunk(String),
}

impl Value {
    /// Text inlined for non-literal values; `None` for literals.
    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Literal(_) => None,
            Value::Identifier(s) | Value::Chunk(s) => Some(s),
        }
    }
}

/// A value together with the binds its text already contains.
///
/// The evaluator pushes and pops these instead of appending to a shared
/// accumulator: applying an operator concatenates the binds of both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub value: Value,
    pub binds: Vec<BindValue>,
}

impl Operand {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            binds: Vec::new(),
        }
    }

    /// Render this operand as it appears inside a larger fragment.
    ///
    /// A literal becomes `?` and moves its data to the end of `binds`;
    /// identifiers and chunks are copied verbatim and carry their own binds.
    pub(crate) fn write_sql(self, out: &mut String, binds: &mut Vec<BindValue>) {
        match self.value {
            Value::Literal(v) => {
                out.push('?');
                binds.push(v);
            }
            Value::Identifier(text) | Value::Chunk(text) => {
                out.push_str(&text);
                binds.extend(self.binds);
            }
        }
    }

    /// Render this operand on its own, returning `(text, binds)`.
    pub fn into_sql(self) -> (String, Vec<BindValue>) {
        let mut out = String::new();
        let mut binds = Vec::new();
        self.write_sql(&mut out, &mut binds);
        (out, binds)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_renders_placeholder() {
        let (sql, binds) = Operand::new(Value::Literal(BindValue::Int(7))).into_sql();
        assert_eq!(sql, "?");
        assert_eq!(binds, vec![BindValue::Int(7)]);
    }

    #[test]
    fn chunk_keeps_its_binds() {
        let op = Operand {
            value: Value::Chunk("(\"a\" = ?)".to_string()),
            binds: vec![BindValue::Int(1)],
        };
        let (sql, binds) = op.into_sql();
        assert_eq!(sql, "(\"a\" = ?)");
        assert_eq!(binds, vec![BindValue::Int(1)]);
    }

    #[test]
    fn identifier_has_no_binds() {
        let (sql, binds) = Operand::new(Value::Identifier("\"a\"".to_string())).into_sql();
        assert_eq!(sql, "\"a\"");
        assert!(binds.is_empty());
    }
}
