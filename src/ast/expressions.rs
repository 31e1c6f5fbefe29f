use std::fmt::Display;

use crate::Position;

use super::values::Value;

/// Value Expression
/// A literal used as an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueExpr {
    pub value: Value,
    pub position: Position,
}

impl Display for ValueExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.value, self.position)
    }
}
