//! Error types for sqlrpn

use thiserror::Error;

/// Result type alias for sqlrpn operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Faults raised while building SQL.
///
/// Every variant reflects a caller construction error, so none of them is
/// worth retrying. All are raised before any SQL text is handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// Expression tree or token stream has an invalid shape
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    /// Operator symbol is not in the operator table
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Insert/update input does not line up with its column list
    #[error("Structural mismatch: {0}")]
    StructuralMismatch(String),

    /// ORDER BY direction other than `asc` / `desc`
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    /// Invalid builder configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SqlError {
    /// Create a malformed expression error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedExpression(message.into())
    }

    /// Create an unknown operator error for `symbol`
    pub fn unknown_operator(symbol: impl Into<String>) -> Self {
        Self::UnknownOperator(symbol.into())
    }

    /// Create a structural mismatch error
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::StructuralMismatch(message.into())
    }

    /// Create an unknown direction error for `direction`
    pub fn unknown_direction(direction: impl Into<String>) -> Self {
        Self::UnknownDirection(direction.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a malformed expression error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedExpression(_))
    }

    /// Check if this is an unknown operator error
    pub fn is_unknown_operator(&self) -> bool {
        matches!(self, Self::UnknownOperator(_))
    }

    /// Check if this is a structural mismatch error
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::StructuralMismatch(_))
    }

    /// Check if this is an unknown direction error
    pub fn is_unknown_direction(&self) -> bool {
        matches!(self, Self::UnknownDirection(_))
    }
}
