//! Coercion of raw text tokens into typed cell input
//!
//! Tokens coming from delimited payloads are tried as an integer first, then
//! as a decimal, and fall back to text. The text variant keeps the token
//! exactly as given.

use super::CellValue;

/// A raw token after numeric/text coercion
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarInput {
    /// Whole number (`"42"`, `"-7"`)
    Integer(i64),
    /// Finite decimal number (`"7.2"`, `"1e3"`)
    Decimal(f64),
    /// Anything else, verbatim
    Text(String),
}

impl ScalarInput {
    /// Parse a token using the integer → decimal → text chain.
    ///
    /// `NaN` and infinities are not accepted as decimals; they stay text.
    pub fn parse(token: &str) -> Self {
        if let Ok(n) = token.parse::<i64>() {
            return ScalarInput::Integer(n);
        }
        match token.parse::<f64>() {
            Ok(n) if n.is_finite() => ScalarInput::Decimal(n),
            _ => ScalarInput::Text(token.to_string()),
        }
    }

    /// Check whether the token was numeric
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ScalarInput::Text(_))
    }

    /// Numeric value, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScalarInput::Integer(n) => Some(*n as f64),
            ScalarInput::Decimal(n) => Some(*n),
            ScalarInput::Text(_) => None,
        }
    }
}

impl From<ScalarInput> for CellValue {
    fn from(input: ScalarInput) -> Self {
        match input {
            ScalarInput::Integer(n) => CellValue::Number(n as f64),
            ScalarInput::Decimal(n) => CellValue::Number(n),
            ScalarInput::Text(s) => CellValue::string(s),
        }
    }
}
