//! The result map every action returns

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Error;

/// Key of the return code in [`Outcome::into_map`]
pub const RETURN_CODE: &str = "returnCode";
/// Key of the message or primary payload
pub const RETURN_RESULT: &str = "returnResult";
/// Key of the failure diagnostic
pub const EXCEPTION: &str = "exception";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    Success,
    Failure,
}

impl ReturnCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnCode::Success => "0",
            ReturnCode::Failure => "-1",
        }
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Success with a message, or failure with a message and a diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub return_code: ReturnCode,
    pub return_result: String,
    /// Empty on success
    pub exception: String,
    /// Action specific outputs, such as `rowsCount`
    pub outputs: BTreeMap<String, String>,
}

impl Outcome {
    pub fn success<S: Into<String>>(result: S) -> Self {
        Self {
            return_code: ReturnCode::Success,
            return_result: result.into(),
            exception: String::new(),
            outputs: BTreeMap::new(),
        }
    }

    /// Failure carrying the error message and its debug rendering
    pub fn failure(error: &Error) -> Self {
        Self {
            return_code: ReturnCode::Failure,
            return_result: error.to_string(),
            exception: format!("{:?}", error),
            outputs: BTreeMap::new(),
        }
    }

    /// Add an extra named output
    pub fn with_output<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.outputs.insert(key.into(), value.to_string());
        self
    }

    pub fn is_success(&self) -> bool {
        self.return_code == ReturnCode::Success
    }

    /// Named output, if the action produced it
    pub fn output(&self, key: &str) -> Option<&str> {
        self.outputs.get(key).map(String::as_str)
    }

    /// Flatten into the string map handed back to callers
    pub fn into_map(self) -> BTreeMap<String, String> {
        let mut map = self.outputs;
        map.insert(RETURN_CODE.to_string(), self.return_code.to_string());
        map.insert(RETURN_RESULT.to_string(), self.return_result);
        map.insert(EXCEPTION.to_string(), self.exception);
        map
    }
}

impl From<Error> for Outcome {
    fn from(error: Error) -> Self {
        Outcome::failure(&error)
    }
}
