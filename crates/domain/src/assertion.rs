//! Assertion script generation.
//!
//! Turns a structured assertion description into one literal `pm.test(...)`
//! block for a request's test script. Nothing here parses or runs the
//! generated code; paths are substituted verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Expected value of a JSON path assertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedValue {
    /// Boolean literal.
    Bool(bool),
    /// Numeric literal.
    Number(Number),
    /// String literal, emitted quoted.
    String(String),
}

impl ExpectedValue {
    /// Interprets user text: `true`/`false` become booleans, numeric text
    /// becomes a number, everything else stays a string.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        match text {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => match serde_json::from_str::<Number>(text) {
                Ok(number) => Self::Number(number),
                Err(_) => Self::String(text.to_string()),
            },
        }
    }

    /// Renders the value as a script literal.
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => quote(s),
        }
    }
}

impl fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

impl From<&str> for ExpectedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ExpectedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ExpectedValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ExpectedValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for ExpectedValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// A structured assertion that renders to one script block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    /// Assert exact status code.
    Status {
        /// Test name for display.
        name: String,
        /// Expected status code.
        expected: u16,
    },

    /// Assert the value at a JSON path.
    JsonPathEquals {
        /// Test name for display.
        name: String,
        /// Dot/bracket path into the parsed body (e.g. `data.items[0].id`).
        path: String,
        /// Expected value at path.
        expected: ExpectedValue,
    },

    /// Assert the length of the array at a JSON path.
    ArrayLength {
        /// Test name for display.
        name: String,
        /// Dot/bracket path into the parsed body.
        path: String,
        /// Expected array length.
        length: usize,
    },
}

impl Assertion {
    /// Creates a status code assertion.
    #[must_use]
    pub fn status(name: impl Into<String>, expected: u16) -> Self {
        Self::Status {
            name: name.into(),
            expected,
        }
    }

    /// Creates a JSON path equality assertion.
    #[must_use]
    pub fn json_path(
        name: impl Into<String>,
        path: impl Into<String>,
        expected: impl Into<ExpectedValue>,
    ) -> Self {
        Self::JsonPathEquals {
            name: name.into(),
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Creates an array length assertion.
    #[must_use]
    pub fn array_length(name: impl Into<String>, path: impl Into<String>, length: usize) -> Self {
        Self::ArrayLength {
            name: name.into(),
            path: path.into(),
            length,
        }
    }

    /// Returns the test name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Status { name, .. }
            | Self::JsonPathEquals { name, .. }
            | Self::ArrayLength { name, .. } => name,
        }
    }

    /// Renders the assertion as a script block.
    #[must_use]
    pub fn to_script(&self) -> String {
        match self {
            Self::Status { name, expected } => status_code_assertion(name, *expected),
            Self::JsonPathEquals {
                name,
                path,
                expected,
            } => json_path_assertion(name, path, expected),
            Self::ArrayLength { name, path, length } => {
                array_length_assertion(name, path, *length)
            }
        }
    }
}

/// Generates a block asserting the response status equals `code`.
#[must_use]
pub fn status_code_assertion(name: &str, code: u16) -> String {
    format!(
        "pm.test({}, function () {{\n    pm.response.to.have.status({code});\n}});",
        quote(name)
    )
}

/// Generates a block asserting the value at `path` equals `expected`.
#[must_use]
pub fn json_path_assertion(name: &str, path: &str, expected: &ExpectedValue) -> String {
    format!(
        "pm.test({}, function () {{\n    var jsonData = pm.response.json();\n    pm.expect({}).to.eql({});\n}});",
        quote(name),
        path_access(path),
        expected.to_literal()
    )
}

/// Generates a block asserting the array at `path` has `length` elements.
#[must_use]
pub fn array_length_assertion(name: &str, path: &str, length: usize) -> String {
    format!(
        "pm.test({}, function () {{\n    var jsonData = pm.response.json();\n    pm.expect({}).to.have.lengthOf({length});\n}});",
        quote(name),
        path_access(path)
    )
}

/// Extracts the test name from a generated (or hand-written) `pm.test` block.
#[must_use]
pub fn assertion_title(block: &str) -> Option<String> {
    let rest = block.trim_start().strip_prefix("pm.test(")?;
    serde_json::Deserializer::from_str(rest.trim_start())
        .into_iter::<String>()
        .next()?
        .ok()
}

fn quote(text: &str) -> String {
    Value::from(text).to_string()
}

fn path_access(path: &str) -> String {
    if path.is_empty() {
        "jsonData".to_string()
    } else if path.starts_with('[') {
        format!("jsonData{path}")
    } else {
        format!("jsonData.{path}")
    }
}
