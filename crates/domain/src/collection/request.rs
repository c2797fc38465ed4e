//! Request definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::script::TestScript;
use crate::request::HttpMethod;

/// Body mode used when none is given.
pub const DEFAULT_BODY_MODE: &str = "raw";

/// A request URL.
///
/// The model does not decompose hosts: `host` mirrors `raw` as a single
/// element, or is empty when `raw` is empty. Build it with [`Url::from_raw`].
/// Deserializing accepts a bare string or an object (joining `host` when
/// `raw` is absent) and always re-derives `host` from `raw`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "UrlInput")]
pub struct Url {
    /// URL exactly as the user typed it.
    pub raw: String,
    /// Host segments.
    pub host: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UrlInput {
    Text(String),
    Fields {
        raw: Option<String>,
        #[serde(default)]
        host: Vec<Value>,
    },
}

impl From<UrlInput> for Url {
    fn from(input: UrlInput) -> Self {
        match input {
            UrlInput::Text(raw) | UrlInput::Fields { raw: Some(raw), .. } => Self::from_raw(raw),
            UrlInput::Fields { raw: None, host } => Self::from_raw(
                host.iter()
                    .map(|segment| match segment {
                        Value::String(text) => text.clone(),
                        Value::Number(number) => number.to_string(),
                        Value::Bool(flag) => flag.to_string(),
                        _ => String::new(),
                    })
                    .collect::<Vec<_>>()
                    .join("."),
            ),
        }
    }
}

impl Url {
    /// Wraps a raw URL, deriving `host` from it.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let host = if raw.is_empty() {
            Vec::new()
        } else {
            vec![raw.clone()]
        };
        Self { raw, host }
    }

    /// Returns the raw URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// A request header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Header name.
    pub key: String,
    /// Header value.
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Body mode label (`raw` for text bodies).
    pub mode: String,
    /// Raw body text.
    pub raw: String,
}

impl Body {
    /// Creates a raw text body.
    #[must_use]
    pub fn raw_text(raw: impl Into<String>) -> Self {
        Self {
            mode: DEFAULT_BODY_MODE.to_string(),
            raw: raw.into(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::raw_text("")
    }
}

/// The HTTP part of a request: method, headers, URL and body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestDetails {
    /// HTTP method.
    pub method: HttpMethod,
    /// Headers in order.
    #[serde(default)]
    pub header: Vec<Header>,
    /// Target URL.
    #[serde(default)]
    pub url: Url,
    /// Request body.
    #[serde(default)]
    pub body: Body,
}

/// One request definition plus its test scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Request name. Not required to be unique.
    pub name: String,
    /// HTTP definition.
    pub request: RequestDetails,
    /// Test scripts. Never empty.
    #[serde(rename = "event", default = "default_tests")]
    pub tests: Vec<TestScript>,
    /// Additional top-level fields carried through untouched.
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

fn default_tests() -> Vec<TestScript> {
    vec![TestScript::empty()]
}

impl Request {
    /// Creates a request with the given name used verbatim.
    ///
    /// Use [`make_request`](super::make_request) for the timestamped names the
    /// editor hands out.
    #[must_use]
    pub fn new(name: impl Into<String>, method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            request: RequestDetails {
                method,
                header: Vec::new(),
                url: Url::from_raw(url),
                body: Body::default(),
            },
            tests: default_tests(),
            extensions: Map::new(),
        }
    }

    /// Returns the primary test script.
    #[must_use]
    pub fn test_script(&self) -> Option<&TestScript> {
        self.tests.first()
    }

    /// Returns the assertion blocks of the primary test script.
    #[must_use]
    pub fn assertions(&self) -> &[String] {
        match self.test_script() {
            Some(script) => script.exec(),
            None => &[],
        }
    }

    /// Returns a copy of this request's test scripts with the primary
    /// script's `exec` list replaced.
    #[must_use]
    pub fn tests_with_assertions(&self, exec: Vec<String>) -> Vec<TestScript> {
        let mut tests = self.tests.clone();
        match tests.first_mut() {
            Some(primary) => primary.script.exec = exec,
            None => tests.push(TestScript::with_exec(exec)),
        }
        tests
    }
}
