//! Postman Importer - Main Import Logic
//!
//! Normalizes an arbitrary JSON value into a [`Document`]. Only a non-object
//! top level is an error; every other oddity is defaulted, dropped or kept
//! verbatim, and recorded as an [`ImportWarning`].

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info};

use quiver_domain::collection::DEFAULT_BODY_MODE;
use quiver_domain::{
    Body, CANONICAL_SCHEMA, DEFAULT_SCRIPT_TYPE, Document, Group, Header, HttpMethod, Info,
    Request, RequestDetails, TestScript, Url,
};

use super::raw::{RawGroup, RawItem, RawRequest, scalar_text, str_field};
use super::warning::{ImportWarning, WarningStats};

/// Name of the group that collects requests found outside any folder.
pub const DEFAULT_GROUP_NAME: &str = "Imported Requests";

/// Name given to groups without one.
pub const UNNAMED_GROUP: &str = "Unnamed Group";

/// Name given to requests without one.
pub const UNNAMED_REQUEST: &str = "Unnamed Request";

/// Import configuration options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportConfig {
    /// Maximum input size in bytes (default: 10MB)
    pub max_file_size: usize,
    /// Maximum number of top-level and nested elements (default: 1000)
    pub max_items: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_items: 1000,
        }
    }
}

/// Import error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The top-level value is not an object.
    #[error("not a valid collection file: {0}")]
    InvalidFormat(String),
    /// JSON parsing failed
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    /// Input exceeds the maximum allowed size
    #[error("file too large: {size} bytes exceeds maximum of {max} bytes")]
    FileTooLarge {
        /// Actual size in bytes
        size: usize,
        /// Maximum allowed size in bytes
        max: usize,
    },
    /// Too many elements in the collection
    #[error("too many items: {count} exceeds maximum of {max}")]
    TooManyItems {
        /// Actual element count
        count: usize,
        /// Maximum allowed elements
        max: usize,
    },
}

/// A normalized document plus the notes collected while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    /// The imported document.
    pub document: Document,
    /// What was defaulted or dropped.
    pub warnings: Vec<ImportWarning>,
}

/// Normalizes `raw` into a document with no size limits, discarding warnings.
///
/// # Errors
///
/// Returns [`ImportError::InvalidFormat`] when `raw` is not a JSON object.
pub fn import_document(raw: &Value) -> Result<Document, ImportError> {
    Normalizer::default()
        .run(raw)
        .map(|outcome| outcome.document)
}

/// Main Postman importer
#[derive(Debug, Clone, Default)]
pub struct PostmanImporter {
    config: ImportConfig,
}

impl PostmanImporter {
    /// Create a new importer with default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new importer with custom config
    #[must_use]
    pub const fn with_config(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Parses and imports collection text.
    ///
    /// # Errors
    ///
    /// Fails when the text is too large, is not JSON, has too many elements,
    /// or its top level is not an object.
    pub fn import_str(&self, content: &str) -> Result<ImportOutcome, ImportError> {
        if content.len() > self.config.max_file_size {
            return Err(ImportError::FileTooLarge {
                size: content.len(),
                max: self.config.max_file_size,
            });
        }
        let raw: Value =
            serde_json::from_str(content).map_err(|e| ImportError::InvalidJson(e.to_string()))?;
        self.import_value(&raw)
    }

    /// Imports an already-parsed value.
    ///
    /// # Errors
    ///
    /// Fails when the top level is not an object or has too many elements.
    pub fn import_value(&self, raw: &Value) -> Result<ImportOutcome, ImportError> {
        let count = Self::count_items(raw);
        if count > self.config.max_items {
            return Err(ImportError::TooManyItems {
                count,
                max: self.config.max_items,
            });
        }

        let outcome = Normalizer::default().run(raw)?;
        let stats = WarningStats::from_warnings(&outcome.warnings);
        info!(
            collection = %outcome.document.info.name,
            groups = outcome.document.groups.len(),
            requests = outcome.document.request_count(),
            warnings = stats.total(),
            "imported collection"
        );
        Ok(outcome)
    }

    /// Counts top-level elements plus the elements nested one level below.
    fn count_items(raw: &Value) -> usize {
        raw.get("item")
            .and_then(Value::as_array)
            .map_or(0, |items| {
                items
                    .iter()
                    .map(|item| 1 + item.get("item").and_then(Value::as_array).map_or(0, Vec::len))
                    .sum()
            })
    }
}

/// Accumulates warnings while walking one input.
#[derive(Debug, Default)]
struct Normalizer {
    warnings: Vec<ImportWarning>,
}

impl Normalizer {
    fn run(mut self, raw: &Value) -> Result<ImportOutcome, ImportError> {
        let root = raw.as_object().ok_or_else(|| {
            ImportError::InvalidFormat(format!(
                "expected a JSON object at the top level, found {}",
                describe(raw)
            ))
        })?;

        let info = self.info(root);
        let groups = self.groups(root);
        Ok(ImportOutcome {
            document: Document { info, groups },
            warnings: self.warnings,
        })
    }

    fn note(&mut self, warning: ImportWarning) {
        debug!(%warning, "import note");
        self.warnings.push(warning);
    }

    fn info(&mut self, root: &Map<String, Value>) -> Info {
        let fields = root.get("info").and_then(Value::as_object);
        let name = fields.and_then(|f| str_field(f, "name"));
        let schema = fields.and_then(|f| str_field(f, "schema"));

        if name.is_none() {
            self.note(ImportWarning::info(
                "info.name",
                "collection name missing; using placeholder",
            ));
        }
        if schema.is_none() {
            self.note(ImportWarning::info(
                "info.schema",
                "schema missing; using the v2.1 identifier",
            ));
        }

        let defaults = Info::default();
        Info {
            name: name.map_or(defaults.name, str::to_string),
            schema: schema.map_or_else(|| CANONICAL_SCHEMA.to_string(), str::to_string),
        }
    }

    fn groups(&mut self, root: &Map<String, Value>) -> Vec<Group> {
        let items: &[Value] = match root.get("item") {
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                self.note(ImportWarning::info(
                    "item",
                    format!("expected a sequence, found {}; treated as empty", describe(other)),
                ));
                &[]
            }
            None => &[],
        };

        let mut groups: Vec<Group> = Vec::new();
        let mut default_group: Option<usize> = None;

        for (index, value) in items.iter().enumerate() {
            let path = format!("item[{index}]");
            match RawItem::classify(value) {
                RawItem::Group(raw) => {
                    let group = self.group(raw, &path);
                    groups.push(group);
                }
                RawItem::Request(raw) => {
                    let request = self.request(raw, &path);
                    let slot = *default_group.get_or_insert_with(|| {
                        groups.push(Group::new(DEFAULT_GROUP_NAME));
                        groups.len() - 1
                    });
                    groups[slot].requests.push(request);
                }
                RawItem::Unrecognized => self.note(ImportWarning::warning(
                    path,
                    "element is neither a group nor a request; dropped",
                )),
            }
        }
        groups
    }

    fn group(&mut self, raw: RawGroup<'_>, path: &str) -> Group {
        let mut group = Group::new(raw.name().unwrap_or(UNNAMED_GROUP));
        if let Some(flags) = raw.behavior_flags() {
            group.behavior_flags = flags.clone();
        }

        for (index, child) in raw.children.iter().enumerate() {
            let child_path = format!("{path}.item[{index}]");
            match RawRequest::from_value(child) {
                Some(request) => {
                    let request = self.request(request, &child_path);
                    group.requests.push(request);
                }
                None => self.note(ImportWarning::warning(
                    child_path,
                    "nested element has no request object; skipped",
                )),
            }
        }
        group
    }

    fn request(&mut self, raw: RawRequest<'_>, path: &str) -> Request {
        let method = self.method(raw, path);
        let body = self.body(raw.request.get("body"), path);
        Request {
            name: raw.name().unwrap_or(UNNAMED_REQUEST).to_string(),
            request: RequestDetails {
                method,
                header: headers(raw.request.get("header")),
                url: url(raw.request.get("url")),
                body,
            },
            tests: tests(raw.item.get("event")),
            extensions: raw
                .extra_fields()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    fn method(&mut self, raw: RawRequest<'_>, path: &str) -> HttpMethod {
        let Some(text) = raw.method() else {
            return HttpMethod::default();
        };
        text.parse().unwrap_or_else(|_| {
            self.note(ImportWarning::warning(
                format!("{path}.request.method"),
                format!("unsupported method `{text}`; using GET"),
            ));
            HttpMethod::default()
        })
    }

    fn body(&mut self, value: Option<&Value>, path: &str) -> Body {
        let Some(fields) = value.and_then(Value::as_object) else {
            return Body::default();
        };
        let mode = str_field(fields, "mode").unwrap_or(DEFAULT_BODY_MODE);
        let raw = str_field(fields, "raw");
        if raw.is_none() && mode != DEFAULT_BODY_MODE {
            self.note(ImportWarning::info(
                format!("{path}.request.body"),
                format!("body mode `{mode}` has no raw text; only the mode is kept"),
            ));
        }
        Body {
            mode: mode.to_string(),
            raw: raw.unwrap_or_default().to_string(),
        }
    }
}

/// Builds a URL from a string, an object with `raw` or `host`, or nothing.
fn url(value: Option<&Value>) -> Url {
    let raw = match value {
        Some(Value::String(raw)) => raw.clone(),
        Some(Value::Object(fields)) => match str_field(fields, "raw") {
            Some(raw) => raw.to_string(),
            None => join_host(fields.get("host")),
        },
        _ => String::new(),
    };
    Url::from_raw(raw)
}

fn join_host(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(segments)) => segments
            .iter()
            .map(|segment| scalar_text(Some(segment)))
            .collect::<Vec<_>>()
            .join("."),
        Some(Value::String(host)) => host.clone(),
        _ => String::new(),
    }
}

fn headers(value: Option<&Value>) -> Vec<Header> {
    value
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| Header::new(scalar_text(entry.get("key")), scalar_text(entry.get("value"))))
                .collect()
        })
        .unwrap_or_default()
}

/// Collects `listen == "test"` events; always returns at least one script.
fn tests(value: Option<&Value>) -> Vec<TestScript> {
    let mut scripts: Vec<TestScript> = value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|event| event.get("listen").and_then(Value::as_str) == Some("test"))
        .filter_map(|event| event.get("script"))
        .map(|script| {
            let mut test = TestScript::with_exec(exec_lines(script.get("exec")));
            test.script.script_type = script
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_SCRIPT_TYPE)
                .to_string();
            test
        })
        .collect();

    if scripts.is_empty() {
        scripts.push(TestScript::empty());
    }
    scripts
}

fn exec_lines(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(line)) => vec![line.clone()],
        Some(Value::Array(lines)) => lines
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
