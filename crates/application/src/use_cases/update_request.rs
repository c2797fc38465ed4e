//! Update request use case.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use quiver_domain::{Body, Document, Header, HttpMethod, Request, RequestDetails, TestScript, Url};

/// Top-level keys that name typed request fields and never go to `extensions`.
const RESERVED_KEYS: &[&str] = &["name", "request", "event", "item"];

/// Partial update of a request's HTTP definition.
///
/// Each present field replaces the existing value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestDetailsPatch {
    /// Replacement method.
    #[serde(default)]
    pub method: Option<HttpMethod>,
    /// Replacement URL.
    #[serde(default)]
    pub url: Option<Url>,
    /// Replacement header list.
    #[serde(default)]
    pub header: Option<Vec<Header>>,
    /// Replacement body.
    #[serde(default)]
    pub body: Option<Body>,
}

impl RequestDetailsPatch {
    fn overlay(&mut self, other: Self) {
        if other.method.is_some() {
            self.method = other.method;
        }
        if other.url.is_some() {
            self.url = other.url;
        }
        if other.header.is_some() {
            self.header = other.header;
        }
        if other.body.is_some() {
            self.body = other.body;
        }
    }

    fn apply_to(&self, details: &mut RequestDetails) {
        if let Some(method) = self.method {
            details.method = method;
        }
        if let Some(url) = &self.url {
            details.url = url.clone();
        }
        if let Some(header) = &self.header {
            details.header = header.clone();
        }
        if let Some(body) = &self.body {
            details.body = body.clone();
        }
    }
}

/// Partial update of a request.
///
/// Deserializes from the same shape the host sends: `request`, `event`,
/// `name`, plus any other top-level keys.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestPatch {
    /// Keys merged into the request's HTTP definition.
    #[serde(default)]
    pub request: Option<RequestDetailsPatch>,
    /// Replacement test script list.
    #[serde(rename = "event", default)]
    pub tests: Option<Vec<TestScript>>,
    /// Replacement request name.
    #[serde(default)]
    pub name: Option<String>,
    /// Other top-level keys, merged into the request's extensions.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestPatch {
    /// Patch replacing only the method.
    #[must_use]
    pub fn method(method: HttpMethod) -> Self {
        Self::details(RequestDetailsPatch {
            method: Some(method),
            ..RequestDetailsPatch::default()
        })
    }

    /// Patch replacing only the URL.
    #[must_use]
    pub fn url(raw: impl Into<String>) -> Self {
        Self::details(RequestDetailsPatch {
            url: Some(Url::from_raw(raw)),
            ..RequestDetailsPatch::default()
        })
    }

    /// Patch replacing only the header list.
    #[must_use]
    pub fn headers(header: Vec<Header>) -> Self {
        Self::details(RequestDetailsPatch {
            header: Some(header),
            ..RequestDetailsPatch::default()
        })
    }

    /// Patch replacing only the body.
    #[must_use]
    pub fn body(body: Body) -> Self {
        Self::details(RequestDetailsPatch {
            body: Some(body),
            ..RequestDetailsPatch::default()
        })
    }

    /// Patch merging the given HTTP fields.
    #[must_use]
    pub fn details(details: RequestDetailsPatch) -> Self {
        Self {
            request: Some(details),
            ..Self::default()
        }
    }

    /// Patch replacing the test script list.
    #[must_use]
    pub fn tests(tests: Vec<TestScript>) -> Self {
        Self {
            tests: Some(tests),
            ..Self::default()
        }
    }

    /// Patch renaming the request.
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Combines two patches; fields present in `other` win.
    #[must_use]
    pub fn then(mut self, other: Self) -> Self {
        if let Some(details) = other.request {
            self.request.get_or_insert_default().overlay(details);
        }
        if other.tests.is_some() {
            self.tests = other.tests;
        }
        if other.name.is_some() {
            self.name = other.name;
        }
        self.extra.extend(other.extra);
        self
    }

    /// Applies the patch: `request` keys first, then tests, name and extra keys.
    pub fn apply_to(&self, request: &mut Request) {
        if let Some(details) = &self.request {
            details.apply_to(&mut request.request);
        }
        if let Some(tests) = &self.tests {
            request.tests = if tests.is_empty() {
                vec![TestScript::empty()]
            } else {
                tests.clone()
            };
        }
        if let Some(name) = &self.name {
            request.name.clone_from(name);
        }
        for (key, value) in &self.extra {
            if RESERVED_KEYS.contains(&key.as_str()) {
                warn!(key = %key, "ignoring patch key that aliases a request field");
                continue;
            }
            request.extensions.insert(key.clone(), value.clone());
        }
    }
}

/// Applies `patch` to the first request named `request_name`.
///
/// Groups are scanned in order and only the first match is updated; a second
/// request with the same name, in the same or a later group, is left alone.
#[must_use]
pub fn update_request(doc: &Document, request_name: &str, patch: &RequestPatch) -> Document {
    let mut updated = doc.clone();
    let target = updated
        .groups
        .iter_mut()
        .find_map(|g| g.requests.iter_mut().find(|r| r.name == request_name));
    match target {
        Some(request) => patch.apply_to(request),
        None => debug!(request = request_name, "update_request: no such request"),
    }
    updated
}
