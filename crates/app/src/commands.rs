//! Command execution.
//!
//! Every command loads its input through the importer, runs one editing
//! operation, and returns the canonical text of the result.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use quiver_application::{
    CreateRequest, CreateRequestInput, RequestPatch, add_assertion, add_group, add_request,
    delete_request, remove_assertion, update_request,
};
use quiver_domain::{
    Assertion, Body, Document, ExpectedValue, Header, HttpMethod, Info, assertion_title,
    empty_document,
};
use quiver_infrastructure::{
    PostmanImporter, SystemClock, WarningSeverity, WarningStats, export_text, from_json,
};

use crate::cli::{AssertionCommand, Command};
use crate::config::Config;

/// Runs `command` and returns the text to emit.
///
/// # Errors
///
/// Fails when an input file cannot be read or imported, or a patch is not
/// valid JSON.
pub fn run(command: &Command, config: &Config) -> Result<String> {
    match command {
        Command::New { name } => {
            let mut doc = empty_document();
            if let Some(name) = name {
                doc.info = Info {
                    name: name.clone(),
                    ..Info::default()
                };
            }
            render(&doc)
        }
        Command::Normalize { file } => render(&load(file, config)?),
        Command::Inspect { file } => Ok(inspect(&load(file, config)?)),
        Command::AddGroup { file, name } => {
            let doc = load(file, config)?;
            render(&add_group(&doc, name))
        }
        Command::AddRequest {
            file,
            group,
            name,
            method,
            url,
        } => {
            let doc = load(file, config)?;
            let request = CreateRequest::new(SystemClock).execute(CreateRequestInput {
                name: name.clone(),
                method: *method,
                url: url.clone(),
            });
            info!(request = %request.name, group = %group, "adding request");
            let found = target_found(&doc, command);
            edit(add_request(&doc, group, request), found, "group", group)
        }
        Command::DeleteRequest {
            file,
            group,
            request,
        } => {
            let doc = load(file, config)?;
            let found = target_found(&doc, command);
            edit(delete_request(&doc, group, request), found, "request", request)
        }
        Command::UpdateRequest {
            file,
            request,
            method,
            url,
            body,
            rename,
            headers,
            clear_headers,
            patch,
        } => {
            let doc = load(file, config)?;
            let base = match patch {
                Some(text) => from_json::<RequestPatch>(text).context("invalid --patch JSON")?,
                None => RequestPatch::default(),
            };
            let merged = flag_patches(
                *method,
                url.as_deref(),
                body.as_deref(),
                rename.as_deref(),
                headers,
                *clear_headers,
            )
                .into_iter()
                .fold(base, RequestPatch::then);
            let found = target_found(&doc, command);
            edit(update_request(&doc, request, &merged), found, "request", request)
        }
        Command::AddTest {
            file,
            request,
            assertion,
        } => {
            let doc = load(file, config)?;
            let assertion = to_assertion(assertion);
            info!(request = %request, test = assertion.name(), "adding assertion");
            let found = target_found(&doc, command);
            let next = add_assertion(&doc, request, assertion.to_script());
            edit(next, found, "request", request)
        }
        Command::RemoveTest {
            file,
            request,
            index,
        } => {
            let doc = load(file, config)?;
            let count = doc.find_request(request).map(|r| r.assertions().len());
            if count.is_some_and(|count| *index >= count) {
                warn!(request = %request, index, "no assertion at this index");
            }
            let next = remove_assertion(&doc, request, *index);
            edit(next, target_found(&doc, command), "request", request)
        }
    }
}

/// Turns the individual `update-request` flags into patches, in flag order.
fn flag_patches(
    method: Option<HttpMethod>,
    url: Option<&str>,
    body: Option<&str>,
    rename: Option<&str>,
    headers: &[Header],
    clear_headers: bool,
) -> Vec<RequestPatch> {
    let mut patches = Vec::new();
    if let Some(method) = method {
        patches.push(RequestPatch::method(method));
    }
    if let Some(url) = url {
        patches.push(RequestPatch::url(url));
    }
    if let Some(body) = body {
        patches.push(RequestPatch::body(Body::raw_text(body)));
    }
    if clear_headers || !headers.is_empty() {
        patches.push(RequestPatch::headers(headers.to_vec()));
    }
    if let Some(rename) = rename {
        patches.push(RequestPatch::rename(rename));
    }
    patches
}

fn to_assertion(command: &AssertionCommand) -> Assertion {
    match command {
        AssertionCommand::Status { name, code } => Assertion::status(name.as_str(), *code),
        AssertionCommand::JsonPath {
            name,
            path,
            expected,
            string,
        } => {
            let expected = if *string {
                ExpectedValue::String(expected.clone())
            } else {
                ExpectedValue::infer(expected)
            };
            Assertion::json_path(name.as_str(), path.as_str(), expected)
        }
        AssertionCommand::ArrayLength { name, path, length } => {
            Assertion::array_length(name.as_str(), path.as_str(), *length)
        }
    }
}

fn load(path: &Path, config: &Config) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let outcome = PostmanImporter::with_config(config.import)
        .import_str(&content)
        .with_context(|| format!("failed to import {}", path.display()))?;

    for warning in &outcome.warnings {
        match warning.severity {
            WarningSeverity::Warning => warn!(path = %warning.path, "{}", warning.message),
            WarningSeverity::Info => debug!(path = %warning.path, "{}", warning.message),
        }
    }
    let stats = WarningStats::from_warnings(&outcome.warnings);
    if stats.has_losses() {
        warn!(
            dropped = stats.warning_count,
            "some input was dropped or replaced during import"
        );
    }
    Ok(outcome.document)
}

/// Whether the group or request an editing command addresses exists in `doc`.
fn target_found(doc: &Document, command: &Command) -> bool {
    match command {
        Command::AddRequest { group, .. } => doc.find_group(group).is_some(),
        Command::DeleteRequest { group, request, .. } => doc
            .find_group(group)
            .is_some_and(|g| g.find_request(request).is_some()),
        Command::UpdateRequest { request, .. }
        | Command::AddTest { request, .. }
        | Command::RemoveTest { request, .. } => doc.find_request(request).is_some(),
        Command::New { .. }
        | Command::Normalize { .. }
        | Command::Inspect { .. }
        | Command::AddGroup { .. } => true,
    }
}

/// Renders the edited document, noting when the target was not found.
fn edit(after: Document, found: bool, kind: &str, target: &str) -> Result<String> {
    if !found {
        warn!(kind, target, "target not found; document unchanged");
    }
    render(&after)
}

fn render(doc: &Document) -> Result<String> {
    export_text(doc).context("failed to render collection")
}

fn inspect(doc: &Document) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} requests)", doc.info.name, doc.request_count());
    for group in &doc.groups {
        let _ = writeln!(out, "  {}", group.name);
        for request in &group.requests {
            let details = &request.request;
            let _ = writeln!(
                out,
                "    {} {} {}",
                request.name,
                details.method,
                details.url.as_str()
            );
            for (index, block) in request.assertions().iter().enumerate() {
                let title = assertion_title(block).unwrap_or_else(|| "(custom)".to_string());
                let _ = writeln!(out, "      [{index}] {title}");
            }
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quiver_domain::Url;
    use std::io::Write as _;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "info": { "name": "Shop" },
        "item": [
            {
                "name": "Users",
                "item": [
                    { "name": "Get User", "request": { "method": "get", "url": "http://x/u" } }
                ]
            }
        ]
    }"#;

    fn write_sample(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn reparse(text: &str) -> Document {
        quiver_infrastructure::import_document(&serde_json::from_str(text).unwrap()).unwrap()
    }

    fn path_of(file: &NamedTempFile) -> PathBuf {
        file.path().to_path_buf()
    }

    #[test]
    fn test_new_uses_given_name() {
        let text = run(
            &Command::New {
                name: Some("Shop".to_string()),
            },
            &Config::default(),
        )
        .unwrap();
        assert_eq!(reparse(&text).info.name, "Shop");
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let file = write_sample(SAMPLE);
        let text = run(
            &Command::Normalize {
                file: path_of(&file),
            },
            &Config::default(),
        )
        .unwrap();

        let doc = reparse(&text);
        let request = doc.find_request("Get User").unwrap();
        assert_eq!(request.request.method, HttpMethod::Get);
        assert_eq!(request.tests.len(), 1);
        assert!(text.contains("\"schema\""));
    }

    #[test]
    fn test_update_request_flags_override_patch() {
        let file = write_sample(SAMPLE);
        let text = run(
            &Command::UpdateRequest {
                file: path_of(&file),
                request: "Get User".to_string(),
                method: Some(HttpMethod::Delete),
                url: None,
                body: None,
                rename: None,
                headers: Vec::new(),
                clear_headers: false,
                patch: Some(r#"{"request": {"method": "PUT"}, "description": "d"}"#.to_string()),
            },
            &Config::default(),
        )
        .unwrap();

        let doc = reparse(&text);
        let request = doc.find_request("Get User").unwrap();
        assert_eq!(request.request.method, HttpMethod::Delete);
        assert_eq!(request.request.url.raw, "http://x/u");
        assert_eq!(request.extensions["description"], "d");
    }

    #[test]
    fn test_update_request_replaces_and_clears_headers() {
        let file = write_sample(SAMPLE);
        let update = |headers: Vec<Header>, clear_headers: bool, file: &NamedTempFile| {
            run(
                &Command::UpdateRequest {
                    file: path_of(file),
                    request: "Get User".to_string(),
                    method: None,
                    url: None,
                    body: None,
                    rename: None,
                    headers,
                    clear_headers,
                    patch: None,
                },
                &Config::default(),
            )
            .unwrap()
        };

        let text = update(
            vec![Header::new("Accept", "*/*"), Header::new("X-Id", "7")],
            false,
            &file,
        );
        let doc = reparse(&text);
        let request = doc.find_request("Get User").unwrap();
        assert_eq!(
            request.request.header,
            vec![Header::new("Accept", "*/*"), Header::new("X-Id", "7")]
        );
        assert_eq!(request.request.url.raw, "http://x/u");

        let with_headers = write_sample(&text);
        let cleared = reparse(&update(Vec::new(), true, &with_headers));
        assert!(cleared.find_request("Get User").unwrap().request.header.is_empty());

        let untouched = reparse(&update(Vec::new(), false, &with_headers));
        assert_eq!(untouched.find_request("Get User").unwrap().request.header.len(), 2);
    }

    #[test]
    fn test_update_request_patch_accepts_lenient_shapes() {
        let file = write_sample(SAMPLE);
        let text = run(
            &Command::UpdateRequest {
                file: path_of(&file),
                request: "Get User".to_string(),
                method: None,
                url: None,
                body: None,
                rename: None,
                headers: Vec::new(),
                clear_headers: false,
                patch: Some(r#"{"request": {"method": "post", "url": "http://x/v"}}"#.to_string()),
            },
            &Config::default(),
        )
        .unwrap();

        let doc = reparse(&text);
        let request = doc.find_request("Get User").unwrap();
        assert_eq!(request.request.method, HttpMethod::Post);
        assert_eq!(request.request.url, Url::from_raw("http://x/v"));
        assert_eq!(render(&doc).unwrap(), text);
    }

    #[test]
    fn test_target_found_ignores_whether_anything_changed() {
        let file = write_sample(SAMPLE);
        let doc = reparse(&std::fs::read_to_string(file.path()).unwrap());
        let update = |request: &str| Command::UpdateRequest {
            file: path_of(&file),
            request: request.to_string(),
            method: Some(HttpMethod::Get),
            url: None,
            body: None,
            rename: None,
            headers: Vec::new(),
            clear_headers: false,
            patch: None,
        };

        let unchanged = run(&update("Get User"), &Config::default()).unwrap();
        assert_eq!(reparse(&unchanged), doc);
        assert!(target_found(&doc, &update("Get User")));
        assert!(!target_found(&doc, &update("Nope")));

        let delete = |group: &str| Command::DeleteRequest {
            file: path_of(&file),
            group: group.to_string(),
            request: "Get User".to_string(),
        };
        assert!(target_found(&doc, &delete("Users")));
        assert!(!target_found(&doc, &delete("Orders")));
    }

    #[test]
    fn test_update_request_rejects_bad_patch() {
        let file = write_sample(SAMPLE);
        let result = run(
            &Command::UpdateRequest {
                file: path_of(&file),
                request: "Get User".to_string(),
                method: None,
                url: None,
                body: None,
                rename: None,
                headers: Vec::new(),
                clear_headers: false,
                patch: Some("{".to_string()),
            },
            &Config::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_add_and_inspect_assertion() {
        let file = write_sample(SAMPLE);
        let text = run(
            &Command::AddTest {
                file: path_of(&file),
                request: "Get User".to_string(),
                assertion: AssertionCommand::Status {
                    name: "is ok".to_string(),
                    code: 200,
                },
            },
            &Config::default(),
        )
        .unwrap();

        let edited = write_sample(&text);
        let summary = run(
            &Command::Inspect {
                file: path_of(&edited),
            },
            &Config::default(),
        )
        .unwrap();
        assert_eq!(
            summary,
            "Shop (1 requests)\n  Users\n    Get User GET http://x/u\n      [0] is ok\n"
        );
    }

    #[test]
    fn test_json_path_string_flag_keeps_quotes() {
        let block = to_assertion(&AssertionCommand::JsonPath {
            name: "id".to_string(),
            path: "data.id".to_string(),
            expected: "5".to_string(),
            string: true,
        })
        .to_script();
        assert!(block.contains("eql(\"5\")"));

        let block = to_assertion(&AssertionCommand::JsonPath {
            name: "id".to_string(),
            path: "data.id".to_string(),
            expected: "5".to_string(),
            string: false,
        })
        .to_script();
        assert!(block.contains("eql(5)"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = run(
            &Command::Normalize {
                file: PathBuf::from("/nonexistent/quiver.json"),
            },
            &Config::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_non_object_file_is_an_error() {
        let file = write_sample("42");
        let error = run(
            &Command::Normalize {
                file: path_of(&file),
            },
            &Config::default(),
        )
        .unwrap_err();
        assert!(format!("{error:#}").contains("not a valid collection file"));
    }
}
