//! End-to-end behavior of the collection libraries as the CLI drives them.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use quiver_application::{
    RequestPatch, add_assertion, add_group, add_request, delete_request, remove_assertion,
    update_request,
};
use quiver_domain::{
    Body, Document, ExpectedValue, Header, HttpMethod, TestScript, empty_document,
    json_path_assertion, make_group, make_request, status_code_assertion,
};
use quiver_infrastructure::{ImportError, export_text, import_document};

fn round_trip(doc: &Document) -> String {
    let text = export_text(doc).unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    export_text(&import_document(&parsed).unwrap()).unwrap()
}

fn rich_document() -> Document {
    let mut doc = add_group(&empty_document(), "Users");
    doc = add_group(&doc, "Orders");

    let mut login = make_request("Login", HttpMethod::Post, "https://api.test/login");
    login.request.header = vec![Header::new("Content-Type", "application/json")];
    login.request.body = Body::raw_text(r#"{"user":"a"}"#);
    login
        .extensions
        .insert("description".to_string(), json!("signs in"));
    doc = add_request(&doc, "Users", login.clone());
    doc = add_assertion(&doc, &login.name, status_code_assertion("ok", 200));
    doc = add_assertion(
        &doc,
        &login.name,
        json_path_assertion("token", "data.token", &ExpectedValue::from("abc")),
    );

    doc.groups[1]
        .behavior_flags
        .insert("disableBodyPruning".to_string(), json!(true));
    add_request(&doc, "Orders", make_request("", HttpMethod::Get, ""))
}

#[test]
fn test_export_import_round_trip_is_stable() {
    for doc in [empty_document(), rich_document()] {
        assert_eq!(round_trip(&doc), export_text(&doc).unwrap());
    }
}

#[test]
fn test_add_group_does_not_deduplicate() {
    let doc = add_group(&add_group(&empty_document(), "X"), "X");

    let names: Vec<&str> = doc.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["X", "X"]);
}

#[test]
fn test_delete_after_add_restores_group() {
    let mut doc = empty_document();
    doc.groups.push(make_group("G"));
    let doc = add_request(&doc, "G", make_request("Existing", HttpMethod::Get, "http://x"));

    let request = make_request("Fresh", HttpMethod::Put, "http://y");
    let added = add_request(&doc, "G", request.clone());
    assert_eq!(added.groups[0].requests.len(), 2);

    let restored = delete_request(&added, "G", &request.name);
    assert_eq!(restored.groups[0].requests, doc.groups[0].requests);
}

#[test]
fn test_method_patch_changes_only_method() {
    let mut request = make_request("R", HttpMethod::Get, "http://x/items");
    request.request.header = vec![Header::new("Accept", "*/*")];
    request.request.body = Body::raw_text("payload");
    let name = request.name.clone();
    let doc = add_request(&add_group(&empty_document(), "G"), "G", request.clone());

    let patch: RequestPatch = serde_json::from_value(json!({"request": {"method": "POST"}})).unwrap();
    let updated = update_request(&doc, &name, &patch);

    let after = updated.find_request(&name).unwrap();
    assert_eq!(after.request.method, HttpMethod::Post);
    assert_eq!(after.request.url, request.request.url);
    assert_eq!(after.request.header, request.request.header);
    assert_eq!(after.request.body, request.request.body);
    assert_eq!(after.tests, request.tests);
    assert_eq!(doc.find_request(&name).unwrap().request.method, HttpMethod::Get);
}

#[test]
fn test_url_patch_from_json_survives_round_trip() {
    let doc = rich_document();
    let name = doc.groups[0].requests[0].name.clone();

    for body in [
        json!({ "request": { "url": { "raw": "http://a" } } }),
        json!({ "request": { "url": "http://b", "method": "patch" } }),
    ] {
        let patch: RequestPatch = serde_json::from_value(body).unwrap();
        let patched = update_request(&doc, &name, &patch);
        let text = export_text(&patched).unwrap();
        assert_eq!(round_trip(&patched), text);
    }
}

#[test]
fn test_import_nested_group() {
    let raw = json!({
        "item": [{
            "name": "G",
            "item": [{ "name": "R", "request": { "method": "GET", "url": "http://x" } }]
        }]
    });

    let doc = import_document(&raw).unwrap();
    assert_eq!(doc.groups.len(), 1);
    let group = &doc.groups[0];
    assert_eq!(group.name, "G");
    assert_eq!(group.requests.len(), 1);
    let request = &group.requests[0];
    assert_eq!(request.name, "R");
    assert_eq!(request.request.url.raw, "http://x");
    assert!(request.request.header.is_empty());
    assert_eq!(request.tests, vec![TestScript::empty()]);
}

#[test]
fn test_import_bare_request_lands_in_default_group() {
    let raw = json!({ "item": [{ "name": "R2", "request": { "method": "POST" } }] });

    let doc = import_document(&raw).unwrap();
    assert_eq!(doc.groups.len(), 1);
    assert_eq!(doc.groups[0].name, "Imported Requests");
    assert_eq!(doc.groups[0].requests[0].name, "R2");
    assert_eq!(doc.groups[0].requests[0].request.method, HttpMethod::Post);
}

#[test]
fn test_assertion_literals() {
    let status = status_code_assertion("ok", 201);
    assert!(status.contains("\"ok\""));
    assert!(status.contains("status(201)"));

    let quoted = json_path_assertion("t", "data.id", &ExpectedValue::from("abc"));
    assert!(quoted.contains("eql(\"abc\")"));
    let bare = json_path_assertion("t", "data.id", &ExpectedValue::from(5_i64));
    assert!(bare.contains("eql(5)"));
}

#[test]
fn test_malformed_input_is_rejected_without_touching_documents() {
    let before = rich_document();
    let snapshot = before.clone();

    for raw in [Value::Null, json!(42)] {
        assert!(matches!(
            import_document(&raw),
            Err(ImportError::InvalidFormat(_))
        ));
    }
    assert_eq!(before, snapshot);
}

#[test]
fn test_assertions_can_be_removed_by_index() {
    let doc = rich_document();
    let name = doc.groups[0].requests[0].name.clone();

    let trimmed = remove_assertion(&doc, &name, 0);
    let remaining = trimmed.find_request(&name).unwrap().assertions();
    assert_eq!(remaining.len(), 1);
    assert!(remaining[0].contains("data.token"));

    assert_eq!(remove_assertion(&doc, &name, 9), doc);
}
