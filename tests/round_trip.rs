//! Render-then-parse behaviour and the serde shape of the model.

use phpdoc_source::*;

fn method_doc() -> DocComment {
    let mut doc = DocComment::new("Calls the GetWidget operation");
    doc.add_param(ParamTag::new("int", "$id", "the widget id").unwrap());
    doc.add_param(ParamTag::new("string", "$locale", "").unwrap());
    doc.add_throws(ThrowsTag::new("\\SoapFault", "on transport errors").unwrap());
    doc.add_throws(ThrowsTag::new("\\Exception", "").unwrap());
    doc.set_var(VarTag::new("Widget", "widget", "cached result").unwrap());
    doc.set_package(PackageTag::new("Generated"));
    doc.set_author(AuthorTag::new("Jane Doe <jane@example.com>"));
    doc.set_access(AccessTag::new("public").unwrap());
    doc.set_return(ReturnTag::new("Widget", "the widget").unwrap());
    doc
}

// ── Round trip ──────────────────────────────────────────────────

#[test]
fn render_then_parse_preserves_tags() {
    let doc = method_doc();
    let parsed = DocComment::from_string(&doc.to_source()).unwrap();

    assert_eq!(parsed.params(), doc.params());
    assert_eq!(parsed.throws(), doc.throws());
    assert_eq!(parsed.var(), doc.var());
    assert_eq!(parsed.package(), doc.package());
    assert_eq!(parsed.author(), doc.author());
    assert_eq!(parsed.access(), doc.access());
    assert_eq!(parsed.return_tag(), doc.return_tag());
    assert_eq!(parsed.description(), doc.description());
}

#[test]
fn every_buildable_tag_parses_back() {
    // Edge-of-range field values that the constructors accept.
    let entries: Vec<AnnotationEntry> = vec![
        VarTag::new("int", "$$dynamic", "").unwrap().into(),
        VarTag::new(" int ", " count ", "  spread \n over\r\nlines ").unwrap().into(),
        ParamTag::new("?Foo", "x", "").unwrap().into(),
        ParamTag::new("int", "$id", "$id is the key").unwrap().into(),
        ReturnTag::new("Widget", "").unwrap().into(),
        ReturnTag::new("\\A\\B", "@see is not a tag here").unwrap().into(),
        ThrowsTag::new("E", " \t ").unwrap().into(),
        AuthorTag::new("").into(),
        AuthorTag::new("  two\n lines ").into(),
        PackageTag::new("").into(),
        AccessTag::new(" protected ").unwrap().into(),
    ];

    for entry in entries {
        let mut doc = DocComment::default();
        doc.insert(entry.clone());
        let source = doc.to_source();

        let parsed = DocComment::from_string(&source)
            .unwrap_or_else(|err| panic!("{entry:?} rendered as {source:?}: {err}"));
        let mut expected = DocComment::default();
        expected.insert(entry);
        assert_eq!(parsed, expected, "rendered as {source:?}");
    }
}

#[test]
fn license_does_not_survive_round_trip() {
    let mut doc = method_doc();
    doc.set_license(LicenseTag::new("MIT"));
    let parsed = DocComment::from_string(&doc.to_source()).unwrap();
    assert!(parsed.license().is_none());
}

#[test]
fn rendering_parsed_text_is_stable() {
    let source = method_doc().to_source();
    let reparsed = DocComment::from_string(&source).unwrap();
    assert_eq!(reparsed.to_source(), source);
}

#[test]
fn crlf_input_renders_canonically() {
    let source = method_doc().to_source();
    let crlf = source.replace('\n', "\r\n");
    let parsed = DocComment::from_string(&crlf).unwrap();
    assert_eq!(parsed.to_source(), source);
}

// ── serde ───────────────────────────────────────────────────────

#[test]
fn entry_json_is_tagged_by_kind() {
    let entry = AnnotationEntry::from(ParamTag::new("int", "$id", "the widget id").unwrap());
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "param",
            "type_name": "int",
            "name": "id",
            "description": "the widget id",
        })
    );
}

#[test]
fn comment_json_shape() {
    let value = serde_json::to_value(method_doc()).unwrap();
    assert_eq!(
        value["description"],
        serde_json::json!(["Calls the GetWidget operation"])
    );
    assert_eq!(value["return"]["type_name"], "Widget");
    assert_eq!(value["var"]["name"], "widget");
    assert_eq!(value["access"]["level"], "public");
    assert_eq!(value["license"], serde_json::Value::Null);
    assert_eq!(value["params"].as_array().map(Vec::len), Some(2));
}
