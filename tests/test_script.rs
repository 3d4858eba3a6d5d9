use jsonresponse::json::builder::Mode;
use jsonresponse::script::{Operation, Script};
use serde_json::{Value, json};

#[test]
fn test_parse_full_script() {
    let script = Script::from_yaml(
        r#"
input:
  id: 7
  name: widget
code: 201
set:
  - property: message
    value: Created it
"#,
    )
    .unwrap();

    assert_eq!(script.input, Some(json!({"id": 7, "name": "widget"})));
    assert_eq!(script.code, 201);
    assert_eq!(
        script.set,
        vec![Operation {
            property: "message".into(),
            value: json!("Created it"),
        }]
    );
}

#[test]
fn test_defaults() {
    let script = Script::from_yaml("{}").unwrap();
    assert_eq!(script.input, None);
    assert_eq!(script.code, 200);
    assert!(script.set.is_empty());

    let body: Value = serde_json::from_slice(&script.render().body).unwrap();
    assert_eq!(body["statusCode"], json!(400));
    assert_eq!(body["errors"], json!(["No properties set."]));
}

#[test]
fn test_render_script() {
    let script = Script::from_yaml(
        r#"
input: [first, second]
code: 404
set:
  - property: message
    value: Nothing here
"#,
    )
    .unwrap();

    let response = script.render();
    assert_eq!(response.status_line(), "HTTP/1.1 404 Not Found");

    let body: Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "statusCode": 404,
            "message": "Nothing here",
            "errors": [["first", "second"]]
        })
    );
}

#[test]
fn test_integer_input_is_status_only() {
    let script = Script::from_yaml("input: 304").unwrap();
    assert_eq!(script.render().status_line(), "HTTP/1.1 304 Not Modified");
}

#[test]
fn test_rejected_operation_freezes() {
    let script = Script::from_yaml(
        r#"
set:
  - property: data
    value: [1, 2]
  - property: colour
    value: red
  - property: message
    value: ignored
"#,
    )
    .unwrap();

    let builder = script.builder();
    assert_eq!(builder.mode(), Mode::Frozen);
    assert_eq!(builder.status_code(), Some(400));
    assert_eq!(builder.data(), None);
    assert_eq!(
        builder.errors(),
        &[json!("property 'colour' does not exist or is not writable")]
    );
}

#[test]
fn test_header_operation() {
    let script = Script::from_yaml(
        r#"
input: { id: 1 }
set:
  - property: header
    value: 299 Mostly Fine
"#,
    )
    .unwrap();

    let response = script.render();
    assert_eq!(response.status_line(), "HTTP/1.1 299 Mostly Fine");
}

#[test]
fn test_server_error_without_input() {
    let script = Script::from_yaml("code: 500\n").unwrap();
    let response = script.render();

    assert_eq!(response.status_line(), "HTTP/1.1 500 Internal Server Error");
    let body: Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "statusCode": 500,
            "message": "Internal Server Error",
            "errors": []
        })
    );
}

#[test]
fn test_invalid_yaml() {
    assert!(Script::from_yaml("set: 5").is_err());
}

#[test]
fn test_load_missing_file() {
    let err = Script::load(std::path::Path::new("/nonexistent/response.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read response script"));
}
