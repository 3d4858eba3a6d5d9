use jsonresponse::http::response::{Builder, Response, Status};

#[test]
fn test_status_accessors() {
    let status = Status::new(201, "Created");
    assert_eq!(status.as_u16(), 201);
    assert_eq!(status.reason_phrase(), "Created");
}

#[test]
fn test_response_builder_basic() {
    let response = Builder::new(Status::new(200, "OK"))
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, Status::new(200, "OK"));
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = Response::builder(Status::new(200, "OK"))
        .body(body.clone())
        .build();

    assert_eq!(
        response.header("Content-Length"),
        Some(body.len().to_string().as_str())
    );
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = Response::builder(Status::new(200, "OK"))
        .header("content-length", "999")
        .body(b"test".to_vec())
        .build();

    // Should keep the custom value
    assert_eq!(response.header("Content-Length"), Some("999"));
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_response_builder_replaces_header() {
    let response = Response::builder(Status::new(200, "OK"))
        .header("Content-Type", "text/plain")
        .header("CONTENT-TYPE", "application/json")
        .build();

    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(response.headers.len(), 2); // 1 custom + 1 auto
}

#[test]
fn test_response_builder_keeps_header_order() {
    let response = Response::builder(Status::new(200, "OK"))
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-cache")
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["Content-Type", "Cache-Control", "Content-Length"]);
}

#[test]
fn test_response_builder_empty_body() {
    let response = Response::builder(Status::new(204, "No Content")).build();

    assert_eq!(response.body.len(), 0);
    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_status_line() {
    let response = Response::builder(Status::new(404, "Gone")).build();
    assert_eq!(response.status_line(), "HTTP/1.1 404 Gone");
}

#[test]
fn test_body_text() {
    let response = Response::builder(Status::new(200, "OK"))
        .body(vec![0xff, 0xfe])
        .build();
    assert_eq!(response.body_text(), None);
}

#[test]
fn test_response_internal_error_helper() {
    let response = Response::internal_error();

    assert_eq!(response.status.as_u16(), 500);
    assert_eq!(response.header("Content-Type"), Some("application/json"));

    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body["success"], serde_json::json!(false));
    assert_eq!(body["statusCode"], serde_json::json!(500));
}
