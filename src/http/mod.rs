//! HTTP transport side of a rendered response.
//!
//! - **`response`**: status, ordered headers and body, with a fluent builder
//! - **`writer`**: serializes a response to HTTP/1.1 bytes and writes them out
//!
//! # Example
//!
//! ```
//! use jsonresponse::http::response::{Response, Status};
//! use jsonresponse::http::writer::serialize_response;
//!
//! let response = Response::builder(Status::new(204, "No Content")).build();
//! let wire = serialize_response(&response);
//! assert!(wire.starts_with(b"HTTP/1.1 204 No Content\r\n"));
//! ```

pub mod response;
pub mod writer;

/// Protocol version written on every status line.
pub const HTTP_VERSION: &str = "HTTP/1.1";
