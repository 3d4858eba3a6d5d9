//! jsonresponse - normalized JSON API responses
//!
//! Builds a JSON response envelope from loosely structured input, validates
//! it, and renders it with its HTTP status line.

pub mod config;
pub mod http;
pub mod json;
pub mod script;
