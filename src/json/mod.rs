//! Normalized JSON API responses.
//!
//! A response is one of four kinds, decided by its status range:
//!
//! | kind     | range | body                                      |
//! |----------|-------|-------------------------------------------|
//! | success  | 2xx   | `success`, `statusCode`, `message`, `data`   |
//! | redirect | 3xx   | `success`, `statusCode`, `message`           |
//! | fail     | 4xx   | `success`, `statusCode`, `message`, `errors` |
//! | error    | 5xx   | `success`, `statusCode`, `message`, `errors` |
//!
//! - **`status`**: per-response status table and range classification
//! - **`input`**: constructor input and the writable properties
//! - **`builder`**: the state machine turning input into a response
//! - **`envelope`**: the JSON body and its serialization
//! - **`error`**: why a write was rejected
//!
//! # Builder state machine
//!
//! ```text
//!        ┌─────────────┐
//!        │    Open     │ ← set() accepted writes
//!        └──┬───────┬──┘
//!   bad input│       │render()
//!            ▼       │
//!        ┌────────┐  │
//!        │ Frozen │  │ ← error report, set() is a no-op
//!        └───┬────┘  │
//!            │render()
//!            ▼       ▼
//!        ┌─────────────┐
//!        │  Rendered   │ ← terminal, set() rejected
//!        └─────────────┘
//! ```
//!
//! `Open` and `Frozen` are the builder's [`Mode`]. Rendering is tracked
//! apart from it, so a rendered error report still answers
//! `input_error()`.

pub mod builder;
pub mod envelope;
pub mod error;
pub mod input;
pub mod status;

pub use builder::{Mode, ResponseBuilder};
pub use error::SetError;
pub use input::{Input, Property};
