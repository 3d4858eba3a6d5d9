//! YAML response scripts.
//!
//! A script names the constructor input, the status code, and the writes to
//! replay before rendering:
//!
//! ```yaml
//! input: { id: 7 }
//! code: 201
//! set:
//!   - property: message
//!     value: Created it
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::http::response::Response;
use crate::json::builder::ResponseBuilder;
use crate::json::input::Input;

fn default_code() -> i64 {
    200
}

/// One `set` call, with the property named as in the envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operation {
    pub property: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    /// Integer for status-only responses, map or sequence for a payload
    #[serde(default)]
    pub input: Option<Value>,
    #[serde(default = "default_code")]
    pub code: i64,
    #[serde(default)]
    pub set: Vec<Operation>,
}

impl Script {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Invalid response script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read response script {}", path.display()))?;
        Self::from_yaml(&text)
    }

    /// Constructs a builder and replays every operation against it.
    ///
    /// Rejected operations are not errors here; they end up in the rendered
    /// report like any other input error.
    pub fn builder(&self) -> ResponseBuilder {
        let mut builder = ResponseBuilder::new(Input::from_value(self.input.clone()), self.code);

        for (index, op) in self.set.iter().enumerate() {
            if let Err(e) = builder.set_raw(&op.property, op.value.clone()) {
                tracing::debug!(
                    index,
                    property = %op.property,
                    error = %e,
                    "Script operation rejected"
                );
            }
        }

        builder
    }

    pub fn render(&self) -> Response {
        self.builder().render()
    }
}
