use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::json::status::ResponseKind;

/// Indentation used for the pretty-printed body.
const INDENT: &[u8] = b"    ";

/// Kind-specific part of an envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body<'a> {
    /// 1xx and 2xx: `data`, serialized as `null` when unset.
    Data(Option<&'a Value>),
    /// 3xx: nothing beyond the common fields.
    Bare,
    /// 4xx and 5xx: the error list.
    Errors(&'a [Value]),
}

/// The JSON object sent to the client.
///
/// Serializes with the keys `success`, `statusCode`, `message` followed by
/// `data` or `errors` depending on the kind, always in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<'a> {
    pub success: bool,
    pub status_code: u16,
    pub message: &'a str,
    pub body: Body<'a>,
}

impl<'a> Envelope<'a> {
    /// Assembles an envelope, picking the body shape from the status range.
    pub fn new(
        status_code: u16,
        message: &'a str,
        data: Option<&'a Value>,
        errors: &'a [Value],
    ) -> Self {
        let kind = ResponseKind::of(i64::from(status_code));
        let body = match kind {
            Some(ResponseKind::Redirect) => Body::Bare,
            Some(k) if k.carries_errors() => Body::Errors(errors),
            _ => Body::Data(data),
        };

        Self {
            success: kind == Some(ResponseKind::Success),
            status_code,
            message,
            body,
        }
    }

    /// Pretty-printed JSON bytes of this envelope.
    pub fn to_pretty_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(128);
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl Serialize for Envelope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("success", &self.success)?;
        map.serialize_entry("statusCode", &self.status_code)?;
        map.serialize_entry("message", self.message)?;
        match self.body {
            Body::Data(data) => map.serialize_entry("data", &data)?,
            Body::Bare => {}
            Body::Errors(errors) => map.serialize_entry("errors", errors)?,
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_keep_their_order() {
        let data = json!({"id": 1});
        let envelope = Envelope::new(200, "OK", Some(&data), &[]);
        let text = String::from_utf8(envelope.to_pretty_json().unwrap()).unwrap();

        let success = text.find("\"success\"").unwrap();
        let code = text.find("\"statusCode\"").unwrap();
        let message = text.find("\"message\"").unwrap();
        let data = text.find("\"data\"").unwrap();
        assert!(success < code && code < message && message < data);
        assert!(text.contains("\n    \"success\": true"));
    }

    #[test]
    fn redirect_has_no_payload() {
        let errors = vec![json!("ignored")];
        let envelope = Envelope::new(304, "Not Modified", None, &errors);
        assert_eq!(envelope.body, Body::Bare);
        assert!(!envelope.success);
    }

    #[test]
    fn informational_renders_like_success() {
        let envelope = Envelope::new(150, "Thinking", None, &[]);
        assert_eq!(envelope.body, Body::Data(None));
        assert!(!envelope.success);
    }
}
