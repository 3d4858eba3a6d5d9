use serde_json::Value;

use crate::json::error::SetError;

/// What a [`ResponseBuilder`](crate::json::builder::ResponseBuilder) is
/// constructed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Status-only construction; the integer becomes the status code.
    Code(i64),
    /// A payload destined for `data` or `errors`, depending on the code.
    Payload(Value),
    Empty,
}

impl Input {
    /// Decides the variant from a loosely typed value.
    ///
    /// Integers become [`Input::Code`], non-empty arrays and objects become
    /// [`Input::Payload`], everything else is [`Input::Empty`].
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonresponse::json::input::Input;
    /// # use serde_json::json;
    /// assert_eq!(Input::from_value(Some(json!(304))), Input::Code(304));
    /// assert_eq!(Input::from_value(Some(json!([]))), Input::Empty);
    /// assert_eq!(Input::from_value(None), Input::Empty);
    /// ```
    pub fn from_value(value: Option<Value>) -> Self {
        match value {
            Some(Value::Number(n)) if n.is_i64() => {
                n.as_i64().map(Input::Code).unwrap_or(Input::Empty)
            }
            Some(v) if entry_count(&v) > 0 => Input::Payload(v),
            _ => Input::Empty,
        }
    }

    /// The payload, if this input carries a non-empty structured one.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Input::Payload(v) if entry_count(v) > 0 => Some(v),
            _ => None,
        }
    }
}

/// The five writable fields, each with the value type it accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    StatusCode(i64),
    Message(String),
    /// Must be an array or object.
    Data(Value),
    /// Must be an array; committed as the full error list. Objects are
    /// refused because the list is ordered and rendered as a JSON array.
    Errors(Value),
    /// A status line of the form `"<code> <reason phrase>"`.
    Header(String),
}

impl Property {
    pub fn name(&self) -> &'static str {
        match self {
            Property::StatusCode(_) => "statusCode",
            Property::Message(_) => "message",
            Property::Data(_) => "data",
            Property::Errors(_) => "errors",
            Property::Header(_) => "header",
        }
    }

    /// Converts a `(name, value)` pair from untyped input into a property.
    ///
    /// Fails with [`SetError::UnknownProperty`] for names other than
    /// `statusCode`, `message`, `data`, `errors` and `header`, and with
    /// [`SetError::TypeMismatch`] when the value cannot be the property's
    /// type. `data` and `errors` are passed through
    /// unchecked; their shape is validated when they are written.
    pub fn from_raw(name: &str, value: Value) -> Result<Self, SetError> {
        match name {
            "statusCode" => match value.as_i64() {
                Some(code) => Ok(Property::StatusCode(code)),
                None => Err(mismatch("statusCode", "integer", &value)),
            },
            "message" => match value {
                Value::String(s) => Ok(Property::Message(s)),
                other => Err(mismatch("message", "string", &other)),
            },
            "data" => Ok(Property::Data(value)),
            "errors" => Ok(Property::Errors(value)),
            "header" => match value {
                Value::String(s) => Ok(Property::Header(s)),
                other => Err(mismatch("header", "string", &other)),
            },
            other => Err(SetError::UnknownProperty(other.to_string())),
        }
    }
}

fn mismatch(property: &'static str, expected: &'static str, value: &Value) -> SetError {
    SetError::TypeMismatch {
        property,
        expected,
        given: type_name(value),
    }
}

/// Name of a value's JSON type as it appears in diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "double",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Number of entries in an array or object; zero for every other value.
pub fn entry_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}
