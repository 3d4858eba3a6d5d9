use serde_json::Value;
use tracing::{debug, error, warn};

use crate::http::response::{Response, Status};
use crate::json::envelope::Envelope;
use crate::json::error::SetError;
use crate::json::input::{Input, Property, entry_count, type_name};
use crate::json::status::{ResponseKind, StatusTable};

const NO_PROPERTIES: &str = "No properties set.";
const NO_STATUS: &str = "We could not determine a status code.";
const BAD_HEADER: &str = "The format for header is not recognized.";
const BAD_HEADER_MESSAGE: &str = "Invalid header";
const AMBIGUOUS_INPUT: &str = "ResponseBuilder::new could not determine what to do with its input.";

/// Whether the builder still accepts writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Open,
    /// An input error was recorded; the builder is now an error report and
    /// every write is rejected.
    Frozen,
}

/// Which side of the `data`/`errors` pair a write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Payload {
    Data,
    Errors,
}

impl Payload {
    fn name(self) -> &'static str {
        match self {
            Payload::Data => "data",
            Payload::Errors => "errors",
        }
    }

    fn opposing(self) -> Self {
        match self {
            Payload::Data => Payload::Errors,
            Payload::Errors => Payload::Data,
        }
    }

    /// Status applied when a write to this side is accepted.
    fn implied_code(self) -> i64 {
        match self {
            Payload::Data => 200,
            Payload::Errors => 400,
        }
    }
}

/// Builds one JSON API response.
///
/// Input is interpreted at construction, adjusted with [`set`](Self::set),
/// and turned into an HTTP response by [`render`](Self::render). Nothing in
/// here fails loudly: bad input is recorded as an error response, the builder
/// freezes, and the client receives that report when the response is
/// rendered.
///
/// # Example
///
/// ```
/// use jsonresponse::json::builder::ResponseBuilder;
/// use jsonresponse::json::input::{Input, Property};
/// use serde_json::json;
///
/// let mut builder = ResponseBuilder::new(Input::Payload(json!({"id": 7})), 201);
/// builder.set(Property::Message("Created it".into())).unwrap();
///
/// let response = builder.render();
/// assert_eq!(response.status_line(), "HTTP/1.1 201 Created");
/// assert_eq!(response.header("Content-Type"), Some("application/json"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBuilder {
    table: StatusTable,
    status_code: Option<u16>,
    status_message: Option<String>,
    message: Option<String>,
    data: Option<Value>,
    errors: Vec<Value>,
    mode: Mode,
    rendered: bool,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::empty()
    }
}

impl ResponseBuilder {
    /// A builder with nothing set. Rendering it yields a 400 report.
    pub fn empty() -> Self {
        Self {
            table: StatusTable::new(),
            status_code: None,
            status_message: None,
            message: None,
            data: None,
            errors: Vec::new(),
            mode: Mode::Open,
            rendered: false,
        }
    }

    /// Interprets `input` against `code`.
    ///
    /// - `Input::Code(c)` ignores `code` and constructs a status-only response.
    /// - An empty input with `code == 200`, or any `code` outside
    ///   `[100, 600)`, constructs nothing; the decision is left to `render`.
    /// - 2xx puts the payload in `data`; 4xx and 5xx put it in `errors`, or
    ///   leave the list empty when the input is empty. 3xx must come without
    ///   a payload and 5xx cannot be status-only.
    ///
    /// Anything else becomes a frozen 405 report.
    pub fn new(input: Input, code: i64) -> Self {
        let mut builder = Self::empty();

        let status_only = matches!(input, Input::Code(_));
        let code = match input {
            Input::Code(c) => c,
            _ => code,
        };
        let payload = input.payload().cloned();

        if payload.is_none() && !status_only && code == 200 {
            return builder;
        }

        let Some(kind) = ResponseKind::of(code) else {
            debug!(code, "constructor code out of range, nothing constructed");
            return builder;
        };

        let code = match (kind, payload) {
            (ResponseKind::Success, payload) => {
                builder.data = payload;
                code
            }
            (ResponseKind::Redirect, None) => code,
            (ResponseKind::Fail, payload) => {
                builder.errors.extend(payload);
                code
            }
            (ResponseKind::Error, payload) if !status_only => {
                builder.errors.extend(payload);
                code
            }
            _ => {
                builder.errors.push(Value::from(AMBIGUOUS_INPUT));
                builder.freeze(code);
                405
            }
        };

        builder.apply_code(code);
        builder
    }

    /// Resolves `code` through the status table.
    ///
    /// A known code sets the status and its reason phrase, and becomes the
    /// message only when no message is set. An unknown code forces 405,
    /// appends a diagnostic and freezes the builder. Returns whether the code
    /// was known.
    pub fn apply_code(&mut self, code: i64) -> bool {
        match self.table.reason(code).map(str::to_string) {
            Some(reason) => {
                // table keys are u16
                self.status_code = Some(code as u16);
                if self.message.as_deref().is_none_or(str::is_empty) {
                    self.message = Some(reason.clone());
                }
                self.status_message = Some(reason);
                debug!(code, "status applied");
                true
            }
            None => {
                self.force_method_not_allowed();
                self.errors
                    .push(Value::from(SetError::UnsupportedStatus(code).to_string()));
                self.freeze(code);
                false
            }
        }
    }

    /// Registers a custom status line `"<code> <reason phrase>"` and applies it.
    ///
    /// Lines shorter than five characters are ignored. A line that does not
    /// parse, or whose code lies outside `[100, 600)`, replaces the response
    /// with a frozen 405 report.
    pub fn set_header(&mut self, line: &str) -> Result<(), SetError> {
        if self.rendered {
            return Err(SetError::Rendered);
        }
        if self.mode == Mode::Frozen {
            return Err(SetError::Frozen);
        }
        if line.len() < 5 {
            return Err(SetError::HeaderTooShort(line.to_string()));
        }

        if let Some((code, reason)) = parse_status_line(line) {
            if self.table.register(code, reason) {
                self.apply_code(code);
                return Ok(());
            }
        }

        self.force_method_not_allowed();
        self.message = Some(BAD_HEADER_MESSAGE.to_string());
        self.errors = vec![Value::from(BAD_HEADER)];
        self.freeze(405);
        Err(SetError::InvalidHeader(line.to_string()))
    }

    /// Writes `data` or `errors`, keeping the two mutually exclusive.
    ///
    /// Writing one side while the other holds entries is a contradiction: the
    /// response becomes a frozen 409 report. An accepted write also applies
    /// 200 for `data` or 400 for `errors`; a later status write may change it.
    fn set_data_or_errors(&mut self, side: Payload, value: Value) -> Result<(), SetError> {
        let shape_ok = match side {
            Payload::Data => matches!(value, Value::Array(_) | Value::Object(_)),
            Payload::Errors => value.is_array(),
        };
        if !shape_ok {
            return Err(SetError::TypeMismatch {
                property: side.name(),
                expected: match side {
                    Payload::Data => "array or object",
                    Payload::Errors => "array",
                },
                given: type_name(&value),
            });
        }

        let opposing = side.opposing();
        let held = match opposing {
            Payload::Data => self.data.as_ref().map_or(0, entry_count),
            Payload::Errors => self.errors.len(),
        };
        if held > 0 {
            let err = SetError::Contradiction {
                property: side.name(),
                existing: opposing.name(),
            };
            self.apply_code(409);
            self.message = self.status_message.clone();
            self.errors = vec![Value::from(capitalize(&err.to_string()))];
            self.freeze(409);
            return Err(err);
        }

        self.apply_code(side.implied_code());
        match (side, value) {
            (Payload::Data, value) => self.data = Some(value),
            (Payload::Errors, Value::Array(items)) => self.errors = items,
            // shape checked above
            (Payload::Errors, _) => {}
        }
        Ok(())
    }

    /// Writes one property.
    ///
    /// Rejected outright, with no state change, once the builder is frozen or
    /// rendered. A value of the wrong shape freezes the builder into a 400
    /// report.
    pub fn set(&mut self, property: Property) -> Result<(), SetError> {
        if self.rendered {
            return Err(SetError::Rendered);
        }
        if self.mode == Mode::Frozen {
            return Err(SetError::Frozen);
        }

        let property_name = property.name();
        let outcome = match property {
            Property::StatusCode(code) => {
                if self.apply_code(code) {
                    Ok(())
                } else {
                    Err(SetError::UnsupportedStatus(code))
                }
            }
            Property::Message(message) => {
                self.message = Some(message);
                Ok(())
            }
            Property::Data(value) => self.set_data_or_errors(Payload::Data, value),
            Property::Errors(value) => self.set_data_or_errors(Payload::Errors, value),
            Property::Header(line) => return self.set_header(&line),
        };

        if let Err(err) = &outcome {
            if self.mode == Mode::Open {
                self.reject(err);
            }
        } else {
            debug!(property = property_name, "property set");
        }
        outcome
    }

    /// Writes one property given by name with an untyped value.
    ///
    /// Unknown names and values that cannot be the property's type freeze the
    /// builder into a 400 report.
    pub fn set_raw(&mut self, name: &str, value: Value) -> Result<(), SetError> {
        if self.rendered {
            return Err(SetError::Rendered);
        }
        if self.mode == Mode::Frozen {
            return Err(SetError::Frozen);
        }

        match Property::from_raw(name, value) {
            Ok(property) => self.set(property),
            Err(err) => {
                self.reject(&err);
                Err(err)
            }
        }
    }

    /// Finalizes the response and produces its HTTP form.
    ///
    /// An untouched builder becomes a 400 report and one that never resolved
    /// a status becomes a 409 report. The body is the pretty-printed envelope
    /// and the response carries `Content-Type: application/json`.
    ///
    /// The builder accepts no writes afterwards. Rendering again yields the
    /// same bytes.
    pub fn render(&mut self) -> Response {
        if self.status_code.is_none() && self.errors.is_empty() && self.data.is_none() {
            self.report(400, NO_PROPERTIES);
        }

        // Every public write resolves a status, so this only guards state
        // that reached here without one.
        if self.status_code.is_none() {
            self.report(409, NO_STATUS);
        }

        self.rendered = true;

        let (Some(code), Some(reason)) = (self.status_code, self.status_message.as_deref()) else {
            error!("response rendered without a resolvable status");
            return Response::internal_error();
        };
        let message = self.message.as_deref().unwrap_or(reason);

        let envelope = Envelope::new(code, message, self.data.as_ref(), &self.errors);
        match envelope.to_pretty_json() {
            Ok(body) => Response::builder(Status::new(code, reason))
                .header("Content-Type", "application/json")
                .body(body)
                .build(),
            Err(e) => {
                error!(code, error = %e, "failed to serialize response envelope");
                Response::internal_error()
            }
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The message, falling back to the status message when none is set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().or(self.status_message.as_deref())
    }

    /// True iff the status code is 2xx.
    pub fn success(&self) -> bool {
        self.status_code.is_some_and(|c| (200..300).contains(&c))
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> &[Value] {
        &self.errors
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True once an input error latched the builder.
    pub fn input_error(&self) -> bool {
        self.mode == Mode::Frozen
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// This response's status table, including registered status lines.
    pub fn table(&self) -> &StatusTable {
        &self.table
    }

    /// Records a rejected write: diagnostic, 400, frozen.
    fn reject(&mut self, err: &SetError) {
        self.errors.push(Value::from(err.to_string()));
        self.apply_code(400);
        self.freeze(400);
    }

    /// Replaces the response with a one-line report under `code`.
    fn report(&mut self, code: i64, error: &str) {
        self.apply_code(code);
        self.message = self.status_message.clone();
        self.errors = vec![Value::from(error)];
        self.data = None;
    }

    fn force_method_not_allowed(&mut self) {
        self.status_code = Some(405);
        self.status_message = Some(
            self.table
                .reason(405)
                .unwrap_or("Method Not Allowed")
                .to_string(),
        );
    }

    /// Latches the builder. `data` is dropped so it never coexists with the
    /// error report.
    fn freeze(&mut self, code: i64) {
        if self.mode == Mode::Frozen {
            return;
        }
        self.mode = Mode::Frozen;
        self.data = None;
        warn!(
            code,
            errors = self.errors.len(),
            "response input rejected, builder frozen"
        );
    }
}

/// Splits `"<digits> <reason>"` into its code and reason phrase.
fn parse_status_line(line: &str) -> Option<(i64, &str)> {
    let (digits, reason) = line.split_once(' ')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if reason.is_empty() || reason.contains(['\r', '\n']) {
        return None;
    }
    let code = digits.parse().ok()?;
    Some((code, reason))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>() + ".",
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_lines() {
        assert_eq!(parse_status_line("404 Gone"), Some((404, "Gone")));
        assert_eq!(parse_status_line("299 Mostly  Fine"), Some((299, "Mostly  Fine")));
        assert_eq!(parse_status_line("4o4 Gone"), None);
        assert_eq!(parse_status_line("404Gone"), None);
        assert_eq!(parse_status_line("404 "), None);
        assert_eq!(parse_status_line("99999999999999999999 Big"), None);
    }

    #[test]
    fn render_reports_missing_status() {
        let mut builder = ResponseBuilder::empty();
        builder.data = Some(serde_json::json!({"id": 1}));

        let response = builder.render();
        assert_eq!(response.status_line(), "HTTP/1.1 409 Conflict");
        assert_eq!(builder.message(), Some("Conflict"));
        assert_eq!(builder.errors(), &[Value::from(NO_STATUS)]);
        assert_eq!(builder.data(), None);
        assert!(builder.is_rendered());
    }

    #[test]
    fn capitalizes_contradiction() {
        assert_eq!(
            capitalize("sending data when errors already exists is contradictory"),
            "Sending data when errors already exists is contradictory."
        );
    }
}
