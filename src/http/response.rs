/// Status of an outgoing response: the numeric code and its reason phrase.
///
/// The reason phrase is carried as a string because status lines can be
/// registered at runtime with any phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Numeric HTTP status code
    pub code: u16,
    /// Reason phrase sent after the code on the status line
    pub reason: String,
}

impl Status {
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }

    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonresponse::http::response::Status;
    /// assert_eq!(Status::new(404, "Not Found").as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        self.code
    }

    pub fn reason_phrase(&self) -> &str {
        &self.reason
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Contains the status, headers in insertion order, and the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status
    pub status: Status,
    /// HTTP headers as name-value pairs
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use jsonresponse::http::response::{Response, Status};
/// let response = Response::builder(Status::new(200, "OK"))
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// assert_eq!(response.header("content-length"), Some("2"));
/// ```
pub struct Builder {
    status: Status,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Builder {
    /// Creates a new response builder with the specified status.
    pub fn new(status: Status) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header.
    ///
    /// # Arguments
    ///
    /// * `key` - Header name, matched case-insensitively against existing ones
    /// * `value` - Header value
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(existing) => existing.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Automatically adds the Content-Length header based on body size if not already present.
    pub fn build(mut self) -> Response {
        let has_length = self
            .headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case("Content-Length"));
        if !has_length {
            self.headers
                .push(("Content-Length".to_string(), self.body.len().to_string()));
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    pub fn builder(status: Status) -> Builder {
        Builder::new(status)
    }

    /// Retrieves a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// The status line without its trailing CRLF, e.g. `HTTP/1.1 200 OK`.
    pub fn status_line(&self) -> String {
        format!(
            "{} {} {}",
            crate::http::HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase()
        )
    }

    /// The body as text, if it is valid UTF-8.
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// A 500 response with a fixed JSON body, used when an envelope cannot
    /// be serialized.
    pub fn internal_error() -> Self {
        let body = concat!(
            "{\n",
            "    \"success\": false,\n",
            "    \"statusCode\": 500,\n",
            "    \"message\": \"Internal Server Error\",\n",
            "    \"errors\": []\n",
            "}"
        );
        Response::builder(Status::new(500, "Internal Server Error"))
            .header("Content-Type", "application/json")
            .body(body.as_bytes().to_vec())
            .build()
    }
}
