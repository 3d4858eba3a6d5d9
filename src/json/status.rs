use std::collections::BTreeMap;

/// Reason phrases every table starts with.
///
/// Codes outside this list are rejected until a custom status line registers
/// them with [`StatusTable::register`].
pub const SEED: &[(u16, &str)] = &[
    // 2xx Success
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (204, "No Content"),
    // 3xx Redirection
    (304, "Not Modified"),
    // 4xx Client Error
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (409, "Conflict"),
    // 5xx Server Error
    (500, "Internal Server Error"),
];

/// Lowest code a status line may carry.
pub const MIN_CODE: i64 = 100;
/// One past the highest code a status line may carry.
pub const MAX_CODE: i64 = 600;

/// The four response kinds an envelope can take, keyed by status range.
///
/// - `Success` (2xx): request went well, `data` is returned
/// - `Redirect` (3xx): headers only, no body payload
/// - `Fail` (4xx): problem with the submitted data, `errors` is returned
/// - `Error` (5xx): failure while processing, `errors` is returned
///
/// 1xx codes can only be reached through a registered status line and render
/// like `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Informational,
    Success,
    Redirect,
    Fail,
    Error,
}

impl ResponseKind {
    /// Classifies a code. Returns `None` outside `[100, 600)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonresponse::json::status::ResponseKind;
    /// assert_eq!(ResponseKind::of(201), Some(ResponseKind::Success));
    /// assert_eq!(ResponseKind::of(409), Some(ResponseKind::Fail));
    /// assert_eq!(ResponseKind::of(600), None);
    /// ```
    pub fn of(code: i64) -> Option<Self> {
        match code {
            100..=199 => Some(ResponseKind::Informational),
            200..=299 => Some(ResponseKind::Success),
            300..=399 => Some(ResponseKind::Redirect),
            400..=499 => Some(ResponseKind::Fail),
            500..=599 => Some(ResponseKind::Error),
            _ => None,
        }
    }

    /// True for the kinds whose envelope carries `errors`.
    pub fn carries_errors(&self) -> bool {
        matches!(self, ResponseKind::Fail | ResponseKind::Error)
    }
}

/// Mapping from status code to reason phrase.
///
/// Each [`ResponseBuilder`](crate::json::builder::ResponseBuilder) owns its
/// own table, so a status line registered for one response never leaks into
/// another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTable {
    reasons: BTreeMap<u16, String>,
}

impl Default for StatusTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTable {
    /// Creates a table holding the [`SEED`] entries.
    pub fn new() -> Self {
        let reasons = SEED
            .iter()
            .map(|(code, reason)| (*code, (*reason).to_string()))
            .collect();
        Self { reasons }
    }

    /// Returns the reason phrase for `code`, if the table knows it.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonresponse::json::status::StatusTable;
    /// let table = StatusTable::new();
    /// assert_eq!(table.reason(404), Some("Not Found"));
    /// assert_eq!(table.reason(418), None);
    /// ```
    pub fn reason(&self, code: i64) -> Option<&str> {
        let code = u16::try_from(code).ok()?;
        self.reasons.get(&code).map(String::as_str)
    }

    pub fn contains(&self, code: i64) -> bool {
        self.reason(code).is_some()
    }

    /// Inserts or overrides the reason phrase for `code`.
    ///
    /// Returns `false` and leaves the table untouched when `code` lies
    /// outside `[100, 600)`.
    pub fn register(&mut self, code: i64, reason: impl Into<String>) -> bool {
        if !(MIN_CODE..MAX_CODE).contains(&code) {
            return false;
        }
        // in range, so the cast is lossless
        self.reasons.insert(code as u16, reason.into());
        true
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}
