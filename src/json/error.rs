use thiserror::Error;

/// Why a write to a [`ResponseBuilder`](crate::json::builder::ResponseBuilder)
/// was rejected.
///
/// By the time one of these is returned the builder has already recorded the
/// outcome in its own state; the value only tells the caller what happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// An earlier write latched the builder; nothing is accepted any more.
    #[error("response is frozen by an earlier input error")]
    Frozen,

    /// The response was already rendered.
    #[error("response has already been rendered")]
    Rendered,

    #[error("property '{0}' does not exist or is not writable")]
    UnknownProperty(String),

    #[error("{expected} expected for property '{property}', {given} given")]
    TypeMismatch {
        property: &'static str,
        expected: &'static str,
        given: &'static str,
    },

    /// `data` and `errors` would both be populated.
    #[error("sending {property} when {existing} already exists is contradictory")]
    Contradiction {
        property: &'static str,
        existing: &'static str,
    },

    #[error("status code {0} not supported")]
    UnsupportedStatus(i64),

    #[error("status line '{0}' is not recognized")]
    InvalidHeader(String),

    /// Too short to be a status line; ignored without touching state.
    #[error("status line '{0}' is too short")]
    HeaderTooShort(String),
}

impl SetError {
    /// True when the rejection latched the builder into its frozen state.
    pub fn is_latching(&self) -> bool {
        !matches!(
            self,
            SetError::Frozen | SetError::Rendered | SetError::HeaderTooShort(_)
        )
    }
}
