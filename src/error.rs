use thiserror::Error;

/// The reason a single token could not be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenErrorKind {
    #[error("expected an integer value")]
    MalformedValue,
    #[error("expected an integer on both sides of `-`")]
    MalformedRange,
    #[error("expected an integer step after `/`")]
    MalformedStep,
    #[error("{value} is outside {min}..={max}")]
    OutOfBounds { value: u32, min: u32, max: u32 },
    #[error("step must be positive, got {step}")]
    InvalidStep { step: i64 },
}

/// A token that failed to expand, carrying the offending text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid token `{token}`: {kind}")]
pub struct TokenError {
    pub token: String,
    pub kind: TokenErrorKind,
}

impl TokenError {
    pub(crate) fn new(token: &str, kind: TokenErrorKind) -> Self {
        TokenError {
            token: token.to_string(),
            kind,
        }
    }
}

/// A field whose raw text failed to parse, carrying the field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} field: {source}")]
pub struct FieldError {
    pub field: &'static str,
    #[source]
    pub source: TokenError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error("empty expression, expected cron fields followed by a command")]
    Empty,
}
