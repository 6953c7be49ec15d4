//! Token expansion.
//!
//! A token is one comma-free syntactic unit of a cron field, such as `*`,
//! `7`, `1-5` or `*/15`. Expansion turns it into the concrete values it
//! denotes within the field's bounds.

use crate::error::{TokenError, TokenErrorKind};

const WILDCARD: &str = "*";
const STEP: char = '/';
const RANGE: char = '-';

/// The base part of a token, before any `/step` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Base {
    Wildcard,
    Value(u32),
    Range { begin: u32, end: u32 },
}

/// A lexically classified token: a base shape plus its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    base: Base,
    step: u32,
}

impl Token {
    /// Classifies raw token text into one of the grammar's shapes without
    /// consulting field bounds.
    ///
    /// The step is parsed as `i64` so that `/0` and `/-2` reach the explicit
    /// positivity guard instead of failing as unparseable integers.
    fn classify(text: &str) -> Result<Token, TokenError> {
        let err = |kind| TokenError::new(text, kind);

        let (base, step) = match text.split_once(STEP) {
            Some((base, step_text)) => {
                let step: i64 = step_text
                    .parse()
                    .map_err(|_| err(TokenErrorKind::MalformedStep))?;
                if step <= 0 {
                    return Err(err(TokenErrorKind::InvalidStep { step }));
                }
                // Steps wider than the domain keep only `begin`; saturate so
                // an over-u32 step cannot truncate to 0 or wrap.
                (base, u32::try_from(step).unwrap_or(u32::MAX))
            }
            None => (text, 1),
        };

        let base = if base == WILDCARD {
            Base::Wildcard
        } else if let Some((begin, end)) = base.split_once(RANGE) {
            let begin = begin
                .parse()
                .map_err(|_| err(TokenErrorKind::MalformedRange))?;
            let end = end
                .parse()
                .map_err(|_| err(TokenErrorKind::MalformedRange))?;
            Base::Range { begin, end }
        } else {
            let value = base
                .parse()
                .map_err(|_| err(TokenErrorKind::MalformedValue))?;
            Base::Value(value)
        };

        Ok(Token { base, step })
    }
}

/// Expands a single token into every value it denotes within `[min, max]`.
///
/// A wildcard covers the full `[min, max]` domain, a single value covers
/// itself and a range covers both endpoints inclusively; a `/step` suffix
/// keeps every `step`-th value counted from the beginning. An inverted range
/// (`5-3`) expands to nothing rather than failing.
///
/// # Errors
///
/// Returns a [`TokenError`] when a segment that should be an integer is not
/// ([`MalformedValue`](TokenErrorKind::MalformedValue),
/// [`MalformedRange`](TokenErrorKind::MalformedRange),
/// [`MalformedStep`](TokenErrorKind::MalformedStep)), when an endpoint falls
/// outside `[min, max]` ([`OutOfBounds`](TokenErrorKind::OutOfBounds)), or
/// when the step is zero or negative
/// ([`InvalidStep`](TokenErrorKind::InvalidStep)).
///
/// # Examples
///
/// ```rust
/// use cron_expand::expand_token;
///
/// assert_eq!(expand_token("*/15", 0, 59).unwrap(), vec![0, 15, 30, 45]);
/// assert_eq!(expand_token("5-8", 0, 59).unwrap(), vec![5, 6, 7, 8]);
/// assert_eq!(expand_token("7", 1, 7).unwrap(), vec![7]);
/// ```
pub fn expand_token(token: &str, min: u32, max: u32) -> Result<Vec<u32>, TokenError> {
    let parsed = Token::classify(token)?;

    let (begin, end) = match parsed.base {
        Base::Wildcard => (min, max),
        Base::Value(value) => (value, value),
        Base::Range { begin, end } => (begin, end),
    };

    if begin < min {
        return Err(TokenError::new(
            token,
            TokenErrorKind::OutOfBounds {
                value: begin,
                min,
                max,
            },
        ));
    }
    if end > max {
        return Err(TokenError::new(
            token,
            TokenErrorKind::OutOfBounds {
                value: end,
                min,
                max,
            },
        ));
    }

    Ok((begin..=end).step_by(parsed.step as usize).collect())
}
