//! Cron field definitions and per-field parsing.
//!
//! This module holds the fixed table of the five standard cron fields with
//! their value bounds, and the parser that turns one field's raw text into
//! the sorted set of values it covers.

use std::collections::BTreeSet;

use crate::error::TokenError;
use crate::token::expand_token;

const SEPARATOR: char = ',';

/// A named cron field with its inclusive value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
}

/// The five standard cron fields, in expression order.
///
/// Never mutated; every parse reads from this one table.
pub const FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "minute",
        min: 0,
        max: 59,
    },
    FieldSpec {
        name: "hour",
        min: 0,
        max: 23,
    },
    FieldSpec {
        name: "day of month",
        min: 0,
        max: 31,
    },
    FieldSpec {
        name: "month",
        min: 1,
        max: 12,
    },
    FieldSpec {
        name: "day of week",
        min: 1,
        max: 7,
    },
];

/// Parses one raw cron field into the ascending, deduplicated values it
/// covers within `[min, max]`.
///
/// The raw text is split on `,` and every token expanded with
/// [`expand_token`]; the union of the expansions comes back sorted. The
/// first failing token aborts the whole field and its error is returned
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use cron_expand::parse_field;
///
/// assert_eq!(parse_field("1,15", 0, 31).unwrap(), vec![1, 15]);
/// assert_eq!(parse_field("5,4,3", 0, 59).unwrap(), vec![3, 4, 5]);
/// ```
pub fn parse_field(raw: &str, min: u32, max: u32) -> Result<Vec<u32>, TokenError> {
    let mut values = BTreeSet::new();
    for token in raw.split(SEPARATOR) {
        values.extend(expand_token(token, min, max)?);
    }
    Ok(values.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_table_is_in_expression_order() {
        let names: Vec<_> = FIELDS.iter().map(|spec| spec.name).collect();
        assert_eq!(
            names,
            ["minute", "hour", "day of month", "month", "day of week"]
        );
    }

    #[test]
    fn unions_overlapping_tokens() {
        assert_eq!(
            parse_field("1-4,3-6", 0, 59).unwrap(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn first_bad_token_aborts_the_field() {
        let err = parse_field("1,foo,3", 0, 59).unwrap_err();
        assert_eq!(err.token, "foo");
    }
}
