//! # cron_expand
//!
//! A cron expression expander for Rust: parses the five standard cron time
//! fields (minute, hour, day of month, month, day of week) plus a trailing
//! command, expands each field's interval/step/list syntax into the concrete
//! sorted values it covers, and renders the result as an aligned two-column
//! table.
//!
//! ## Usage
//!
//! Add cron_expand to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cron_expand = "0.1"
//! ```
//!
//! Expanding a whole expression:
//!
//! ```rust
//! let table = cron_expand::explain("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//! assert_eq!(
//!     table,
//!     "\
//! minute        0 15 30 45
//! hour          0
//! day of month  1 15
//! month         1 2 3 4 5 6 7 8 9 10 11 12
//! day of week   1 2 3 4 5
//! command       /usr/bin/find"
//! );
//! ```
//!
//! The lower-level pieces are exported too, for callers that already have
//! fields split up or want a single field's values:
//!
//! ```rust
//! use cron_expand::{parse_field, FIELDS};
//!
//! let minute = &FIELDS[0];
//! let values = parse_field("*/20", minute.min, minute.max).unwrap();
//! assert_eq!(values, vec![0, 20, 40]);
//! ```

mod error;
mod expression;
mod field;
mod render;
mod token;

pub use crate::{
    error::{CronError, FieldError, TokenError, TokenErrorKind},
    expression::{explain, parse_expression, COMMAND_LABEL},
    field::{parse_field, FieldSpec, FIELDS},
    render::{join_values, render},
    token::expand_token,
};

pub type Result<T, E = CronError> = std::result::Result<T, E>;
