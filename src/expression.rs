//! Full cron expression parsing and the end-to-end pipeline.

use crate::error::{CronError, FieldError};
use crate::field::{parse_field, FIELDS};
use crate::render::{join_values, render};
use crate::Result;

/// Label of the trailing command row in the rendered table.
pub const COMMAND_LABEL: &str = "command";

/// Parses already-split cron fields into `(field name, sorted values)` pairs.
///
/// Fields are paired positionally against [`FIELDS`]: minute, hour, day of
/// month, month, day of week. The pairing stops at whichever runs out first,
/// so fewer than five raw fields produce fewer pairs and anything past the
/// fifth is ignored.
///
/// # Errors
///
/// Returns a [`FieldError`] naming the field whose first bad token aborted
/// the parse.
pub fn parse_expression(fields: &[&str]) -> Result<Vec<(&'static str, Vec<u32>)>, FieldError> {
    fields
        .iter()
        .zip(FIELDS.iter())
        .map(|(raw, spec)| {
            let values = parse_field(raw, spec.min, spec.max).map_err(|source| FieldError {
                field: spec.name,
                source,
            })?;
            Ok((spec.name, values))
        })
        .collect()
}

/// Expands a full cron expression and renders it as a two-column table.
///
/// The expression is split on whitespace; the last part is the command and
/// everything before it is treated as cron fields. The command is rendered
/// verbatim on its own row.
///
/// # Errors
///
/// Fails on a blank expression or on the first field that does not parse.
/// No partial table is produced.
///
/// # Examples
///
/// ```rust
/// let table = cron_expand::explain("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
/// assert!(table.starts_with("minute        0 15 30 45"));
/// assert!(table.ends_with("command       /usr/bin/find"));
/// ```
pub fn explain(expression: &str) -> Result<String> {
    let mut parts: Vec<&str> = expression.split_whitespace().collect();
    let command = parts.pop().ok_or(CronError::Empty)?;

    let parsed = parse_expression(&parts)?;

    let mut rows: Vec<(&str, String)> = parsed
        .into_iter()
        .map(|(name, values)| (name, join_values(&values)))
        .collect();
    rows.push((COMMAND_LABEL, command.to_string()));

    Ok(render(&rows))
}
