//! Two-column rendering of parsed expressions.

/// Spacing between the label column and the value column.
const GUTTER: usize = 2;

/// Joins expanded values with single spaces, preserving their order.
pub fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders `(label, text)` rows as aligned two-column lines.
///
/// Every label is left-justified to the width of the longest label present
/// plus a fixed two-character gutter, so the value column lines up across
/// rows. Lines are joined with `\n` and no trailing newline is appended.
///
/// # Examples
///
/// ```rust
/// use cron_expand::render;
///
/// let rows = [("hour", "0".to_string()), ("command", "/bin/true".to_string())];
/// assert_eq!(render(&rows), "hour     0\ncommand  /bin/true");
/// ```
pub fn render(rows: &[(&str, String)]) -> String {
    let width = rows
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0)
        + GUTTER;

    rows.iter()
        .map(|(label, text)| format!("{label:<width$}{text}"))
        .collect::<Vec<_>>()
        .join("\n")
}
