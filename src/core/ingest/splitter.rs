//! Delimited-record splitter
//!
//! Splits one line into fields on commas that are not inside a `"..."` span.
//! Quote characters are kept in the returned fields; the row layouts strip
//! them when reading values. Trailing empty fields are preserved.
//!
//! Known limitation: with an odd number of quote characters the last quote
//! opens a span that never closes, so every later comma is treated as data.
//! There is no escaping of quotes inside quoted spans.

/// Field separator used by every file format
pub const SEPARATOR: char = ',';

const QUOTE: char = '"';

/// Splits `line` into fields, ignoring separators inside quoted spans
///
/// # Examples
///
/// ```
/// use clinicflow::core::ingest::splitter::split_fields;
///
/// assert_eq!(split_fields(r#"a,"b,c",d"#), vec!["a", "\"b,c\"", "d"]);
/// assert_eq!(split_fields("a,b,,"), vec!["a", "b", "", ""]);
/// ```
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            QUOTE => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            SEPARATOR if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Removes every quote character and surrounding whitespace from a raw field
pub fn clean_field(raw: &str) -> String {
    raw.replace(QUOTE, "").trim().to_string()
}
