//! Quote-aware line splitter for data rows.
//!
//! This is deliberately **not** an RFC 4180 parser. The rules are:
//!
//! - The line is scanned character by character with a single "inside quotes" toggle.
//! - Both `"` and `'` flip the toggle. The two styles are not distinguished, so `"abc'` opens
//!   and closes a quoted run.
//! - A comma separates fields only while the toggle is off.
//! - Quote characters are consumed and never appear in a field value.
//! - At end of line the buffer is emitted as the last field whatever the toggle state, so an
//!   unterminated quote swallows the rest of the line (embedded commas included) without error.
//! - Escaped quotes (`""`) are not supported; each `"` is just another toggle.
//! - Every field is trimmed, then one leading and one trailing quote character are stripped if
//!   still present.
//!
//! A consequence worth knowing: an apostrophe in unquoted data (`Joe's Plumbing`) opens a quoted
//! run, and following commas on that line stop splitting.

/// Characters that flip the "inside quotes" toggle.
fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Split a single data line into raw field values.
///
/// Never fails; malformed quoting degrades into fewer, longer fields.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if is_quote(c) {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            fields.push(finish_field(&current));
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(finish_field(&current));

    fields
}

fn finish_field(raw: &str) -> String {
    strip_outer_quotes(raw.trim()).to_string()
}

/// Strip one leading and one trailing quote character, if present.
fn strip_outer_quotes(s: &str) -> &str {
    let s = s.strip_prefix(is_quote).unwrap_or(s);
    s.strip_suffix(is_quote).unwrap_or(s)
}
