//! Escaping utilities for safe report generation.
//!
//! Scheme, service and operation names come straight from the input files
//! and may contain characters that break CSV quoting, Markdown tables or a
//! fixed-width terminal layout.

/// Escape a string for CSV embedding: double-quote escaping per RFC 4180,
/// plus newline flattening since fields are already wrapped in double quotes.
///
/// # Examples
///
/// ```
/// use msmetrics::reports::escape::escape_csv;
///
/// assert_eq!(escape_csv(r#"say "hi""#), r#"say ""hi"""#);
/// assert_eq!(escape_csv("a\nb"), "a b");
/// ```
#[must_use]
pub fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace(['\r', '\n'], " ")
}

/// Escape a string for safe inclusion in Markdown table cells.
///
/// Markdown tables use `|` as column separators and can be broken
/// by unescaped pipe characters. This function also handles newlines
/// and backticks that could break formatting.
///
/// # Examples
///
/// ```
/// use msmetrics::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Replace control characters so a value stays on one terminal line.
#[must_use]
pub fn sanitize_terminal(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Truncate to at most `max` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max == 0 {
        String::new()
    } else {
        let kept: String = s.chars().take(max - 1).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_quotes_and_newlines() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,\"b\""), "a,\"\"b\"\"");
        assert_eq!(escape_csv("x\r\ny"), "x  y");
    }

    #[test]
    fn test_escape_markdown_table_brackets() {
        assert_eq!(escape_markdown_table("[link]"), "\\[link\\]");
        assert_eq!(escape_markdown_table("a\r\nb"), "a b");
    }

    #[test]
    fn test_sanitize_terminal() {
        assert_eq!(sanitize_terminal("a\tb\x1b[31m"), "a b [31m");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("OrderManagementService", 8), "OrderMa…");
        assert_eq!(truncate("abc", 0), "");
    }
}
