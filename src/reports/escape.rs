//! Escaping utilities for Markdown report generation.
//!
//! Subjects, insights, comments and findings come straight from the analysis
//! service and may contain Markdown syntax that would break table layout or
//! inject links. Everything service-provided goes through these helpers.

/// Escape a string for safe inclusion in a Markdown table cell.
///
/// # Examples
///
/// ```
/// use ai_visibility::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a|b"), "a\\|b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
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

/// Escape a string for safe inclusion in Markdown inline content.
///
/// # Examples
///
/// ```
/// use ai_visibility::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// assert_eq!(escape_markdown_inline("[link](url)"), "\\[link\\](url)");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' | '_' | '`' | '[' | ']' | '#' | '!' | '~' | '|' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use in a Markdown list item.
///
/// Newlines become `; ` so a multi-line finding stays one item.
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' | '`' | '[' | ']' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown_table() {
        assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
        assert_eq!(escape_markdown_table("a\r\nb"), "a b");
    }

    #[test]
    fn test_escape_markdown_inline() {
        assert_eq!(escape_markdown_inline("<b>#1</b>"), "\\<b\\>\\#1\\</b\\>");
        assert_eq!(escape_markdown_inline("plain text"), "plain text");
    }

    #[test]
    fn test_escape_markdown_list() {
        assert_eq!(escape_markdown_list("one\ntwo"), "one; two");
        assert_eq!(escape_markdown_list("*x*"), "\\*x\\*");
    }
}
