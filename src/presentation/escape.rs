//! Markup escaping for estimator-supplied text.

/// Replaces `& < > " '` with their HTML entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        let escaped = escape_html(r#"<b>"x"</b>"#);
        assert_eq!(escaped, "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn test_escape_all_five() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn test_escape_plain_text_untouched() {
        assert_eq!(escape_html("Add another word"), "Add another word");
        assert_eq!(escape_html(""), "");
    }
}
