//! HTML escaping for rendered output.
//!
//! Every piece of author-controlled text and every attribute value emitted
//! by the renderer passes through [`html_escape`]. There is no unescaped
//! output path.

/// HTML-escape a string for safe output.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_first() {
        // Replacing '&' first means the entities themselves are not re-escaped.
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escapes_quotes_for_attribute_positions() {
        assert_eq!(html_escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(html_escape("it's"), "it&#x27;s");
    }

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(html_escape("hello world"), "hello world");
        assert_eq!(html_escape(""), "");
    }
}
