//! Small string helpers shared by the router, the suggestion list and the
//! fragment loader.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::RegexBuilder;

/// Characters left untouched by `encodeURIComponent`.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use in a URL query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

/// Escape the characters that are significant in HTML text and attributes.
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

/// Wrap every case-insensitive occurrence of `query` in `<mark>`.
///
/// The query is matched literally. Text outside and inside the marks is
/// HTML-escaped, so the result is safe to inject.
pub fn highlight_query(text: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return escape_html(text);
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return escape_html(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in pattern.find_iter(text) {
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str("<mark>");
        out.push_str(&escape_html(m.as_str()));
        out.push_str("</mark>");
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Page identifier for a location path: the last segment without `.html`,
/// or `index` for the site root.
pub fn current_page(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or_default();
    let page = segment.strip_suffix(".html").unwrap_or(segment);
    if page.is_empty() {
        "index".to_string()
    } else {
        page.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_matches_browser() {
        assert_eq!(encode_component("new patent filing"), "new%20patent%20filing");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("it's (fine)!"), "it's%20(fine)!");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_highlight_query_case_insensitive() {
        assert_eq!(
            highlight_query("NVDA - NVIDIA Corporation", "nv"),
            "<mark>NV</mark>DA - <mark>NV</mark>IDIA Corporation"
        );
    }

    #[test]
    fn test_highlight_query_treats_query_literally() {
        assert_eq!(highlight_query("a.b axb", "a.b"), "<mark>a.b</mark> axb");
        assert_eq!(highlight_query("price (usd)", "("), "price <mark>(</mark>usd)");
    }

    #[test]
    fn test_highlight_query_escapes_markup() {
        assert_eq!(
            highlight_query("<b>apple</b>", "apple"),
            "&lt;b&gt;<mark>apple</mark>&lt;/b&gt;"
        );
    }

    #[test]
    fn test_highlight_empty_query() {
        assert_eq!(highlight_query("Tesla", "  "), "Tesla");
    }

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/"), "index");
        assert_eq!(current_page(""), "index");
        assert_eq!(current_page("/insider-trading.html"), "insider-trading");
        assert_eq!(current_page("/pages/home/index.html"), "index");
        assert_eq!(current_page("/stocks/nvda"), "nvda");
    }
}
