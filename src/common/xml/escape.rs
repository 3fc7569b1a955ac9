use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use std::borrow::Cow;

const SPECIAL: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(SPECIAL).expect("Failed to build XML escaper"));

// LeftmostLongest so "&amp;lt;" decodes to "&lt;" and not "<"
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(ENTITIES)
        .expect("Failed to build XML unescaper")
});

/// Escape the five XML special characters for attribute values and text nodes.
///
/// Every other character, including newlines and non-ASCII text, passes
/// through unchanged.
///
/// # Examples
///
/// ```
/// use pro6_export::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("Größer"), "Größer");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &ENTITIES)
}

/// Reverse [`escape_xml`].
///
/// Unknown or malformed entities are left unchanged.
///
/// ```
/// use pro6_export::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &SPECIAL)
}

/// Whether `c` may appear in an XML 1.0 document.
#[inline]
pub fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => c >= ' ',
    }
}

/// Remove characters XML 1.0 cannot carry.
///
/// Vertical tab and form feed become line breaks; every other forbidden
/// character is dropped. Text that needs no change is borrowed.
///
/// ```
/// use pro6_export::common::xml::sanitize_xml_text;
/// assert_eq!(sanitize_xml_text("a\u{c}b\u{1}c"), "a\nbc");
/// assert!(matches!(sanitize_xml_text("Größer"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn sanitize_xml_text(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        return Cow::Borrowed(s);
    }
    let cleaned = s
        .chars()
        .filter_map(|c| match c {
            '\u{B}' | '\u{C}' => Some('\n'),
            c if is_xml_char(c) => Some(c),
            _ => None,
        })
        .collect();
    Cow::Owned(cleaned)
}

/// Wrap `s` in one or more CDATA sections.
///
/// A literal `]]>` cannot appear inside a section, so it is split between two
/// adjacent sections; a reader concatenates them back to the original text.
///
/// ```
/// use pro6_export::common::xml::cdata;
/// assert_eq!(cdata("a"), "<![CDATA[a]]>");
/// assert_eq!(cdata("x]]>y"), "<![CDATA[x]]]]><![CDATA[>y]]>");
/// ```
pub fn cdata(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 12);
    out.push_str("<![CDATA[");
    out.push_str(&s.replace("]]>", "]]]]><![CDATA[>"));
    out.push_str("]]>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_all_five() {
        assert_eq!(escape_xml(r#"<>&'""#), "&lt;&gt;&amp;&apos;&quot;");
    }

    #[test]
    fn test_escape_leaves_safe_text_alone() {
        let safe = "Psalm 23 (Lutherbibel 2017)\nDer HERR ist mein Hirte";
        assert_eq!(escape_xml(safe), safe);
        assert_eq!(escape_xml(&escape_xml(safe)), safe);
    }

    #[test]
    fn test_escape_does_not_double_decode() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
        assert_eq!(unescape_xml(&escape_xml("&amp;")), "&amp;");
    }

    #[test]
    fn test_cdata_never_contains_terminator_inside() {
        let wrapped = cdata("]]>]]>");
        let inner = wrapped
            .strip_prefix("<![CDATA[")
            .and_then(|s| s.strip_suffix("]]>"))
            .unwrap();
        let rebuilt = inner.replace("]]><![CDATA[", "");
        assert_eq!(rebuilt, "]]>]]>");
    }

    #[test]
    fn test_sanitize_control_characters() {
        assert_eq!(sanitize_xml_text("Gr\u{1}ace"), "Grace");
        assert_eq!(sanitize_xml_text("page\u{C}break\u{B}here"), "page\nbreak\nhere");
        assert_eq!(sanitize_xml_text("a\u{FFFE}\u{FFFF}\u{0}b"), "ab");
        assert_eq!(sanitize_xml_text("tab\tcr\r\nlf"), "tab\tcr\r\nlf");
        assert_eq!(sanitize_xml_text("\u{7F}\u{FFFD}"), "\u{7F}\u{FFFD}");
    }

    proptest! {
        #[test]
        fn prop_sanitized_text_is_xml(s in any::<String>()) {
            prop_assert!(sanitize_xml_text(&s).chars().all(is_xml_char));
        }

        #[test]
        fn prop_escape_round_trips(s in any::<String>()) {
            prop_assert_eq!(unescape_xml(&escape_xml(&s)), s);
        }

        #[test]
        fn prop_escaped_text_has_no_raw_specials(s in any::<String>()) {
            let escaped = escape_xml(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
        }

        #[test]
        fn prop_safe_text_is_unchanged(s in "[^<>&'\"]*") {
            prop_assert_eq!(escape_xml(&s), s);
        }
    }
}
