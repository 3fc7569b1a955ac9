//! XML text helpers shared by every document writer.

mod escape;

pub use escape::{cdata, escape_xml, is_xml_char, sanitize_xml_text, unescape_xml};
