//! Slide text to RTF.
//!
//! ProPresenter stores the styled text of a text element as a small Cocoa RTF
//! document. Slides only need one font, one color, centered bold paragraphs
//! and a size, so the header is fixed and only the body and `\fs` vary.

use super::error::{RtfError, RtfResult};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::fmt::Write as _;

/// Nominal font unit for title slides.
pub const TITLE_FONT_UNIT: u32 = 140;
/// Nominal font unit for content slides.
pub const CONTENT_FONT_UNIT: u32 = 120;

const DOCUMENT_HEADER: &str = "{\\rtf1\\ansi\\ansicpg1252\\cocoartf2709\n\
\\cocoatextscaling0\\cocoaplatform0{\\fonttbl\\f0\\fswiss\\fcharset0 Helvetica-Bold;}\n\
{\\colortbl;\\red255\\green255\\blue255;}\n\
{\\*\\expandedcolortbl;;}\n\
\\pard\\tx560\\tx1120\\tx1680\\tx2240\\tx2800\\tx3360\\tx3920\\tx4480\\tx5040\\tx5600\\tx6160\\tx6720\\pardirnatural\\qc\\partightenfactor0\n\n";

/// Body used when the real text cannot be encoded (a lone U+FFFD).
const PLACEHOLDER_BODY: &str = "\\u-3?";

/// Escape plain text into an RTF body.
///
/// `\`, `{` and `}` are escaped, every line break (`\n`, `\r\n`, `\r`,
/// vertical tab or form feed) becomes `\par` followed by a newline, tabs
/// become `\tab`, other control characters are written as `\'hh` and
/// non-ASCII characters as `\uN?` with UTF-16 code units. Only U+0000 is
/// rejected.
///
/// ```
/// use pro6_export::rtf::escape_body;
/// assert_eq!(escape_body("a{b}\\c").unwrap(), "a\\{b\\}\\\\c");
/// assert_eq!(escape_body("one\ntwo").unwrap(), "one\\par\ntwo");
/// assert_eq!(escape_body("Grö").unwrap(), "Gr\\u246?");
/// ```
pub fn escape_body(text: &str) -> RtfResult<String> {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '\n' => out.push_str("\\par\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\par\n");
            },
            // vertical tab, form feed
            '\u{B}' | '\u{C}' => out.push_str("\\par\n"),
            '\t' => out.push_str("\\tab "),
            '\0' => return Err(RtfError::UnrepresentableChar(0)),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\'{:02x}", c as u32);
            },
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // \u takes a signed 16-bit parameter
                    let _ = write!(out, "\\u{}?", *unit as i16);
                }
            },
        }
    }
    Ok(out)
}

/// Build the complete RTF document for one slide.
///
/// `font_unit` is the nominal size; RTF counts half-points, so `\fs` gets
/// twice the value. The output depends only on the arguments.
pub fn slide_document(text: &str, font_unit: u32) -> RtfResult<String> {
    let body = escape_body(text)?;
    Ok(wrap_body(&body, font_unit))
}

/// The fixed document used in place of text that failed to encode.
pub fn placeholder_document(font_unit: u32) -> String {
    wrap_body(PLACEHOLDER_BODY, font_unit)
}

fn wrap_body(body: &str, font_unit: u32) -> String {
    let mut out = String::with_capacity(DOCUMENT_HEADER.len() + body.len() + 24);
    out.push_str(DOCUMENT_HEADER);
    let _ = write!(out, "\\f0\\b\\fs{} \\cf1 ", font_unit * 2);
    out.push_str(body);
    out.push('}');
    out
}

/// Encode an RTF document for embedding as element content.
///
/// The document is taken as UTF-8 bytes and base64-encoded with the standard
/// alphabet, so the result never needs XML escaping.
pub fn encode_payload(document: &str) -> String {
    STANDARD.encode(document.as_bytes())
}
