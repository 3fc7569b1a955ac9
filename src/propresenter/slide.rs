//! One slide: a single full-frame text element.

use super::profile::{OutputProfile, PayloadEncoding};
use crate::common::id::generate_uuid;
use crate::common::xml::{cdata, escape_xml, sanitize_xml_text};
use crate::rtf::{self, CONTENT_FONT_UNIT, TITLE_FONT_UNIT};
use std::fmt::Write as FmtWrite;

/// Maximum length of a slide label, in characters.
pub const LABEL_MAX_CHARS: usize = 20;

/// A rendered slide.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide identifier, referenced by the slide group
    pub id: String,
    /// Identifier of the text element
    pub element_id: String,
    /// Plain text shown on the slide
    pub text: String,
    pub is_title_slide: bool,
    /// First line of the text, truncated
    pub label: String,
    /// RTF document for the text element
    pub rtf: String,
}

impl Slide {
    /// Build a slide from one text chunk.
    ///
    /// The RTF payload is encoded from `text` as given, since base64 and the
    /// RTF escapes carry any control character. The plain-text copy and the
    /// label drop what XML cannot hold. Text the RTF encoder rejects is
    /// replaced by a placeholder payload.
    pub fn build(text: &str, is_title_slide: bool) -> Self {
        let font_unit = if is_title_slide {
            TITLE_FONT_UNIT
        } else {
            CONTENT_FONT_UNIT
        };
        let rtf = match rtf::slide_document(text, font_unit) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("slide text not encodable, using placeholder: {}", e);
                rtf::placeholder_document(font_unit)
            },
        };

        Self {
            id: generate_uuid(),
            element_id: generate_uuid(),
            text: sanitize_xml_text(text).into_owned(),
            is_title_slide,
            label: slide_label(text),
            rtf,
        }
    }

    /// Serialize as an `RVDisplaySlide` element.
    pub fn to_xml(&self, index: usize, profile: OutputProfile) -> String {
        let mut xml = String::with_capacity(self.rtf.len() * 2 + 1024);
        self.write_xml(&mut xml, index, profile);
        xml
    }

    pub(crate) fn write_xml(&self, xml: &mut String, index: usize, profile: OutputProfile) {
        xml.push_str(r#"<RVDisplaySlide backgroundColor="0 0 0 1" enabled="1" "#);
        xml.push_str(r#"highlightColor="0 0 0 0" hotKey="" "#);
        let _ = write!(xml, r#"label="{}" "#, escape_xml(&self.label));
        let _ = write!(
            xml,
            r#"notes="" slideType="1" sort_index="{}" UUID="{}">"#,
            index, self.id
        );
        xml.push_str("<cues/>");
        xml.push_str("<displayElements>");

        let _ = write!(
            xml,
            r#"<RVTextElement displayName="Default" UUID="{}" "#,
            self.element_id
        );
        xml.push_str(r#"fromTemplate="1" persistent="1" typeID="0" displayDelay="0" locked="0" "#);
        xml.push_str(r#"opacity="1" source="" verticalAlignment="1" adjustsHeightToFit="0" "#);
        xml.push_str(r#"revealType="0" fillColor="0 0 0 0" strokeColor="0 0 0 1" strokeWidth="0" "#);
        xml.push_str(r#"drawingFill="0" drawingStroke="0" shadowColor="0 0 0 1" shadowBlur="0" "#);
        xml.push_str(r#"shadowOffset="0 0">"#);
        // single full-frame text region on a 1920x1080 canvas
        xml.push_str(r#"<position x="96" y="54" width="1728" height="972" z="0"/>"#);
        xml.push_str("<effects/>");

        match profile.payload_encoding() {
            PayloadEncoding::Base64 => {
                let _ = write!(
                    xml,
                    r#"<NSString name="PlainText">{}</NSString>"#,
                    escape_xml(&self.text)
                );
                let _ = write!(
                    xml,
                    r#"<NSString name="RTFData">{}</NSString>"#,
                    rtf::encode_payload(&self.rtf)
                );
            },
            PayloadEncoding::Cdata => {
                let _ = write!(xml, r#"<NSString name="RTFData">{}</NSString>"#, cdata(&self.rtf));
            },
        }

        xml.push_str("</RVTextElement>");
        xml.push_str("</displayElements>");
        xml.push_str("</RVDisplaySlide>");
    }
}

/// First line of `text`, cut to [`LABEL_MAX_CHARS`] characters.
pub fn slide_label(text: &str) -> String {
    sanitize_xml_text(text)
        .lines()
        .next()
        .unwrap_or("")
        .chars()
        .take(LABEL_MAX_CHARS)
        .collect()
}
