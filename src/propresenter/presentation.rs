//! Per-entry presentation documents (`.pro6`).

use super::profile::OutputProfile;
use super::slide::Slide;
use crate::common::id::generate_uuid;
use crate::common::xml::{escape_xml, sanitize_xml_text};
use crate::schedule::{EntryKind, PlaylistEntry, split_sections};
use chrono::NaiveDateTime;
use std::fmt::Write as FmtWrite;

/// Format of `lastDateUsed`.
pub const LAST_USED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Color of a slide group, as an RGBA string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupColor {
    /// Blue
    Song,
    /// Amber
    Scripture,
}

impl GroupColor {
    pub fn for_kind(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Song => GroupColor::Song,
            EntryKind::Scripture | EntryKind::Event => GroupColor::Scripture,
        }
    }

    pub fn rgba(self) -> &'static str {
        match self {
            GroupColor::Song => "0 0 1 1",
            GroupColor::Scripture => "1 0.75 0 1",
        }
    }
}

/// Named, colored list of slide identifiers.
#[derive(Debug, Clone)]
pub struct SlideGroup {
    pub id: String,
    pub name: String,
    pub color: GroupColor,
    pub slide_ids: Vec<String>,
}

/// Document-level metadata.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    /// CCLI song title, songs only
    pub song_title: Option<String>,
    pub last_used: NaiveDateTime,
}

/// A complete presentation: a title slide, one slide per content section,
/// and one group holding all of them.
#[derive(Debug, Clone)]
pub struct PresentationDocument {
    pub id: String,
    pub slides: Vec<Slide>,
    pub group: SlideGroup,
    pub metadata: DocumentMetadata,
}

impl PresentationDocument {
    /// Build the document for a presentable entry.
    ///
    /// Content with no usable sections yields a title-only document.
    pub fn build(entry: &PlaylistEntry, translation: &str, last_used: NaiveDateTime) -> Self {
        let group_name = sanitize_xml_text(&entry.presentation_name(translation)).into_owned();

        let sections = split_sections(&entry.content);
        if sections.is_empty() {
            match entry.error {
                Some(ref message) => log::warn!(
                    "'{}' has no content ({}), exporting title slide only",
                    entry.title,
                    message
                ),
                None => log::debug!("'{}' has no content, exporting title slide only", entry.title),
            }
        }

        let mut slides = Vec::with_capacity(sections.len() + 1);
        slides.push(Slide::build(&group_name, true));
        slides.extend(sections.iter().map(|section| Slide::build(section, false)));

        let group = SlideGroup {
            id: generate_uuid(),
            name: group_name,
            color: GroupColor::for_kind(entry.kind),
            slide_ids: slides.iter().map(|s| s.id.clone()).collect(),
        };

        let song_title = match entry.kind {
            EntryKind::Song => Some(sanitize_xml_text(&entry.title).into_owned()),
            EntryKind::Scripture | EntryKind::Event => None,
        };

        Self {
            id: generate_uuid(),
            slides,
            group,
            metadata: DocumentMetadata {
                song_title,
                last_used,
            },
        }
    }

    /// Serialize as an `RVPresentationDocument`.
    pub fn to_xml(&self, profile: OutputProfile) -> String {
        let mut xml = String::with_capacity(4096 * self.slides.len());
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');

        xml.push_str(r#"<RVPresentationDocument backgroundColor="0 0 0 1" height="1080" width="1920" "#);
        let _ = write!(
            xml,
            r#"versionNumber="{}" docType="0" creatorCode="{}" "#,
            profile.version_number(),
            profile.creator_code()
        );
        let _ = write!(
            xml,
            r#"lastDateUsed="{}" usedCount="0" category="Default" "#,
            self.metadata.last_used.format(LAST_USED_FORMAT)
        );
        let _ = write!(
            xml,
            r#"resourcesDirectory="" notes="" os="{}" buildNumber="{}" UUID="{}" "#,
            profile.os(),
            profile.build_number(),
            self.id
        );
        xml.push_str(r#"drawingBackgroundColor="0 0 0 0" CCLIDisplay="0" "#);
        let _ = write!(
            xml,
            r#"CCLIsongTitle="{}" "#,
            escape_xml(self.metadata.song_title.as_deref().unwrap_or(""))
        );
        xml.push_str(r#"CCLIPublisher="" CCLICopyrightYear="" CCLIAuthor="" CCLISongNumber="">"#);

        xml.push_str(
            r#"<timeline timeOffSet="0" selectedMediaTrackIndex="0" loop="0" duration="0" unitOfMeasure="30"/>"#,
        );
        xml.push_str(r#"<bibleReference location="1001001" name="NIV"/>"#);

        xml.push_str(r#"<array name="slides">"#);
        for (index, slide) in self.slides.iter().enumerate() {
            slide.write_xml(&mut xml, index, profile);
        }
        xml.push_str("</array>");

        xml.push_str(r#"<array name="groups">"#);
        self.write_group(&mut xml);
        xml.push_str("</array>");

        xml.push_str("</RVPresentationDocument>");
        xml
    }

    fn write_group(&self, xml: &mut String) {
        let group = &self.group;
        let _ = write!(
            xml,
            r#"<RVSlideGrouping name="{}" color="{}" uuid="{}">"#,
            escape_xml(&group.name),
            group.color.rgba(),
            group.id
        );
        xml.push_str(r#"<array name="slides">"#);
        for id in &group.slide_ids {
            let _ = write!(xml, "<NSString>{}</NSString>", id);
        }
        xml.push_str("</array>");
        xml.push_str("</RVSlideGrouping>");
    }
}
