//! Playlist document (`.pro6plx`) and the per-entry file plan.

use super::presentation::PresentationDocument;
use super::profile::{OutputProfile, PLAYLIST_EXTENSION, PRESENTATION_EXTENSION};
use crate::archive::Bundle;
use crate::common::Result;
use crate::common::id::generate_uuid;
use crate::common::xml::{escape_xml, sanitize_xml_text};
use crate::config::ExportOptions;
use crate::schedule::PlaylistEntry;
use rayon::prelude::*;
use std::fmt::Write as FmtWrite;

/// Prefix of playlist and archive names.
pub const PLAYLIST_BASENAME: &str = "Ablaufplan";

/// One row of the playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistItem {
    /// Section header for a non-presentable event
    Header { id: String, display_name: String },
    /// Reference to a presentation file next to the playlist
    Presentation {
        id: String,
        display_name: String,
        file_path: String,
    },
}

impl PlaylistItem {
    pub fn display_name(&self) -> &str {
        match self {
            PlaylistItem::Header { display_name, .. }
            | PlaylistItem::Presentation { display_name, .. } => display_name,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, PlaylistItem::Header { .. })
    }

    fn write_xml(&self, xml: &mut String) {
        match self {
            PlaylistItem::Header { id, display_name } => {
                let _ = write!(
                    xml,
                    r#"<RVPlaylistItem type="RVPlaylistItemTypeHeader" UUID="{}" displayName="{}"/>"#,
                    id,
                    escape_xml(display_name)
                );
            },
            PlaylistItem::Presentation {
                id,
                display_name,
                file_path,
            } => {
                xml.push_str(r#"<RVPlaylistItem type="RVPlaylistItemTypePresentation" "#);
                xml.push_str(r#"slideShowDuration="0" slideShowTransitionDuration="1" "#);
                xml.push_str(r#"slideShowTransition="RVSlideTransitionRandom" "#);
                let _ = write!(
                    xml,
                    r#"UUID="{}" displayName="{}">"#,
                    id,
                    escape_xml(display_name)
                );
                let _ = write!(
                    xml,
                    r#"<NSString name="filePath">{}</NSString>"#,
                    escape_xml(file_path)
                );
                xml.push_str("</RVPlaylistItem>");
            },
        }
    }
}

/// The single playlist of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDocument {
    pub name: String,
    pub items: Vec<PlaylistItem>,
}

impl PlaylistDocument {
    /// Serialize as an `RVPlaylistDocument`.
    pub fn to_xml(&self, profile: OutputProfile) -> String {
        let mut xml = String::with_capacity(512 + self.items.len() * 320);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        let _ = write!(
            xml,
            r#"<RVPlaylistDocument versionNumber="{}" creatorCode="{}" category="Default" playlistName="{}">"#,
            profile.version_number(),
            profile.creator_code(),
            escape_xml(&self.name)
        );
        xml.push_str(r#"<array name="items">"#);
        for item in &self.items {
            item.write_xml(&mut xml);
        }
        xml.push_str("</array>");
        xml.push_str("</RVPlaylistDocument>");
        xml
    }
}

/// Replace characters that are unsafe in file names with `-`.
///
/// Control characters, line breaks included, are replaced too.
///
/// ```
/// use pro6_export::propresenter::sanitize_file_name;
/// assert_eq!(sanitize_file_name(r#"a/b\c?d%e*f:g|h"i<j>k"#), "a-b-c-d-e-f-g-h-i-j-k");
/// assert_eq!(sanitize_file_name("line\nbreak"), "line-break");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}

/// File name of the `rank`-th presentation (1-based).
pub fn presentation_file_name(rank: usize, presentation_name: &str) -> String {
    format!(
        "{:02} - {}.{}",
        rank,
        sanitize_file_name(presentation_name),
        PRESENTATION_EXTENSION
    )
}

/// File name of the playlist document for `date` (`YYYY-MM-DD`).
pub fn playlist_file_name(date: &str) -> String {
    format!("{}_{}.{}", PLAYLIST_BASENAME, date, PLAYLIST_EXTENSION)
}

/// What each input entry turns into, decided before any rendering.
enum Planned<'a> {
    Header(&'a PlaylistEntry),
    Presentation {
        entry: &'a PlaylistEntry,
        name: String,
        file_name: String,
    },
}

fn plan<'a>(entries: &'a [PlaylistEntry], translation: &str) -> Vec<Planned<'a>> {
    let mut rank = 0;
    entries
        .iter()
        .map(|entry| {
            if entry.kind.is_presentable() {
                rank += 1;
                let name = sanitize_xml_text(&entry.presentation_name(translation)).into_owned();
                let file_name = presentation_file_name(rank, &name);
                Planned::Presentation {
                    entry,
                    name,
                    file_name,
                }
            } else {
                Planned::Header(entry)
            }
        })
        .collect()
}

/// A planned entry after rendering.
enum Rendered<'a> {
    Header(&'a PlaylistEntry),
    Presentation {
        name: String,
        file_name: String,
        body: String,
    },
}

fn render<'a>(planned: Planned<'a>, options: &ExportOptions) -> Rendered<'a> {
    match planned {
        Planned::Header(entry) => Rendered::Header(entry),
        Planned::Presentation {
            entry,
            name,
            file_name,
        } => {
            let doc = PresentationDocument::build(entry, &options.translation, options.last_used());
            Rendered::Presentation {
                name,
                file_name,
                body: doc.to_xml(options.profile),
            }
        },
    }
}

/// Build every presentation and the playlist, registering all files in
/// `bundle`.
///
/// Rendering may run in parallel; files and playlist items are added in
/// input order regardless.
pub fn build_playlist(
    entries: &[PlaylistEntry],
    options: &ExportOptions,
    mut bundle: Bundle,
) -> Result<(PlaylistDocument, Bundle)> {
    let planned = plan(entries, &options.translation);

    let rendered: Vec<Rendered<'_>> = if options.parallel {
        planned.into_par_iter().map(|p| render(p, options)).collect()
    } else {
        planned.into_iter().map(|p| render(p, options)).collect()
    };

    let mut items = Vec::with_capacity(rendered.len());
    for rendered in rendered {
        match rendered {
            Rendered::Header(entry) => items.push(PlaylistItem::Header {
                id: generate_uuid(),
                display_name: sanitize_xml_text(&entry.title).into_owned(),
            }),
            Rendered::Presentation {
                name,
                file_name,
                body,
            } => {
                log::debug!("{}: {} bytes", file_name, body.len());
                bundle.add(file_name.as_str(), body.into_bytes())?;
                items.push(PlaylistItem::Presentation {
                    id: generate_uuid(),
                    display_name: name,
                    file_path: format!("./{}", file_name),
                });
            },
        }
    }

    let playlist = PlaylistDocument {
        name: playlist_file_name(&options.date_label()),
        items,
    };
    bundle.add(playlist.name.as_str(), playlist.to_xml(options.profile).into_bytes())?;

    Ok((playlist, bundle))
}
