//! Generated XML is well-formed and every attribute value is escaped.

use pro6_export::archive::Bundle;
use pro6_export::common::xml::{escape_xml, is_xml_char, sanitize_xml_text};
use pro6_export::config::ExportOptions;
use pro6_export::propresenter::{OutputProfile, PresentationDocument, build_playlist};
use pro6_export::rtf::{CONTENT_FONT_UNIT, TITLE_FONT_UNIT, placeholder_document};
use pro6_export::schedule::{EntryKind, PlaylistEntry, split_sections};
use proptest::prelude::*;
use quick_xml::Reader;
use quick_xml::events::Event;

/// Parse `xml`, failing on mismatched or unclosed elements and on
/// characters XML 1.0 forbids.
/// Returns every `(element, attribute, raw value)` triple.
fn check_well_formed(xml: &str) -> Vec<(String, String, String)> {
    if let Some(bad) = xml.chars().find(|&c| !is_xml_char(c)) {
        panic!("forbidden character U+{:04X} in document", bad as u32);
    }
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut attrs = Vec::new();

    loop {
        let event = reader.read_event().expect("well-formed XML");
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                for attr in e.attributes() {
                    let attr = attr.expect("valid attribute");
                    attrs.push((
                        name.clone(),
                        String::from_utf8(attr.key.as_ref().to_vec()).unwrap(),
                        String::from_utf8(attr.value.to_vec()).unwrap(),
                    ));
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            },
            Event::End(_) => {
                assert!(depth > 0, "closing tag without opening tag");
                depth -= 1;
            },
            Event::Eof => break,
            _ => {},
        }
    }
    assert_eq!(depth, 0, "unclosed elements");
    attrs
}

fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![
        Just(EntryKind::Song),
        Just(EntryKind::Scripture),
        Just(EntryKind::Event),
    ]
}

// Every XML and RTF special character, C0 controls, DEL and the two
// non-characters XML forbids
fn text_strategy() -> impl Strategy<Value = String> {
    "[\\x{0}-\\x{1F}\\x{7F}\\x{FFFE}\\x{FFFF}a-zA-Z0-9 äöüß<>&'\"{}\\\\/:|?*%\\]-]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_presentation_is_well_formed(
        kind in prop_oneof![Just(EntryKind::Song), Just(EntryKind::Scripture)],
        title in text_strategy(),
        sections in proptest::collection::vec(text_strategy(), 0..5),
        legacy in any::<bool>(),
    ) {
        let entry = PlaylistEntry::with_content(kind, title, sections.join("\n---\n"));
        let profile = if legacy { OutputProfile::Legacy } else { OutputProfile::Modern };
        let doc = PresentationDocument::build(&entry, "B&B \"2017\"", chrono::Utc::now().naive_utc());
        let attrs = check_well_formed(&doc.to_xml(profile));

        let group_name = attrs
            .iter()
            .find(|(el, key, _)| el == "RVSlideGrouping" && key == "name")
            .map(|(_, _, v)| v.clone())
            .unwrap();
        let expected = sanitize_xml_text(&entry.presentation_name("B&B \"2017\"")).into_owned();
        prop_assert_eq!(group_name, escape_xml(&expected));

        // only text the encoder cannot represent falls back to the placeholder
        prop_assert_ne!(&doc.slides[0].rtf, &placeholder_document(TITLE_FONT_UNIT));
        let sections = split_sections(&entry.content);
        prop_assert_eq!(doc.slides.len(), sections.len() + 1);
        for (slide, section) in doc.slides[1..].iter().zip(&sections) {
            let is_placeholder = slide.rtf == placeholder_document(CONTENT_FONT_UNIT);
            prop_assert_eq!(is_placeholder, section.contains('\0'));
        }
    }

    #[test]
    fn prop_playlist_is_well_formed(
        entries in proptest::collection::vec((kind_strategy(), text_strategy(), text_strategy()), 0..8),
    ) {
        let entries: Vec<PlaylistEntry> = entries
            .into_iter()
            .map(|(kind, title, content)| PlaylistEntry::with_content(kind, title, content))
            .collect();
        let options = ExportOptions::new().with_translation("<NIV>");
        let (playlist, bundle) = build_playlist(&entries, &options, Bundle::new()).unwrap();

        for file in bundle.files() {
            check_well_formed(std::str::from_utf8(&file.data).unwrap());
        }

        let xml = std::str::from_utf8(bundle.get(&playlist.name).unwrap()).unwrap();
        let names: Vec<String> = check_well_formed(xml)
            .into_iter()
            .filter(|(el, key, _)| el == "RVPlaylistItem" && key == "displayName")
            .map(|(_, _, v)| v)
            .collect();
        let expected: Vec<String> = entries
            .iter()
            .map(|e| escape_xml(&sanitize_xml_text(&e.presentation_name("<NIV>"))))
            .collect();
        prop_assert_eq!(names, expected);
    }
}
