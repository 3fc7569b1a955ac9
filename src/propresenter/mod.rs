//! ProPresenter 6 document writers.
//!
//! An export produces one presentation document per song or scripture
//! entry and one playlist that lists every entry in schedule order:
//! events as headers, everything else as a reference to its presentation
//! file.

mod playlist;
mod presentation;
mod profile;
mod slide;

pub use playlist::{
    PLAYLIST_BASENAME, PlaylistDocument, PlaylistItem, build_playlist, playlist_file_name,
    presentation_file_name, sanitize_file_name,
};
pub use presentation::{
    DocumentMetadata, GroupColor, LAST_USED_FORMAT, PresentationDocument, SlideGroup,
};
pub use profile::{
    OutputProfile, PLAYLIST_EXTENSION, PRESENTATION_EXTENSION, PayloadEncoding,
};
pub use slide::{LABEL_MAX_CHARS, Slide, slide_label};
