//! Rich-text payloads for slide text elements.
//!
//! # Example
//!
//! ```rust
//! use pro6_export::rtf::{encode_payload, slide_document, CONTENT_FONT_UNIT};
//!
//! let doc = slide_document("Der HERR ist mein Hirte", CONTENT_FONT_UNIT)?;
//! let payload = encode_payload(&doc);
//! assert!(!payload.is_empty());
//! # Ok::<(), pro6_export::rtf::RtfError>(())
//! ```

mod error;
mod writer;

pub use error::{RtfError, RtfResult};
pub use writer::{
    CONTENT_FONT_UNIT, TITLE_FONT_UNIT, encode_payload, escape_body, placeholder_document,
    slide_document,
};
