//! Common types and helpers shared by the document writers.

pub mod error;
pub mod hex;
pub mod id;
pub mod xml;

pub use error::{Error, Result};
pub use id::generate_uuid;
pub use xml::escape_xml;
