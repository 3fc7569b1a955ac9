//! Output profiles.
//!
//! ProPresenter has read two flavours of the v6 XML schema. They differ in
//! how the slide RTF is embedded and in the document header codes. The
//! profile is chosen by configuration; the builders do not fork on it.

use std::fmt;
use std::str::FromStr;

/// Extension of presentation documents.
pub const PRESENTATION_EXTENSION: &str = "pro6";
/// Extension of playlist documents.
pub const PLAYLIST_EXTENSION: &str = "pro6plx";

/// How a slide's rich text is stored in the text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// base64 of the UTF-8 RTF bytes, plus a plain-text copy
    Base64,
    /// raw RTF inside CDATA sections
    Cdata,
}

/// Named output profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputProfile {
    /// Current schema with base64 payloads
    #[default]
    Modern,
    /// Older schema with CDATA payloads
    Legacy,
}

impl OutputProfile {
    pub fn payload_encoding(self) -> PayloadEncoding {
        match self {
            OutputProfile::Modern => PayloadEncoding::Base64,
            OutputProfile::Legacy => PayloadEncoding::Cdata,
        }
    }

    pub fn version_number(self) -> &'static str {
        match self {
            OutputProfile::Modern => "600",
            OutputProfile::Legacy => "500",
        }
    }

    pub fn creator_code(self) -> &'static str {
        "1349676880"
    }

    pub fn build_number(self) -> &'static str {
        match self {
            OutputProfile::Modern => "6016",
            OutputProfile::Legacy => "1",
        }
    }

    pub fn os(self) -> &'static str {
        match self {
            OutputProfile::Modern => "1",
            OutputProfile::Legacy => "2",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputProfile::Modern => "modern",
            OutputProfile::Legacy => "legacy",
        }
    }
}

impl fmt::Display for OutputProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputProfile {
    type Err = crate::common::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "modern" => Ok(OutputProfile::Modern),
            "legacy" => Ok(OutputProfile::Legacy),
            other => Err(crate::common::Error::Other(format!(
                "unknown output profile '{}'",
                other
            ))),
        }
    }
}
