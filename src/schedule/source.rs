//! Uploaded schedule files, classified by media type.

use crate::common::{Error, Result};

/// Media type of Word documents.
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// An uploaded service schedule, ready to be handed to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleSource {
    /// Photo or scan of the printed schedule
    Image { media_type: String, data: Vec<u8> },
    /// Plain text schedule
    Text(String),
    /// Word document; text extraction happens downstream
    Document { data: Vec<u8> },
}

impl ScheduleSource {
    /// Classify an upload by its media type.
    pub fn from_upload(media_type: &str, data: Vec<u8>) -> Result<Self> {
        if media_type.starts_with("image/") {
            return Ok(ScheduleSource::Image {
                media_type: media_type.to_string(),
                data,
            });
        }
        match media_type {
            "text/plain" => {
                let text = String::from_utf8(data).map_err(|_| Error::EmptySource)?;
                if text.trim().is_empty() {
                    return Err(Error::EmptySource);
                }
                Ok(ScheduleSource::Text(text))
            },
            DOCX_MEDIA_TYPE => Ok(ScheduleSource::Document { data }),
            other => Err(Error::Unsupported(other.to_string())),
        }
    }

    /// Short human-readable description for progress output.
    pub fn describe(&self) -> String {
        match self {
            ScheduleSource::Image { media_type, data } => {
                format!("image ({}, {} bytes)", media_type, data.len())
            },
            ScheduleSource::Text(text) => format!("text ({} lines)", text.lines().count()),
            ScheduleSource::Document { data } => format!("document ({} bytes)", data.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image() {
        let src = ScheduleSource::from_upload("image/png", vec![1, 2, 3]).unwrap();
        assert!(matches!(src, ScheduleSource::Image { ref media_type, .. } if media_type == "image/png"));
        assert_eq!(src.describe(), "image (image/png, 3 bytes)");
    }

    #[test]
    fn test_text() {
        let src = ScheduleSource::from_upload("text/plain", b"Begruessung\nLied".to_vec()).unwrap();
        assert_eq!(src, ScheduleSource::Text("Begruessung\nLied".into()));
        assert_eq!(src.describe(), "text (2 lines)");
    }

    #[test]
    fn test_blank_text_is_empty_source() {
        let err = ScheduleSource::from_upload("text/plain", b"  \n ".to_vec()).unwrap_err();
        assert!(matches!(err, Error::EmptySource));
    }

    #[test]
    fn test_docx() {
        let src = ScheduleSource::from_upload(DOCX_MEDIA_TYPE, vec![0x50, 0x4b]).unwrap();
        assert!(matches!(src, ScheduleSource::Document { .. }));
    }

    #[test]
    fn test_unsupported() {
        let err = ScheduleSource::from_upload("application/pdf", vec![]).unwrap_err();
        assert!(matches!(err, Error::Unsupported(ref t) if t == "application/pdf"));
    }
}
