use std::fmt;

/// Document formats a resume can be extracted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    /// Detects the format from the extension of a storage key.
    ///
    /// The comparison ignores ASCII case. Returns `None` for any other
    /// extension, including keys that have none.
    pub fn from_key(key: &str) -> Option<Self> {
        match key_extension(key)?.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

impl fmt::Display for ResumeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => f.write_str("pdf"),
            Self::Docx => f.write_str("docx"),
        }
    }
}

/// Lowercased extension of a storage key, without the leading dot.
///
/// Only the last `/`-separated segment is inspected, and a segment that is
/// nothing but an extension (`resumes/.pdf`) still has one.
pub fn key_extension(key: &str) -> Option<String> {
    let name = key.rsplit('/').next().unwrap_or(key);
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Raw resume bytes together with the format they are encoded in.
#[derive(Debug)]
pub struct ResumeDocument {
    pub format: ResumeFormat,
    pub bytes: Vec<u8>,
}
