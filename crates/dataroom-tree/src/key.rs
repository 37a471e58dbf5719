//! Flat storage-key parsing.
//!
//! A key like `"room42/reports/q1.pdf"` carries a leading tenant prefix
//! segment that is a storage implementation detail, not part of the logical
//! hierarchy; parsing strips it. A trailing `/` marks a folder key.
//! Parsing never fails: malformed keys degrade to best-effort segment lists.

/// Folder/file classification of a key's terminal segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// The key names a file at its terminal segment.
    File,
    /// The key is a folder marker (ends in `/`).
    Folder,
}

/// A storage key split into logical path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    /// Path segments below the tenant prefix, in order.
    pub segments: Vec<String>,
    /// Classification of the terminal segment.
    pub kind: KeyKind,
}

impl ParsedKey {
    /// Parse a raw storage key.
    ///
    /// Empty segments (consecutive `/`) are skipped and the first remaining
    /// segment — the tenant prefix — is discarded.
    pub fn parse(raw: &str) -> Self {
        let kind = if raw.ends_with('/') {
            KeyKind::Folder
        } else {
            KeyKind::File
        };

        let segments: Vec<String> = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .skip(1)
            .map(str::to_string)
            .collect();

        Self { segments, kind }
    }

    /// Whether the key denotes a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == KeyKind::Folder
    }

    /// The terminal segment, if the key has any logical segments.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}
