//! Document structures for analysis input

use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    JobPosting,
}

/// Immutable wrapper over one input text.
///
/// Holds the raw text as given by the caller plus a lazily computed
/// lower-cased view used by all matching. Two instances exist per analysis
/// run and neither survives it.
#[derive(Debug)]
pub struct Document {
    content: String,
    kind: DocumentKind,
    folded: OnceLock<String>,
}

impl Document {
    pub fn new(content: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            content: content.into(),
            kind,
            folded: OnceLock::new(),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The text exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.content
    }

    /// Case-folded view of the text. Total: an empty document folds to an
    /// empty string.
    pub fn normalized(&self) -> &str {
        self.folded.get_or_init(|| self.content.to_lowercase())
    }

    /// First newline-delimited line of the raw text. Empty when the document
    /// starts with a line break or has no content.
    pub fn first_line(&self) -> &str {
        self.content.split('\n').next().unwrap_or("")
    }

    pub fn word_count(&self) -> usize {
        self.content.unicode_words().count()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
