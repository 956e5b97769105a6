//! Per-document index of character names and jump titles.
//!
//! The index is rebuilt in full on every content change: both derived sets
//! for a document are cleared and re-scanned line by line, so a request
//! never observes a partially updated document. There is no incremental
//! re-analysis.
//!
//! Extraction is regex-only, matching the dialogue syntax heuristically:
//!
//! - `Name: text` defines a character (unless the line starts with a
//!   control-flow keyword)
//! - `~ identifier` defines a jump title
//!
//! A dialogue line containing a mid-sentence colon (`Note: see above`) is
//! classified as a character definition. That is intentional; the match
//! patterns are the contract, not a grammar.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use ropey::Rope;
use tower_lsp::lsp_types::Url;
use tracing::debug;

/// Control-flow keywords of the dialogue language, in declaration order.
///
/// A line whose trimmed content starts with one of these never contributes
/// a character name, and each keyword is offered as a completion.
pub static KEYWORDS: &[&str] = &[
    "if", "elif", "else", "endif", "while", "endwhile", "match", "when", "do", "set",
];

/// `Name:` at the start of a line, where the colon is at end-of-line or not
/// doubled (`::` is a namespace separator, not a character definition).
static CHARACTER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^:\n]+?)\s*:(?:\s*$|[^:])").unwrap());

/// `~ identifier` at the start of a line. Titles must start with a letter
/// or underscore.
static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*~\s*([A-Za-z_][A-Za-z0-9_]*)").unwrap());

#[derive(Debug, Default, Clone)]
struct DocumentData {
    characters: HashSet<String>,
    titles: HashSet<String>,
    rope: Rope,
}

/// In-memory index over every open dialogue document, keyed by URI.
///
/// Entries are created by [`DocumentIndex::update_document`] and removed by
/// [`DocumentIndex::remove_document`] when the editor closes a document.
#[derive(Debug, Default, Clone)]
pub struct DocumentIndex {
    documents: HashMap<Url, DocumentData>,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the character and title sets for `uri` from scratch.
    ///
    /// This fully replaces the previous entry; characters and titles that
    /// disappeared from the text disappear from the index.
    pub fn update_document(&mut self, uri: &Url, text: &str) {
        let mut data = DocumentData {
            rope: Rope::from_str(text),
            ..Default::default()
        };

        for line in text.lines() {
            let trimmed = line.trim_start();
            if KEYWORDS.iter().any(|keyword| trimmed.starts_with(keyword)) {
                continue;
            }

            if let Some(captures) = CHARACTER_PATTERN.captures(line) {
                if let Some(name) = captures.get(1) {
                    data.characters.insert(name.as_str().trim().to_string());
                }
                continue;
            }

            if let Some(captures) = TITLE_PATTERN.captures(line) {
                if let Some(title) = captures.get(1) {
                    data.titles.insert(title.as_str().trim().to_string());
                }
            }
        }

        debug!(
            "indexed {}: {} characters, {} titles",
            uri,
            data.characters.len(),
            data.titles.len()
        );

        self.documents.insert(uri.clone(), data);
    }

    /// Drop everything known about `uri`.
    pub fn remove_document(&mut self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Snapshot of the character names defined in `uri`, in no particular
    /// order. Empty if the document is unknown.
    pub fn characters(&self, uri: &Url) -> Vec<String> {
        self.documents
            .get(uri)
            .map(|data| data.characters.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Snapshot of the jump titles defined in `uri`, in no particular order.
    /// Empty if the document is unknown.
    pub fn titles(&self, uri: &Url) -> Vec<String> {
        self.documents
            .get(uri)
            .map(|data| data.titles.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// The control-flow keyword vocabulary, in declaration order.
    pub fn keywords(&self) -> &'static [&'static str] {
        KEYWORDS
    }

    /// One line of `uri` as last indexed, including its terminator.
    pub fn select_line(&self, uri: &Url, line: usize) -> Option<Vec<char>> {
        let rope = &self.documents.get(uri)?.rope;
        rope.get_line(line).map(|slice| slice.chars().collect_vec())
    }

    /// Full text of `uri` as last indexed.
    pub fn select_text(&self, uri: &Url) -> Option<String> {
        self.documents.get(uri).map(|data| data.rope.to_string())
    }
}
