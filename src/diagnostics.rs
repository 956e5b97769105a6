//! Diagnostics for unrecognized BBCode tags.
//!
//! A single regex scan over the whole document flags every `[name]`,
//! `[name param=value]`, or `[/name]` whose tag name is not in the
//! catalogue. A closing tag is not flagged when the bare opener `[name]`
//! occurs literally anywhere in the text. That suppression is a heuristic:
//! it over-suppresses when an unrelated bare `[name]` exists elsewhere, and
//! under-suppresses when the opener carries attributes. It is kept as-is
//! for compatibility with existing scripts.

use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};

use crate::bbcode;
use crate::config::Settings;

/// Source tag attached to every published diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "dialogue-ls";

/// Opening, attributed, or closing BBCode tag.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(/?)(\w+)(?:\s*[^\]]*?)?\]").unwrap());

/// Scan `text` and report every tag the catalogue does not know.
pub fn tag_diagnostics(text: &str, settings: &Settings) -> Vec<Diagnostic> {
    if !settings.tag_diagnostics {
        return Vec::new();
    }

    let mut diagnostics = Vec::new();

    for captures in TAG_PATTERN.captures_iter(text) {
        let (Some(full), Some(closing), Some(name)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };

        if bbcode::is_valid_tag(name.as_str()) {
            continue;
        }

        let is_closing = !closing.as_str().is_empty();
        if is_closing && text.contains(&format!("[{}]", name.as_str())) {
            continue;
        }

        diagnostics.push(Diagnostic {
            range: Range {
                start: offset_to_position(text, full.start()),
                end: offset_to_position(text, full.end()),
            },
            severity: Some(DiagnosticSeverity::ERROR),
            source: Some(DIAGNOSTIC_SOURCE.to_string()),
            message: format!("Invalid BBCode tag: [{}]", name.as_str()),
            ..Default::default()
        });
    }

    diagnostics
}

fn offset_to_position(text: &str, offset: usize) -> Position {
    let before = &text[..offset];
    let line = before.matches('\n').count() as u32;
    let character = before.chars().rev().take_while(|c| *c != '\n').count() as u32;
    Position { line, character }
}
