//! Hover documentation for BBCode tags and a few domain keywords.
//!
//! The word under the cursor is extracted from the current line only. A
//! BBCode tag name takes precedence over a plain alphabetic word at the
//! same position, so hovering the name inside `[color=red]` documents the
//! `color` tag rather than treating it as prose.
//!
//! Hover can be disabled via [`Settings::hover`].

use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::{Hover, HoverContents, HoverParams, MarkupContent, MarkupKind};

use crate::bbcode;
use crate::config::Settings;
use crate::index::DocumentIndex;

/// Generate hover content for the word at the cursor position.
///
/// Answers with the catalogue's markdown rendering for BBCode tags, or a
/// canned one-liner for `character`, `dialogue`, and `choice`. Returns
/// `None` when hover is disabled, the document is unknown, or the cursor
/// is not on a documented word.
pub fn hover(index: &DocumentIndex, params: &HoverParams, settings: &Settings) -> Option<Hover> {
    if !settings.hover {
        return None;
    }

    let uri = &params.text_document_position_params.text_document.uri;
    let position = params.text_document_position_params.position;

    let line_chars = index.select_line(uri, position.line as usize)?;
    let line_string = String::from_iter(line_chars);

    let word = word_at_position(&line_string, position.character as usize)?;

    if let Some(tag) = bbcode::find_tag(&word) {
        return Some(markdown_hover(bbcode::tag_to_markdown(tag)));
    }

    let documentation = match word.as_str() {
        "character" => "**character** - Defines a character in the dialogue",
        "dialogue" => "**dialogue** - Represents a line of dialogue",
        "choice" => "**choice** - Defines a player choice option",
        _ => return None,
    };

    Some(markdown_hover(documentation.to_string()))
}

/// The word under the cursor: a BBCode tag name when the cursor sits on
/// one, otherwise a plain alphabetic word.
fn word_at_position(line: &str, character: usize) -> Option<String> {
    static TAG_AT_POSITION: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\[([A-Za-z_]+)(?:=[^\]]*)?]").unwrap());
    static WORD_AT_POSITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+").unwrap());

    for captures in TAG_AT_POSITION.captures_iter(line) {
        if let Some(name) = captures.get(1) {
            let start = line[..name.start()].chars().count();
            let end = start + name.as_str().chars().count();
            if (start..=end).contains(&character) {
                return Some(name.as_str().to_string());
            }
        }
    }

    for word in WORD_AT_POSITION.find_iter(line) {
        let start = line[..word.start()].chars().count();
        let end = start + word.as_str().chars().count();
        if (start..=end).contains(&character) {
            return Some(word.as_str().to_string());
        }
    }

    None
}

fn markdown_hover(value: String) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value,
        }),
        range: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{hover_params, index_with};

    fn hover_markdown(hover: Hover) -> String {
        match hover.contents {
            HoverContents::Markup(markup) => markup.value,
            other => panic!("expected markup contents, got {other:?}"),
        }
    }

    #[test]
    fn test_hover_on_tag_name_renders_catalogue_markdown() {
        let (index, uri) = index_with("Alice: [wave amp=50]hello[/wave]");

        let hover = hover(&index, &hover_params(&uri, 0, 9), &Settings::default())
            .expect("should hover the wave tag");
        let markdown = hover_markdown(hover);

        assert!(markdown.contains("**[wave]**"));
        assert!(markdown.contains("**Parameters:**"));
    }

    #[test]
    fn test_tag_name_takes_precedence_over_plain_word() {
        // `b` is both a tag here and a plain letter; the tag wins.
        let (index, uri) = index_with("[b]choice[/b]");

        let hover = hover(&index, &hover_params(&uri, 0, 1), &Settings::default())
            .expect("should hover the b tag");

        assert!(hover_markdown(hover).contains("**[b]**"));
    }

    #[test]
    fn test_hover_on_domain_keywords() {
        let (index, uri) = index_with("a choice line");

        let hover = hover(&index, &hover_params(&uri, 0, 4), &Settings::default())
            .expect("should hover the word choice");

        assert!(hover_markdown(hover).contains("Defines a player choice option"));
    }

    #[test]
    fn test_no_hover_on_undocumented_word() {
        let (index, uri) = index_with("Alice: hello");

        assert!(hover(&index, &hover_params(&uri, 0, 9), &Settings::default()).is_none());
    }

    #[test]
    fn test_hover_disabled_by_settings() {
        let (index, uri) = index_with("[b]text[/b]");
        let settings = Settings {
            hover: false,
            ..Settings::default()
        };

        assert!(hover(&index, &hover_params(&uri, 0, 1), &settings).is_none());
    }

    #[test]
    fn test_no_hover_for_unknown_document_or_line() {
        let (index, uri) = index_with("Alice: hello");

        assert!(hover(&index, &hover_params(&uri, 9, 0), &Settings::default()).is_none());
    }
}
