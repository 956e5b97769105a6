//! Completion for BBCode tags inside an unclosed `[`.
//!
//! Every catalogue tag whose name starts with the partial text is offered
//! as a snippet: parameters become ordered placeholder slots, and
//! non-self-closing tags get a content placeholder and the paired closing
//! tag appended.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionTextEdit, Documentation, InsertTextFormat,
    MarkupContent, MarkupKind, Position, Range, TextEdit,
};

use crate::bbcode::{self, BBCodeTag};

use super::{Completable, Completer, Context};

/// Trigger: an opening bracket followed by letters or underscores, still
/// unclosed at the cursor.
static PARTIAL_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([A-Za-z_]*)$").unwrap());

pub struct TagCompleter {
    partial_tag: String,
    line: u32,
    character: u32,
    /// The edit swallows an existing `]` right after the cursor so
    /// accepting a suggestion never doubles the bracket.
    closing_bracket_after_cursor: bool,
}

impl<'a> Completer<'a> for TagCompleter {
    fn construct(context: Context<'a>, line: usize, character: usize) -> Option<Self> {
        let line_chars = context.index.select_line(context.uri, line)?;
        let text_before_cursor: String = line_chars.iter().take(character).collect();

        let captures = PARTIAL_TAG_PATTERN.captures(&text_before_cursor)?;
        let partial_tag = captures.get(1)?.as_str().to_string();

        Some(Self {
            partial_tag,
            line: line as u32,
            character: character as u32,
            closing_bracket_after_cursor: line_chars.get(character) == Some(&']'),
        })
    }

    fn completions(&self) -> Vec<impl Completable<'a, Self>> {
        bbcode::all_tags()
            .filter(|tag| tag.name.starts_with(&self.partial_tag))
            .map(TagCompletion)
            .collect()
    }
}

pub struct TagCompletion(&'static BBCodeTag);

impl<'a> Completable<'a, TagCompleter> for TagCompletion {
    fn completions(&self, completer: &TagCompleter) -> Option<CompletionItem> {
        let tag = self.0;

        let parameter_snippets = tag
            .parameters
            .iter()
            .enumerate()
            .map(|(i, parameter)| format!("{}=${{{}:{}}}", parameter.name, i + 1, parameter.name))
            .join(" ");

        let mut new_text = tag.name.to_string();
        if !tag.parameters.is_empty() {
            new_text.push(' ');
            new_text.push_str(&parameter_snippets);
        }
        new_text.push(']');
        if !tag.self_closing {
            new_text.push_str(&format!(
                "${{{}:content}}[/{}]",
                tag.parameters.len() + 1,
                tag.name
            ));
        }

        let start = completer.character - completer.partial_tag.chars().count() as u32;
        let end = completer.character + u32::from(completer.closing_bracket_after_cursor);

        Some(CompletionItem {
            label: tag.name.to_string(),
            kind: Some(CompletionItemKind::SNIPPET),
            detail: Some(tag.description.to_string()),
            documentation: Some(Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: bbcode::tag_to_markdown(tag),
            })),
            text_edit: Some(CompletionTextEdit::Edit(TextEdit {
                range: Range {
                    start: Position {
                        line: completer.line,
                        character: start,
                    },
                    end: Position {
                        line: completer.line,
                        character: end,
                    },
                },
                new_text,
            })),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            ..Default::default()
        })
    }
}
