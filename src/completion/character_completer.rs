//! Completion at the start of a dialogue line.
//!
//! Triggers while the prefix before the cursor is nothing but optional
//! indentation and bare letters. Offers every character name known for the
//! document (inserted as `Name:`) ahead of the control-flow keywords, which
//! expand into indent-aware snippets.

use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::{
    Command, CompletionItem, CompletionItemKind, CompletionTextEdit, InsertTextFormat, Position,
    Range, TextEdit,
};

use crate::index::KEYWORDS;

use super::{line_at_cursor, Completable, Completer, Context};

/// Trigger: nothing but whitespace and letters before the cursor.
static LINE_START_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[A-Za-z]*$").unwrap());

pub struct CharacterLineCompleter<'a> {
    context: Context<'a>,
    line: u32,
    character: u32,
    /// The line's leading whitespace, reused verbatim in snippet bodies.
    indent: String,
}

impl<'a> Completer<'a> for CharacterLineCompleter<'a> {
    fn construct(context: Context<'a>, line: usize, character: usize) -> Option<Self> {
        let (text_before_cursor, line_string) = line_at_cursor(&context, line, character)?;

        if !LINE_START_PATTERN.is_match(&text_before_cursor) {
            return None;
        }

        // A keyword line gets control-flow continuation, not a character name.
        let trimmed = text_before_cursor.trim_start().to_lowercase();
        if KEYWORDS.iter().any(|keyword| trimmed.starts_with(keyword)) {
            return None;
        }

        let indent: String = line_string.chars().take_while(|c| c.is_whitespace()).collect();

        Some(Self {
            context,
            line: line as u32,
            character: character as u32,
            indent,
        })
    }

    fn completions(&self) -> Vec<impl Completable<'a, Self>> {
        self.context
            .index
            .characters(self.context.uri)
            .into_iter()
            .map(LineStartCompletion::Character)
            .chain(
                self.context
                    .index
                    .keywords()
                    .iter()
                    .copied()
                    .map(LineStartCompletion::Keyword),
            )
            .collect()
    }
}

pub enum LineStartCompletion {
    Character(String),
    Keyword(&'static str),
}

impl<'a> Completable<'a, CharacterLineCompleter<'a>> for LineStartCompletion {
    fn completions(&self, completer: &CharacterLineCompleter<'a>) -> Option<CompletionItem> {
        match self {
            LineStartCompletion::Character(name) => Some(CompletionItem {
                label: format!("{name}:"),
                kind: Some(CompletionItemKind::CLASS),
                detail: Some("Character name".to_string()),
                // Characters sort ahead of keywords
                sort_text: Some(format!("0{name}")),
                text_edit: Some(CompletionTextEdit::Edit(TextEdit {
                    range: Range {
                        start: Position {
                            line: completer.line,
                            character: completer.indent.chars().count() as u32,
                        },
                        end: Position {
                            line: completer.line,
                            character: completer.character,
                        },
                    },
                    new_text: format!("{name}:"),
                })),
                ..Default::default()
            }),
            LineStartCompletion::Keyword(keyword) => {
                let snippet = completer
                    .context
                    .settings
                    .keyword_snippets
                    .then(|| keyword_snippet(keyword, &completer.indent))
                    .flatten();

                let mut item = CompletionItem {
                    label: (*keyword).to_string(),
                    kind: Some(CompletionItemKind::SNIPPET),
                    detail: Some("Control flow".to_string()),
                    sort_text: Some(format!("1{keyword}")),
                    insert_text: Some((*keyword).to_string()),
                    insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
                    ..Default::default()
                };

                if let Some(snippet) = snippet {
                    item.insert_text = Some(snippet);
                    item.insert_text_format = Some(InsertTextFormat::SNIPPET);
                    item.command = Some(Command {
                        title: "Trigger Suggest".to_string(),
                        command: "editor.action.triggerSuggest".to_string(),
                        arguments: None,
                    });
                }

                Some(item)
            }
        }
    }
}

/// Structural snippet for a keyword, indented to match the current line.
/// `endif` and `endwhile` have no body and insert as plain text.
fn keyword_snippet(keyword: &str, indent: &str) -> Option<String> {
    let snippet = match keyword {
        "if" => format!("if ${{1:condition}}\n{indent}\t${{2:${{0}}}}"),
        "elif" => format!("elif ${{1:condition}}\n{indent}\t${{2:${{0}}}}"),
        "else" => format!("else\n{indent}\t${{1:${{0}}}}"),
        "while" => format!("while ${{1:condition}}\n{indent}\t${{2:${{0}}}}"),
        "match" => format!("match ${{1:value}}\n{indent}\t${{2:${{0}}}}"),
        "when" => format!("when ${{1:value}}\n{indent}\t${{2:${{0}}}}"),
        "do" => "do ${1:expression}".to_string(),
        "set" => "set ${1:variable} = ${2:value}".to_string(),
        _ => return None,
    };

    Some(snippet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::index::DocumentIndex;
    use crate::test_utils::test_uri;

    fn complete(text: &str, line: usize, character: usize) -> Option<Vec<CompletionItem>> {
        complete_with(text, line, character, &Settings::default())
    }

    fn complete_with(
        text: &str,
        line: usize,
        character: usize,
        settings: &Settings,
    ) -> Option<Vec<CompletionItem>> {
        let mut index = DocumentIndex::new();
        let uri = test_uri();
        index.update_document(&uri, text);

        let context = Context {
            index: &index,
            uri: &uri,
            settings,
        };

        let completer = CharacterLineCompleter::construct(context, line, character)?;
        Some(
            completer
                .completions()
                .into_iter()
                .flat_map(|completable| completable.completions(&completer))
                .collect(),
        )
    }

    #[test]
    fn test_characters_sort_before_keywords() {
        let items = complete("Alice: hi\nBob: hey\nA", 2, 1).unwrap();

        let alice = items.iter().find(|item| item.label == "Alice:").unwrap();
        let if_keyword = items.iter().find(|item| item.label == "if").unwrap();

        assert_eq!(alice.sort_text.as_deref(), Some("0Alice"));
        assert_eq!(alice.kind, Some(CompletionItemKind::CLASS));
        assert_eq!(if_keyword.sort_text.as_deref(), Some("1if"));
        assert!(alice.sort_text < if_keyword.sort_text);
    }

    #[test]
    fn test_character_edit_replaces_from_indent_to_cursor() {
        let items = complete("Alice: hi\n  Al", 1, 4).unwrap();

        let alice = items.iter().find(|item| item.label == "Alice:").unwrap();
        let Some(CompletionTextEdit::Edit(edit)) = &alice.text_edit else {
            panic!("expected a text edit");
        };

        assert_eq!(edit.range.start, Position::new(1, 2));
        assert_eq!(edit.range.end, Position::new(1, 4));
        assert_eq!(edit.new_text, "Alice:");
    }

    #[test]
    fn test_keyword_snippets_reuse_the_line_indent() {
        let items = complete("Alice: hi\n  ", 1, 2).unwrap();

        let if_keyword = items.iter().find(|item| item.label == "if").unwrap();
        assert_eq!(
            if_keyword.insert_text.as_deref(),
            Some("if ${1:condition}\n  \t${2:${0}}")
        );
        assert_eq!(if_keyword.insert_text_format, Some(InsertTextFormat::SNIPPET));
        assert!(if_keyword.command.is_some());

        // Block terminators have no structural body.
        let endif = items.iter().find(|item| item.label == "endif").unwrap();
        assert_eq!(endif.insert_text.as_deref(), Some("endif"));
        assert_eq!(endif.insert_text_format, Some(InsertTextFormat::PLAIN_TEXT));
        assert!(endif.command.is_none());
    }

    #[test]
    fn test_snippets_can_be_disabled() {
        let settings = Settings {
            keyword_snippets: false,
            ..Settings::default()
        };
        let items = complete_with("", 0, 0, &settings).unwrap();

        let if_keyword = items.iter().find(|item| item.label == "if").unwrap();
        assert_eq!(if_keyword.insert_text.as_deref(), Some("if"));
        assert_eq!(if_keyword.insert_text_format, Some(InsertTextFormat::PLAIN_TEXT));
    }

    #[test]
    fn test_keyword_prefix_suppresses_the_completer() {
        assert!(complete("if", 0, 2).is_none());
        // The prefix check is case-insensitive even though indexing is not.
        assert!(complete("If", 0, 2).is_none());
    }

    #[test]
    fn test_does_not_trigger_mid_line() {
        assert!(complete("Alice: hello", 0, 9).is_none());
        assert!(complete("=> ", 0, 3).is_none());
    }

    #[test]
    fn test_empty_line_offers_keywords_only_when_no_characters_known() {
        let items = complete("", 0, 0).unwrap();

        assert_eq!(items.len(), KEYWORDS.len());
        assert!(items.iter().all(|item| item.detail.as_deref() == Some("Control flow")));
    }
}
