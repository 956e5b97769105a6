//! Completion for jump targets after `=>`.
//!
//! Offers the `END` sentinel first, then every title defined in the
//! document, inserted verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind};

use super::{line_at_cursor, Completable, Completer, Context};

/// Trigger: the prefix ends with `=>`, optionally followed by whitespace.
static JUMP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"=>\s*$").unwrap());

pub struct JumpTargetCompleter<'a> {
    context: Context<'a>,
}

impl<'a> Completer<'a> for JumpTargetCompleter<'a> {
    fn construct(context: Context<'a>, line: usize, character: usize) -> Option<Self> {
        let (text_before_cursor, _) = line_at_cursor(&context, line, character)?;

        if !JUMP_PATTERN.is_match(&text_before_cursor) {
            return None;
        }

        Some(Self { context })
    }

    fn completions(&self) -> Vec<impl Completable<'a, Self>> {
        std::iter::once(JumpCompletion::End)
            .chain(
                self.context
                    .index
                    .titles(self.context.uri)
                    .into_iter()
                    .map(JumpCompletion::Title),
            )
            .collect()
    }
}

pub enum JumpCompletion {
    /// Terminal sentinel ending the dialogue.
    End,
    Title(String),
}

impl<'a> Completable<'a, JumpTargetCompleter<'a>> for JumpCompletion {
    fn completions(&self, _completer: &JumpTargetCompleter<'a>) -> Option<CompletionItem> {
        match self {
            JumpCompletion::End => Some(CompletionItem {
                label: "END".to_string(),
                kind: Some(CompletionItemKind::KEYWORD),
                detail: Some("End the dialogue".to_string()),
                ..Default::default()
            }),
            JumpCompletion::Title(title) => Some(CompletionItem {
                label: title.clone(),
                kind: Some(CompletionItemKind::REFERENCE),
                detail: Some("Jump to title".to_string()),
                ..Default::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::index::DocumentIndex;
    use crate::test_utils::test_uri;

    fn complete(text: &str, line: usize, character: usize) -> Option<Vec<CompletionItem>> {
        let mut index = DocumentIndex::new();
        let uri = test_uri();
        index.update_document(&uri, text);

        let settings = Settings::default();
        let context = Context {
            index: &index,
            uri: &uri,
            settings: &settings,
        };

        let completer = JumpTargetCompleter::construct(context, line, character)?;
        Some(
            completer
                .completions()
                .into_iter()
                .flat_map(|completable| completable.completions(&completer))
                .collect(),
        )
    }

    #[test]
    fn test_end_sentinel_comes_first_then_titles() {
        let items = complete("~ intro\n~ ending\nAlice: bye => ", 2, 14).unwrap();

        assert_eq!(items[0].label, "END");
        assert_eq!(items[0].kind, Some(CompletionItemKind::KEYWORD));

        let titles: Vec<&str> = items[1..].iter().map(|item| item.label.as_str()).collect();
        assert_eq!(items.len(), 3);
        assert!(titles.contains(&"intro"));
        assert!(titles.contains(&"ending"));
        assert!(items[1..]
            .iter()
            .all(|item| item.kind == Some(CompletionItemKind::REFERENCE)));
    }

    #[test]
    fn test_triggers_with_and_without_trailing_whitespace() {
        assert!(complete("=>", 0, 2).is_some());
        assert!(complete("=>   ", 0, 5).is_some());
    }

    #[test]
    fn test_does_not_trigger_after_target_text() {
        assert!(complete("=> intro", 0, 8).is_none());
    }

    #[test]
    fn test_only_end_offered_without_titles() {
        let items = complete("Alice: hi => ", 0, 13).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "END");
    }
}
