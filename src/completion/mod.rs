//! Completion for dialogue scripts.
//!
//! Three suggestion classes, decided from the text preceding the cursor on
//! the current line and tried in order:
//!
//! 1. [`CharacterLineCompleter`] - character names and control-flow
//!    keywords at the start of a line
//! 2. [`JumpTargetCompleter`] - titles and the `END` sentinel after `=>`
//! 3. [`TagCompleter`] - BBCode tags inside an unclosed `[`
//!
//! The first completer whose trigger pattern matches answers the request,
//! even when it produces an empty list.

use tower_lsp::lsp_types::{CompletionItem, CompletionList, CompletionParams, CompletionResponse, Url};

use crate::{config::Settings, index::DocumentIndex};

use self::character_completer::CharacterLineCompleter;
use self::jump_completer::JumpTargetCompleter;
use self::tag_completer::TagCompleter;

mod character_completer;
mod jump_completer;
mod tag_completer;

#[derive(Clone, Copy)]
pub struct Context<'a> {
    index: &'a DocumentIndex,
    uri: &'a Url,
    settings: &'a Settings,
}

pub trait Completer<'a>: Sized {
    /// Inspect the line at the cursor and construct the completer when its
    /// trigger pattern matches.
    fn construct(context: Context<'a>, line: usize, character: usize) -> Option<Self>;

    fn completions(&self) -> Vec<impl Completable<'a, Self>>;
}

pub trait Completable<'a, T: Completer<'a>>: Sized {
    fn completions(&self, completer: &T) -> Option<CompletionItem>;
}

pub fn get_completions(
    index: &DocumentIndex,
    params: &CompletionParams,
    settings: &Settings,
) -> Option<CompletionResponse> {
    let completion_context = Context {
        index,
        uri: &params.text_document_position.text_document.uri,
        settings,
    };

    let line = params.text_document_position.position.line;
    let character = params.text_document_position.position.character;

    run_completer::<CharacterLineCompleter>(completion_context, line, character)
        .or_else(|| run_completer::<JumpTargetCompleter>(completion_context, line, character))
        .or_else(|| run_completer::<TagCompleter>(completion_context, line, character))
}

fn run_completer<'a, T: Completer<'a>>(
    context: Context<'a>,
    line: u32,
    character: u32,
) -> Option<CompletionResponse> {
    let completer = T::construct(context, line as usize, character as usize)?;

    let completions = completer
        .completions()
        .into_iter()
        .flat_map(|completable| completable.completions(&completer))
        .collect::<Vec<CompletionItem>>();

    Some(CompletionResponse::List(CompletionList {
        is_incomplete: false,
        items: completions,
    }))
}

/// The line's text, stripped of its terminator, split at the cursor.
///
/// Returns `(text_before_cursor, line_string)`; `None` when the line does
/// not exist in the index.
fn line_at_cursor(context: &Context, line: usize, character: usize) -> Option<(String, String)> {
    let line_chars = context.index.select_line(context.uri, line)?;
    let mut line_string = String::from_iter(line_chars);
    while line_string.ends_with('\n') || line_string.ends_with('\r') {
        line_string.pop();
    }

    let text_before_cursor = line_string.chars().take(character).collect();

    Some((text_before_cursor, line_string))
}
