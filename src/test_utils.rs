//! Shared helpers for unit tests: canned URIs, pre-indexed documents, and
//! LSP request parameter builders.

use tower_lsp::lsp_types::{
    CompletionParams, HoverParams, PartialResultParams, Position, TextDocumentIdentifier,
    TextDocumentPositionParams, Url, WorkDoneProgressParams,
};

use crate::index::DocumentIndex;

pub fn test_uri() -> Url {
    Url::parse("file:///scripts/test.dialogue").unwrap()
}

/// An index holding a single document with the given text.
pub fn index_with(text: &str) -> (DocumentIndex, Url) {
    let mut index = DocumentIndex::new();
    let uri = test_uri();
    index.update_document(&uri, text);
    (index, uri)
}

fn position_params(uri: &Url, line: u32, character: u32) -> TextDocumentPositionParams {
    TextDocumentPositionParams {
        text_document: TextDocumentIdentifier { uri: uri.clone() },
        position: Position { line, character },
    }
}

pub fn completion_params(uri: &Url, line: u32, character: u32) -> CompletionParams {
    CompletionParams {
        text_document_position: position_params(uri, line, character),
        work_done_progress_params: WorkDoneProgressParams::default(),
        partial_result_params: PartialResultParams::default(),
        context: None,
    }
}

pub fn hover_params(uri: &Url, line: u32, character: u32) -> HoverParams {
    HoverParams {
        text_document_position_params: position_params(uri, line, character),
        work_done_progress_params: WorkDoneProgressParams::default(),
    }
}
