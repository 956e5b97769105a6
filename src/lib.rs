//! dialogue-ls: a Language Server for branching dialogue scripts
//!
//! This crate provides the core functionality for the dialogue-ls server,
//! enabling intelligent editing support for dialogue scripts that mix
//! character lines, jump titles, control-flow keywords, and a BBCode
//! markup subset.
//!
//! # Overview
//!
//! dialogue-ls is designed for Godot Dialogue Manager style scripts,
//! providing:
//!
//! - **Document Indexing**: Per-document extraction of character names and
//!   jump titles, rebuilt in full on every change
//! - **Autocomplete**: Context-aware completions for character lines, jump
//!   targets, and BBCode tags
//! - **Hover**: Markdown documentation for BBCode tags and domain keywords
//! - **Diagnostics**: Unknown-tag detection over the whole document
//!
//! # Architecture
//!
//! The crate is organized around several key modules:
//!
//! - [`index`]: Per-document character/title sets behind regex scans
//! - [`bbcode`]: The static BBCode tag catalogue
//! - [`completion`]: Completers for the three suggestion classes
//! - [`config`]: Configuration management and settings
//!
//! # Usage
//!
//! This crate is primarily used as the backing library for the
//! `dialogue-ls` binary, which wires the handlers into a tower-lsp server
//! over stdio. The public API enables programmatic access to the index and
//! the request handlers.
//!
//! ```ignore
//! use dialogue_ls::config::Settings;
//! use dialogue_ls::index::DocumentIndex;
//!
//! let mut index = DocumentIndex::new();
//! index.update_document(&uri, "Alice: hello\n~ intro");
//! assert_eq!(index.characters(&uri), vec!["Alice"]);
//! ```

// Core data: the tag catalogue and the per-document index
pub mod bbcode;
pub mod index;

// LSP feature modules
pub mod completion;
pub mod diagnostics;
pub mod hover;

// Configuration
pub mod config;

// Test utilities (only available in test builds)
#[cfg(test)]
pub mod test_utils;
