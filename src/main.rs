//! dialogue-ls binary: wires the handlers into a tower-lsp server over
//! stdio.
//!
//! The protocol library owns framing, lifecycle, and capability
//! negotiation; this binary only routes notifications and requests to the
//! library crate. State mutation is synchronous within each handler, so a
//! request never observes a half-updated index.

use std::path::PathBuf;

use clap::Parser;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dialogue_ls::completion::get_completions;
use dialogue_ls::config::Settings;
use dialogue_ls::diagnostics::tag_diagnostics;
use dialogue_ls::hover;
use dialogue_ls::index::DocumentIndex;

#[derive(Parser, Debug)]
#[command(version, about = "A Language Server for branching dialogue scripts")]
struct Args {
    /// Communicate over stdio (the default; accepted for editor
    /// compatibility)
    #[arg(long)]
    stdio: bool,
}

struct Backend {
    client: Client,
    index: RwLock<DocumentIndex>,
    settings: RwLock<Settings>,
}

impl Backend {
    /// Re-index a document and publish fresh diagnostics for it.
    async fn on_change(&self, uri: Url, text: &str) {
        self.index.write().await.update_document(&uri, text);

        let diagnostics = {
            let settings = self.settings.read().await;
            tag_diagnostics(text, &settings)
        };
        self.client.publish_diagnostics(uri, diagnostics, None).await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let root_dir: Option<PathBuf> = params
            .root_uri
            .as_ref()
            .and_then(|uri| uri.to_file_path().ok());

        if let Some(root_dir) = root_dir {
            match Settings::new(&root_dir) {
                Ok(settings) => *self.settings.write().await = settings,
                Err(err) => error!("failed to load settings, using defaults: {err}"),
            }
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![
                        "=".to_string(),
                        ">".to_string(),
                        "-".to_string(),
                        "~".to_string(),
                        ":".to_string(),
                        "[".to_string(),
                    ]),
                    ..Default::default()
                }),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "dialogue-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "dialogue-ls initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.on_change(params.text_document.uri, &params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // FULL sync: the last change carries the complete document text
        if let Some(change) = params.content_changes.into_iter().last() {
            self.on_change(params.text_document.uri, &change.text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.index.write().await.remove_document(&uri);
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let index = self.index.read().await;
        let settings = self.settings.read().await;
        Ok(get_completions(&index, &params, &settings))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let index = self.index.read().await;
        let settings = self.settings.read().await;
        Ok(hover::hover(&index, &params, &settings))
    }
}

#[tokio::main]
async fn main() {
    let _args = Args::parse();

    // stdout is the protocol channel; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("starting dialogue-ls");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| Backend {
        client,
        index: RwLock::new(DocumentIndex::new()),
        settings: RwLock::new(Settings::default()),
    });
    Server::new(stdin, stdout, socket).serve(service).await;
}
