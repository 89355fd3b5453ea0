use crate::convert::{from_lsp_diagnostic, parse_uri, to_lsp_action, to_lsp_diagnostic, to_workspace_edit};
use crate::documents::{Document, DocumentStore};
use annolint_api::{ApiError, Diagnostic, ResolveData};
use annolint_core::diagnostics::DiagnosticsEngine;
use annolint_core::provider::SourceModelProvider;
use annolint_core::quickfix::{QuickFixRegistry, ResolveRequest};
use annolint_core::resolve::TypeSearch;
use annolint_core::settings::DiagnosticsSettings;
use annolint_core::{AnalysisContext, AnnolintError, Result};
use annolint_java::{JavaParser, JavaPlugin, ParsingProvider};
use lsp_types as lsp;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Diagnostics and quick fixes for the documents in a [`DocumentStore`].
///
/// Built once by the host; every method works on a snapshot of the store
/// taken when it is called and keeps nothing between calls.
pub struct AnnolintService {
    settings: DiagnosticsSettings,
    documents: Arc<DocumentStore>,
    plugin: JavaPlugin,
    engine: DiagnosticsEngine,
    registry: QuickFixRegistry,
    provider: Box<dyn SourceModelProvider>,
}

impl AnnolintService {
    pub fn new(settings: DiagnosticsSettings, documents: Arc<DocumentStore>) -> Self {
        Self::with_type_search(settings, documents, Arc::new(annolint_jakarta::known_types()))
    }

    /// Like [`AnnolintService::new`] with the host's own type lookup (for
    /// example a classpath index) backing name resolution.
    pub fn with_type_search(
        settings: DiagnosticsSettings,
        documents: Arc<DocumentStore>,
        search: Arc<dyn TypeSearch>,
    ) -> Self {
        let store = documents.clone();
        let provider = ParsingProvider::new(JavaParser::new(), move |uri: &str| store.text(uri));
        let engine = annolint_jakarta::diagnostics_engine();
        let registry = annolint_jakarta::quick_fix_registry();
        info!(rules = engine.rules().count(), "annolint service ready");
        Self {
            settings,
            documents,
            plugin: JavaPlugin::new(search),
            engine,
            registry,
            provider: Box::new(provider),
        }
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    pub fn settings(&self) -> &DiagnosticsSettings {
        &self.settings
    }

    /// Applies new settings, e.g. from `workspace/didChangeConfiguration`.
    pub fn set_settings(&mut self, settings: DiagnosticsSettings) {
        self.settings = settings;
    }

    fn document(&self, uri: &str) -> Result<Arc<Document>> {
        self.documents
            .get(uri)
            .ok_or_else(|| ApiError::UnknownDocument(uri.to_string()).into())
    }

    /// Diagnostics for each of `uris`, in order. A document that is not open
    /// gets an empty list. Cancellation stops the batch between files.
    pub fn diagnostics(&self, uris: &[lsp::Uri], cancel: &CancellationToken) -> Vec<lsp::PublishDiagnosticsParams> {
        let keys: Vec<String> = uris.iter().map(|u| u.as_str().to_string()).collect();
        let mut snapshots: HashMap<String, Arc<Document>> = HashMap::new();
        let resolver = self.plugin.resolver();

        let files = self.engine.run_batch(
            &keys,
            |uri| {
                let doc = self.document(uri)?;
                let model = self.plugin.parse(uri, &doc.text)?;
                snapshots.insert(uri.to_string(), doc);
                Ok(model)
            },
            resolver.as_ref(),
            &self.settings,
            cancel,
        );

        files
            .into_iter()
            .zip(uris)
            .map(|(file, uri)| match snapshots.get(&file.uri) {
                Some(doc) => lsp::PublishDiagnosticsParams::new(
                    uri.clone(),
                    file.diagnostics
                        .iter()
                        .map(|d| to_lsp_diagnostic(d, doc))
                        .collect(),
                    Some(doc.version),
                ),
                None => lsp::PublishDiagnosticsParams::new(uri.clone(), Vec::new(), None),
            })
            .collect()
    }

    /// Unresolved quick fixes for the diagnostics the client sent with a
    /// `textDocument/codeAction` request.
    pub fn code_actions(
        &self,
        uri: &lsp::Uri,
        range: lsp::Range,
        diagnostics: &[lsp::Diagnostic],
    ) -> Result<Vec<lsp::CodeAction>> {
        let doc = self.document(uri.as_str())?;
        let range = doc
            .line_index
            .text_range_of(&doc.text, crate::convert::api_range(range))
            .ok_or_else(|| ApiError::InvalidArgument(format!("range outside {}", uri.as_str())))?;
        let diagnostics: Vec<Diagnostic> = diagnostics
            .iter()
            .filter_map(|d| from_lsp_diagnostic(d, &doc))
            .collect();
        if diagnostics.is_empty() {
            return Ok(Vec::new());
        }

        let model = self.plugin.parse(uri.as_str(), &doc.text)?;
        let resolver = self.plugin.resolver();
        let ctx = AnalysisContext::new(&model, resolver.as_ref());
        self.registry
            .code_actions(&ctx, range, &diagnostics)
            .iter()
            .map(|stub| to_lsp_action(stub, &doc))
            .collect()
    }

    /// Fills in the edit of an action returned by [`AnnolintService::code_actions`].
    /// An action whose edit cannot be computed comes back unchanged.
    pub fn resolve_code_action(&self, mut action: lsp::CodeAction) -> Result<lsp::CodeAction> {
        let Some(raw) = action.data.clone() else {
            debug!(title = %action.title, "code action without resolve data");
            return Ok(action);
        };
        let data: ResolveData = serde_json::from_value(raw).map_err(ApiError::from)?;
        let Some(doc) = self.documents.get(&data.uri) else {
            debug!(title = %action.title, uri = %data.uri, "quick fix targets a document that is not open");
            return Ok(action);
        };
        let model = self.plugin.parse(&data.uri, &doc.text)?;
        let resolver = self.plugin.resolver();
        let converter = self.plugin.converter();

        let request = ResolveRequest {
            model: &model,
            resolver: resolver.as_ref(),
            provider: Some(self.provider.as_ref()),
            converter: converter.as_ref(),
        };
        match self.registry.resolve(&data, &request) {
            Some(edit) if !edit.is_empty() => {
                action.edit = Some(to_workspace_edit(&edit, &doc)?);
            }
            Some(_) => debug!(title = %action.title, "quick fix has nothing left to change"),
            None => debug!(title = %action.title, "quick fix did not resolve"),
        }
        Ok(action)
    }

    /// Publishes for one document, the shape `textDocument/publishDiagnostics`
    /// wants after an open or change.
    pub fn diagnostics_for(&self, uri: &str) -> Result<lsp::PublishDiagnosticsParams> {
        let uri = parse_uri(uri)?;
        self.diagnostics(std::slice::from_ref(&uri), &CancellationToken::new())
            .pop()
            .ok_or_else(|| AnnolintError::Internal("empty diagnostics batch".to_string()))
    }
}
