//! Translation between the engine's byte-offset values and `lsp_types`.

use crate::documents::Document;
use annolint_api::{ApiError, CodeActionStub, Diagnostic, Position, Range, ResolvedEdit, Severity};
use annolint_core::Result;
use lsp_types as lsp;
use std::collections::HashMap;
use tracing::debug;

pub fn lsp_range(range: Range) -> lsp::Range {
    lsp::Range::new(
        lsp::Position::new(range.start.line, range.start.character),
        lsp::Position::new(range.end.line, range.end.character),
    )
}

pub fn api_range(range: lsp::Range) -> Range {
    Range::new(
        Position::new(range.start.line, range.start.character),
        Position::new(range.end.line, range.end.character),
    )
}

pub fn lsp_severity(severity: Severity) -> lsp::DiagnosticSeverity {
    match severity {
        Severity::Error => lsp::DiagnosticSeverity::ERROR,
        Severity::Warning => lsp::DiagnosticSeverity::WARNING,
        Severity::Information => lsp::DiagnosticSeverity::INFORMATION,
        Severity::Hint => lsp::DiagnosticSeverity::HINT,
    }
}

pub fn api_severity(severity: Option<lsp::DiagnosticSeverity>) -> Severity {
    match severity {
        Some(lsp::DiagnosticSeverity::WARNING) => Severity::Warning,
        Some(lsp::DiagnosticSeverity::INFORMATION) => Severity::Information,
        Some(lsp::DiagnosticSeverity::HINT) => Severity::Hint,
        _ => Severity::Error,
    }
}

pub fn parse_uri(uri: &str) -> Result<lsp::Uri> {
    uri.parse::<lsp::Uri>()
        .map_err(|e| ApiError::InvalidArgument(format!("{uri}: {e}")).into())
}

pub fn to_lsp_diagnostic(diagnostic: &Diagnostic, doc: &Document) -> lsp::Diagnostic {
    let range = doc.line_index.range_of(&doc.text, diagnostic.range);
    lsp::Diagnostic {
        range: lsp_range(range),
        severity: Some(lsp_severity(diagnostic.severity)),
        code: Some(lsp::NumberOrString::String(diagnostic.code.clone())),
        source: Some(diagnostic.source.clone()),
        message: diagnostic.message.clone(),
        data: diagnostic.data.clone(),
        ..Default::default()
    }
}

/// A diagnostic echoed back by the client. Numeric or missing codes were not
/// produced here and map to `None`.
pub fn from_lsp_diagnostic(diagnostic: &lsp::Diagnostic, doc: &Document) -> Option<Diagnostic> {
    let Some(lsp::NumberOrString::String(code)) = &diagnostic.code else {
        return None;
    };
    let range = doc
        .line_index
        .text_range_of(&doc.text, api_range(diagnostic.range))?;
    let mut out = Diagnostic::new(
        code.clone(),
        api_severity(diagnostic.severity),
        range,
        diagnostic.message.clone(),
    );
    out.source = diagnostic.source.clone().unwrap_or_default();
    out.data = diagnostic.data.clone();
    Some(out)
}

/// An unresolved code action; the resolve data rides in `data`.
pub fn to_lsp_action(stub: &CodeActionStub, doc: &Document) -> Result<lsp::CodeAction> {
    Ok(lsp::CodeAction {
        title: stub.title.clone(),
        kind: Some(lsp::CodeActionKind::QUICKFIX),
        diagnostics: Some(
            stub.diagnostics
                .iter()
                .map(|d| to_lsp_diagnostic(d, doc))
                .collect(),
        ),
        data: Some(serde_json::to_value(&stub.data)?),
        ..Default::default()
    })
}

/// Edits for `doc`'s URI as a workspace edit. Edits for other files are
/// dropped; every quick fix here touches only the file it was offered in.
pub fn to_workspace_edit(edit: &ResolvedEdit, doc: &Document) -> Result<lsp::WorkspaceEdit> {
    for other in edit.changes.keys().filter(|uri| **uri != doc.uri) {
        debug!(uri = %other, "dropping edits for a file other than the resolved one");
    }
    let edits = edit
        .edits_for(&doc.uri)
        .iter()
        .map(|e| {
            let range = doc.line_index.range_of(&doc.text, e.range);
            lsp::TextEdit::new(lsp_range(range), e.new_text.clone())
        })
        .collect();

    let mut changes = HashMap::new();
    changes.insert(parse_uri(&doc.uri)?, edits);
    Ok(lsp::WorkspaceEdit {
        changes: Some(changes),
        ..Default::default()
    })
}
