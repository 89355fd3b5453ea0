use annolint_runtime::{AnnolintService, DiagnosticsSettings, DocumentStore, build_default_service};
use lsp_types as lsp;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

const URI: &str = "file:///src/com/example/Inventory.java";

const SOURCE: &str = r#"package com.example;

import jakarta.annotation.Resource;
import javax.sql.DataSource;

public class Inventory {
    @Resource
    private DataSource ds;
}
"#;

fn uri(s: &str) -> lsp::Uri {
    s.parse().unwrap()
}

fn code(d: &lsp::Diagnostic) -> &str {
    match &d.code {
        Some(lsp::NumberOrString::String(c)) => c,
        _ => "",
    }
}

/// Applies a workspace edit's changes for `target` to `text`.
fn apply(text: &str, edit: &lsp::WorkspaceEdit, target: &lsp::Uri) -> String {
    let changes = edit.changes.as_ref().unwrap();
    let doc = annolint_runtime::Document::new(target.as_str(), text, 0);
    let mut edits: Vec<(usize, usize, String)> = changes[target]
        .iter()
        .map(|e| {
            let start = doc
                .line_index
                .offset_of(text, annolint_api::Position::new(e.range.start.line, e.range.start.character))
                .unwrap();
            let end = doc
                .line_index
                .offset_of(text, annolint_api::Position::new(e.range.end.line, e.range.end.character))
                .unwrap();
            (start, end, e.new_text.clone())
        })
        .collect();
    edits.sort();
    let mut out = String::new();
    let mut cursor = 0;
    for (start, end, new_text) in edits {
        out.push_str(&text[cursor..start]);
        out.push_str(&new_text);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[test]
fn diagnostics_speak_lsp_positions() {
    let (documents, service) = build_default_service();
    documents.open(URI, SOURCE, 7);

    let published = service.diagnostics(&[uri(URI)], &CancellationToken::new());
    assert_eq!(published.len(), 1);
    let file = &published[0];
    assert_eq!(file.uri, uri(URI));
    assert_eq!(file.version, Some(7));

    let codes: Vec<&str> = file.diagnostics.iter().map(code).collect();
    assert_eq!(codes, vec!["MissingResourceNameAttribute", "MissingResourceTypeAttribute"]);
    let first = &file.diagnostics[0];
    assert_eq!(first.range.start, lsp::Position::new(6, 4));
    assert_eq!(first.range.end, lsp::Position::new(6, 13));
    assert_eq!(first.severity, Some(lsp::DiagnosticSeverity::ERROR));
    assert_eq!(first.source.as_deref(), Some("jakarta"));
}

#[test]
fn unknown_and_cancelled_batches() {
    let (documents, service) = build_default_service();
    documents.open(URI, SOURCE, 1);

    let published = service.diagnostics(
        &[uri("file:///src/Missing.java"), uri(URI)],
        &CancellationToken::new(),
    );
    assert_eq!(published.len(), 2);
    assert!(published[0].diagnostics.is_empty());
    assert_eq!(published[0].version, None);
    assert_eq!(published[1].diagnostics.len(), 2);

    let cancel = CancellationToken::new();
    cancel.cancel();
    assert!(service.diagnostics(&[uri(URI)], &cancel).is_empty());
}

#[test]
fn code_actions_resolve_into_edits() {
    let (documents, service) = build_default_service();
    documents.open(URI, SOURCE, 1);
    let target = uri(URI);

    let diagnostics = service.diagnostics_for(URI).unwrap().diagnostics;
    let whole = lsp::Range::new(lsp::Position::new(0, 0), lsp::Position::new(9, 0));
    let actions = service.code_actions(&target, whole, &diagnostics).unwrap();
    let titles: Vec<&str> = actions.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Insert the attribute 'name' to @Resource",
            "Insert the attribute 'type' to @Resource",
        ]
    );
    assert!(actions.iter().all(|a| a.edit.is_none() && a.data.is_some()));
    assert_eq!(actions[0].kind, Some(lsp::CodeActionKind::QUICKFIX));

    let resolved = service.resolve_code_action(actions[0].clone()).unwrap();
    let edit = resolved.edit.expect("resolved action carries an edit");
    let updated = apply(SOURCE, &edit, &target);
    assert!(updated.contains("    @Resource(name = \"\")\n    private DataSource ds;"));

    documents.change(URI, updated.clone(), 2);
    let diagnostics = service.diagnostics_for(URI).unwrap().diagnostics;
    let codes: Vec<&str> = diagnostics.iter().map(code).collect();
    assert_eq!(codes, vec!["MissingResourceTypeAttribute"]);

    let actions = service.code_actions(&target, whole, &diagnostics).unwrap();
    assert_eq!(actions.len(), 1);
    let resolved = service.resolve_code_action(actions[0].clone()).unwrap();
    let updated = apply(&updated, &resolved.edit.unwrap(), &target);
    assert!(updated.contains("    @Resource(name = \"\", type = \"\")\n    private DataSource ds;"));
}

#[test]
fn cursor_range_selects_diagnostics() {
    let source = "import jakarta.inject.Inject;\n\npublic class A {\n    @Inject\n    final Object a = null;\n\n    @Inject\n    static void b() {}\n}\n";
    let (documents, service) = build_default_service();
    documents.open(URI, source, 1);
    let diagnostics = service.diagnostics_for(URI).unwrap().diagnostics;
    assert_eq!(diagnostics.len(), 2);

    let cursor = lsp::Position::new(7, 17);
    let actions = service
        .code_actions(&uri(URI), lsp::Range::new(cursor, cursor), &diagnostics)
        .unwrap();
    let titles: Vec<&str> = actions.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Remove the 'static' modifier", "Remove @Inject"]);
}

#[test]
fn actions_without_data_or_target_come_back_unchanged() {
    let (documents, service) = build_default_service();
    documents.open(URI, SOURCE, 1);
    let target = uri(URI);

    let plain = lsp::CodeAction {
        title: "Organize imports".to_string(),
        ..Default::default()
    };
    assert_eq!(service.resolve_code_action(plain.clone()).unwrap(), plain);

    let diagnostics = service.diagnostics_for(URI).unwrap().diagnostics;
    let whole = lsp::Range::new(lsp::Position::new(0, 0), lsp::Position::new(9, 0));
    let action = service.code_actions(&target, whole, &diagnostics).unwrap().remove(0);

    // the field is gone by the time the user picks the fix
    documents.change(URI, "package com.example;\n\npublic class Inventory {\n}\n", 2);
    let resolved = service.resolve_code_action(action.clone()).unwrap();
    assert!(resolved.edit.is_none());

    documents.close(URI);
    let unknown = service.code_actions(&target, whole, &diagnostics);
    assert!(unknown.is_err());
    let resolved = service.resolve_code_action(action.clone()).unwrap();
    assert_eq!(resolved, action);
}

#[test]
fn settings_are_the_callers() {
    let documents = Arc::new(DocumentStore::new());
    documents.open(URI, SOURCE, 1);
    let settings = DiagnosticsSettings::from_json(&serde_json::json!({
        "disabledCodes": ["MissingResourceTypeAttribute"],
        "source": "annolint"
    }))
    .unwrap();
    let mut service = AnnolintService::new(settings, documents);

    let diagnostics = service.diagnostics_for(URI).unwrap().diagnostics;
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(code(&diagnostics[0]), "MissingResourceNameAttribute");
    assert_eq!(diagnostics[0].source.as_deref(), Some("annolint"));

    service.set_settings(DiagnosticsSettings::default());
    assert_eq!(service.diagnostics_for(URI).unwrap().diagnostics.len(), 2);
}
