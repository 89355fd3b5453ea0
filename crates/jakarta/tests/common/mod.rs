#![allow(dead_code)]

use annolint_api::{CodeActionStub, Diagnostic, TextRange, apply_edits};
use annolint_core::diagnostics::DiagnosticsEngine;
use annolint_core::model::DeclarationModel;
use annolint_core::quickfix::{QuickFixRegistry, ResolveRequest};
use annolint_core::settings::DiagnosticsSettings;
use annolint_core::AnalysisContext;
use annolint_jakarta::{diagnostics_engine, known_types, quick_fix_registry};
use annolint_java::{JavaEditConverter, JavaParser, JavaResolver};
use std::sync::Arc;

pub const URI: &str = "file:///src/com/example/Fixture.java";

pub struct Harness {
    pub parser: JavaParser,
    pub resolver: JavaResolver,
    pub engine: DiagnosticsEngine,
    pub registry: QuickFixRegistry,
    pub converter: JavaEditConverter,
    pub settings: DiagnosticsSettings,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            parser: JavaParser::new(),
            resolver: JavaResolver::new(Arc::new(known_types())),
            engine: diagnostics_engine(),
            registry: quick_fix_registry(),
            converter: JavaEditConverter::new(),
            settings: DiagnosticsSettings::default(),
        }
    }

    pub fn model(&self, source: &str) -> DeclarationModel {
        self.parser.parse(URI, source).unwrap()
    }

    pub fn diagnostics(&self, source: &str) -> Vec<Diagnostic> {
        let model = self.model(source);
        let ctx = AnalysisContext::new(&model, &self.resolver);
        self.engine.run(&ctx, &self.settings)
    }

    pub fn codes(&self, source: &str) -> Vec<String> {
        self.diagnostics(source).into_iter().map(|d| d.code).collect()
    }

    /// Stubs offered for every diagnostic with `code`.
    pub fn actions(&self, source: &str, code: &str) -> Vec<CodeActionStub> {
        let model = self.model(source);
        let ctx = AnalysisContext::new(&model, &self.resolver);
        let diagnostics: Vec<Diagnostic> = self
            .engine
            .run(&ctx, &self.settings)
            .into_iter()
            .filter(|d| d.code == code)
            .collect();
        self.registry
            .code_actions(&ctx, TextRange::new(0, source.len()), &diagnostics)
    }

    pub fn titles(&self, source: &str, code: &str) -> Vec<String> {
        self.actions(source, code).into_iter().map(|a| a.title).collect()
    }

    /// Resolves `stub` against `source` and returns the edited text.
    pub fn apply(&self, source: &str, stub: &CodeActionStub) -> String {
        let model = self.model(source);
        let request = ResolveRequest {
            model: &model,
            resolver: &self.resolver,
            provider: None,
            converter: &self.converter,
        };
        let edit = self
            .registry
            .resolve(&stub.data, &request)
            .unwrap_or_else(|| panic!("`{}` did not resolve", stub.title));
        apply_edits(source, edit.edits_for(URI))
    }

    /// Applies the action titled `title` offered for `code`.
    pub fn fix(&self, source: &str, code: &str, title: &str) -> String {
        let actions = self.actions(source, code);
        let stub = actions
            .iter()
            .find(|a| a.title == title)
            .unwrap_or_else(|| {
                let titles: Vec<&str> = actions.iter().map(|a| a.title.as_str()).collect();
                panic!("no action `{title}` for {code}, offered: {titles:?}")
            });
        self.apply(source, stub)
    }
}
