//! Rule modules and the engine that runs them over one file or a batch.

pub mod shapes;

use crate::context::AnalysisContext;
use crate::error::{AnnolintError, Result, panic_message};
use crate::model::DeclarationModel;
use crate::resolve::TypeNameResolver;
use crate::settings::DiagnosticsSettings;
use annolint_api::{Diagnostic, FileDiagnostics};
use std::panic::{AssertUnwindSafe, catch_unwind};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

/// One concern's checks. Pure over the model it is handed.
pub trait RuleModule: Send + Sync {
    /// Stable identifier used in logs.
    fn id(&self) -> &'static str;

    /// Every code this module can report.
    fn codes(&self) -> &'static [&'static str];

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>>;
}

#[derive(Default)]
pub struct DiagnosticsEngine {
    rules: Vec<Box<dyn RuleModule>>,
}

impl DiagnosticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rule: Box<dyn RuleModule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn RuleModule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Runs every registered rule over one file, in registration order.
    ///
    /// A rule that fails or panics is logged and contributes nothing; the
    /// remaining rules still run.
    pub fn run(&self, ctx: &AnalysisContext<'_>, settings: &DiagnosticsSettings) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for rule in &self.rules {
            if !rule.codes().iter().any(|code| settings.is_enabled(code)) {
                debug!(rule = rule.id(), "all codes disabled, skipping");
                continue;
            }

            let outcome = catch_unwind(AssertUnwindSafe(|| rule.collect(ctx)));
            let diagnostics = match outcome {
                Ok(Ok(diagnostics)) => diagnostics,
                Ok(Err(e)) => {
                    warn!(rule = rule.id(), uri = %ctx.model.uri, "rule failed: {}", e);
                    continue;
                }
                Err(payload) => {
                    let e = AnnolintError::Rule {
                        rule: rule.id().to_string(),
                        message: panic_message(payload.as_ref()),
                    };
                    error!(uri = %ctx.model.uri, "{}", e);
                    continue;
                }
            };

            out.extend(
                diagnostics
                    .into_iter()
                    .filter(|d| settings.is_enabled(&d.code))
                    .map(|mut d| {
                        d.severity = settings.severity_for(&d.code, d.severity);
                        if d.source.is_empty() {
                            d.source = settings.source.clone();
                        }
                        d
                    }),
            );
        }
        out
    }

    /// Runs over several files in order. Cancellation is honoured between
    /// files only; a file already started always completes.
    pub fn run_batch<F>(
        &self,
        uris: &[String],
        mut load: F,
        resolver: &dyn TypeNameResolver,
        settings: &DiagnosticsSettings,
        cancel: &CancellationToken,
    ) -> Vec<FileDiagnostics>
    where
        F: FnMut(&str) -> Result<DeclarationModel>,
    {
        let mut out = Vec::with_capacity(uris.len());
        for uri in uris {
            if cancel.is_cancelled() {
                debug!(done = out.len(), total = uris.len(), "diagnostics batch cancelled");
                break;
            }
            let diagnostics = match load(uri) {
                Ok(model) => self.run(&AnalysisContext::new(&model, resolver), settings),
                Err(e) => {
                    warn!(uri = %uri, "cannot load file: {}", e);
                    Vec::new()
                }
            };
            out.push(FileDiagnostics {
                uri: uri.clone(),
                diagnostics,
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{self, ImportsOnly};
    use annolint_api::{Severity, TextRange};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed(&'static str);

    impl RuleModule for Fixed {
        fn id(&self) -> &'static str {
            "fixed"
        }

        fn codes(&self) -> &'static [&'static str] {
            &["First", "Second"]
        }

        fn collect(&self, _ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
            Ok(vec![
                Diagnostic::new("First", Severity::Error, TextRange::new(0, 1), self.0),
                Diagnostic::new("Second", Severity::Error, TextRange::new(0, 1), self.0),
            ])
        }
    }

    struct Failing;

    impl RuleModule for Failing {
        fn id(&self) -> &'static str {
            "failing"
        }

        fn codes(&self) -> &'static [&'static str] {
            &["Boom"]
        }

        fn collect(&self, _ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
            Err(AnnolintError::Internal("no".into()))
        }
    }

    struct Panicking;

    impl RuleModule for Panicking {
        fn id(&self) -> &'static str {
            "panicking"
        }

        fn codes(&self) -> &'static [&'static str] {
            &["Panic"]
        }

        fn collect(&self, _ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
            panic!("rule bug")
        }
    }

    fn engine() -> DiagnosticsEngine {
        let mut engine = DiagnosticsEngine::new();
        engine.register(Box::new(Failing));
        engine.register(Box::new(Panicking));
        engine.register(Box::new(Fixed("ok")));
        engine
    }

    #[test]
    fn failing_rules_do_not_hide_others() {
        let model = fixture::model(vec![], &[]);
        let ctx = AnalysisContext::new(&model, &ImportsOnly);
        let found = engine().run(&ctx, &DiagnosticsSettings::default());
        let codes: Vec<&str> = found.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["First", "Second"]);
        assert!(found.iter().all(|d| d.source == "jakarta"));
    }

    #[test]
    fn settings_filter_and_override() {
        let model = fixture::model(vec![], &[]);
        let ctx = AnalysisContext::new(&model, &ImportsOnly);
        let mut settings = DiagnosticsSettings::default();
        settings.disabled_codes.push("First".into());
        settings
            .severity_overrides
            .insert("Second".into(), Severity::Hint);

        let found = engine().run(&ctx, &settings);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "Second");
        assert_eq!(found[0].severity, Severity::Hint);
    }

    #[test]
    fn batch_stops_between_files_when_cancelled() {
        let cancel = CancellationToken::new();
        let loads = AtomicUsize::new(0);
        let uris: Vec<String> = ["a", "b", "c"].iter().map(|u| u.to_string()).collect();

        let results = engine().run_batch(
            &uris,
            |uri| {
                if loads.fetch_add(1, Ordering::SeqCst) == 1 {
                    cancel.cancel();
                }
                Ok(DeclarationModel::new(uri, ""))
            },
            &ImportsOnly,
            &DiagnosticsSettings::default(),
            &cancel,
        );

        assert_eq!(results.len(), 2);
        assert_eq!(results[1].uri, "b");
        assert_eq!(results[1].diagnostics.len(), 2);
    }

    #[test]
    fn unreadable_file_yields_empty_entry() {
        let uris = vec!["gone".to_string(), "here".to_string()];
        let results = engine().run_batch(
            &uris,
            |uri| {
                if uri == "gone" {
                    Err(AnnolintError::Parsing("missing".into()))
                } else {
                    Ok(DeclarationModel::new(uri, ""))
                }
            },
            &ImportsOnly,
            &DiagnosticsSettings::default(),
            &CancellationToken::new(),
        );
        assert!(results[0].diagnostics.is_empty());
        assert_eq!(results[1].diagnostics.len(), 2);
    }
}
