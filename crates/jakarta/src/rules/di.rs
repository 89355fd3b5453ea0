use crate::names::{codes, inject};
use annolint_api::{Diagnostic, Severity};
use annolint_core::diagnostics::RuleModule;
use annolint_core::model::{Declaration, DeclarationFold, NodeKind};
use annolint_core::{AnalysisContext, Result};

/// Where `@Inject` may not appear.
pub struct InjectRules;

impl RuleModule for InjectRules {
    fn id(&self) -> &'static str {
        "jakarta.inject"
    }

    fn codes(&self) -> &'static [&'static str] {
        &[
            codes::INJECT_FINAL,
            codes::INJECT_ABSTRACT,
            codes::INJECT_STATIC,
            codes::INJECT_GENERIC,
            codes::INJECT_CONSTRUCTORS,
        ]
    }

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
        let error = |code: &str, decl: &Declaration, message: &str| {
            Diagnostic::new(code, Severity::Error, decl.name_span, message)
        };

        let diagnostics = DeclarationFold::new()
            .on(NodeKind::Field, |decl, out: &mut Vec<Diagnostic>| {
                if ctx.has_annotation(decl, inject::INJECT) && decl.modifiers.is_final() {
                    out.push(error(
                        codes::INJECT_FINAL,
                        decl,
                        "The @Inject annotation must not define a final field.",
                    ));
                }
            })
            .on(NodeKind::Method, |decl, out| {
                let Some(method) = decl.as_method() else {
                    return;
                };
                if method.is_constructor || !ctx.has_annotation(decl, inject::INJECT) {
                    return;
                }
                if decl.modifiers.is_abstract() {
                    out.push(error(
                        codes::INJECT_ABSTRACT,
                        decl,
                        "The @Inject annotation must not define an abstract method.",
                    ));
                }
                if decl.modifiers.is_static() {
                    out.push(error(
                        codes::INJECT_STATIC,
                        decl,
                        "The @Inject annotation must not define a static method.",
                    ));
                }
                if method.is_generic {
                    out.push(error(
                        codes::INJECT_GENERIC,
                        decl,
                        "The @Inject annotation must not define a generic method.",
                    ));
                }
            })
            .on(NodeKind::Type, |decl, out| {
                let Some(ty) = decl.as_type() else {
                    return;
                };
                let injected: Vec<_> = ty
                    .constructors()
                    .filter(|c| ctx.has_annotation(c, inject::INJECT))
                    .collect();
                if injected.len() > 1 {
                    for ctor in injected {
                        out.push(error(
                            codes::INJECT_CONSTRUCTORS,
                            ctor,
                            "The @Inject annotation must not define more than one constructor.",
                        ));
                    }
                }
            })
            .run(ctx.model, Vec::new());
        Ok(diagnostics)
    }
}
