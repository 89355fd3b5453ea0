use crate::fixes::mentions;
use crate::names::{cdi, codes, inject};
use annolint_api::{Diagnostic, Severity};
use annolint_core::diagnostics::RuleModule;
use annolint_core::diagnostics::shapes::{Cardinality, mutual_exclusion};
use annolint_core::model::{Declaration, DeclarationFold, NodeKind, TypeKind};
use annolint_core::{AnalysisContext, Result};
use serde_json::json;

/// Scope declarations of beans and producers, producer/injection conflicts.
pub struct CdiRules;

fn too_many_scopes(
    ctx: &AnalysisContext<'_>,
    decl: &Declaration,
    code: &str,
    what: &str,
) -> Option<Diagnostic> {
    let scopes = mutual_exclusion(ctx, decl, cdi::SCOPES, Cardinality::AtMostOne)?;
    Some(
        Diagnostic::new(
            code,
            Severity::Error,
            decl.name_span,
            format!("Scope type annotations must be specified by a {what} at most once."),
        )
        .with_data(json!(scopes)),
    )
}

fn produces_and_injects(ctx: &AnalysisContext<'_>, decl: &Declaration) -> Option<Diagnostic> {
    if ctx.has_annotation(decl, cdi::PRODUCES) && ctx.has_annotation(decl, inject::INJECT) {
        Some(Diagnostic::new(
            codes::PRODUCES_AND_INJECT,
            Severity::Error,
            decl.name_span,
            "The @Produces and @Inject annotations must not be used on the same field or property.",
        ))
    } else {
        None
    }
}

impl RuleModule for CdiRules {
    fn id(&self) -> &'static str {
        "jakarta.cdi"
    }

    fn codes(&self) -> &'static [&'static str] {
        &[
            codes::SCOPES_ON_MANAGED_BEAN,
            codes::SCOPES_ON_PRODUCER_FIELD,
            codes::SCOPES_ON_PRODUCER_METHOD,
            codes::PRODUCES_AND_INJECT,
            codes::INVALID_INJECT_PARAM,
        ]
    }

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
        let diagnostics = DeclarationFold::new()
            .on(NodeKind::Type, |decl, out: &mut Vec<Diagnostic>| {
                if decl.as_type().is_some_and(|t| t.kind == TypeKind::Class) {
                    out.extend(too_many_scopes(
                        ctx,
                        decl,
                        codes::SCOPES_ON_MANAGED_BEAN,
                        "managed bean class",
                    ));
                }
            })
            .on(NodeKind::Field, |decl, out| {
                if ctx.has_annotation(decl, cdi::PRODUCES) {
                    out.extend(too_many_scopes(
                        ctx,
                        decl,
                        codes::SCOPES_ON_PRODUCER_FIELD,
                        "producer field",
                    ));
                }
                out.extend(produces_and_injects(ctx, decl));
            })
            .on(NodeKind::Method, |decl, out| {
                if ctx.has_annotation(decl, cdi::PRODUCES) {
                    out.extend(too_many_scopes(
                        ctx,
                        decl,
                        codes::SCOPES_ON_PRODUCER_METHOD,
                        "producer method",
                    ));
                }
                out.extend(produces_and_injects(ctx, decl));

                if !ctx.has_annotation(decl, inject::INJECT) {
                    return;
                }
                for parameter in decl.children() {
                    let invalid = ctx.matching_annotations(parameter, cdi::INVALID_INJECT_PARAMS);
                    if invalid.is_empty() {
                        continue;
                    }
                    out.push(
                        Diagnostic::new(
                            codes::INVALID_INJECT_PARAM,
                            Severity::Error,
                            parameter.name_span,
                            format!(
                                "A bean constructor or a method annotated with @Inject cannot have parameters annotated with {}.",
                                mentions(&invalid)
                            ),
                        )
                        .with_data(json!(invalid)),
                    );
                }
            })
            .run(ctx.model, Vec::new());
        Ok(diagnostics)
    }
}
