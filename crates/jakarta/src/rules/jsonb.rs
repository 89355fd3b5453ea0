use crate::names::{codes, jsonb};
use annolint_api::{Diagnostic, Severity};
use annolint_core::diagnostics::RuleModule;
use annolint_core::model::{DeclarationFold, NodeKind};
use annolint_core::{AnalysisContext, Result};
use serde_json::json;

/// `@JsonbCreator` uniqueness and `@JsonbTransient` exclusivity.
pub struct JsonbRules;

impl RuleModule for JsonbRules {
    fn id(&self) -> &'static str {
        "jakarta.jsonb"
    }

    fn codes(&self) -> &'static [&'static str] {
        &[codes::JSONB_CREATORS, codes::JSONB_TRANSIENT_MIXED]
    }

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
        let diagnostics = DeclarationFold::new()
            .on(NodeKind::Type, |decl, out: &mut Vec<Diagnostic>| {
                let Some(ty) = decl.as_type() else {
                    return;
                };
                let creators: Vec<_> = ty
                    .members
                    .iter()
                    .filter(|m| m.as_method().is_some() && ctx.has_annotation(m, jsonb::CREATOR))
                    .collect();
                if creators.len() < 2 {
                    return;
                }
                for creator in creators {
                    out.push(Diagnostic::new(
                        codes::JSONB_CREATORS,
                        Severity::Error,
                        creator.name_span,
                        "Only one constructor or static factory method can be annotated with @JsonbCreator in a given class.",
                    ));
                }
            })
            .on(NodeKind::Field, |decl, out| {
                if !ctx.has_annotation(decl, jsonb::TRANSIENT) {
                    return;
                }
                let mut others = ctx.annotations_in_package(decl, jsonb::PACKAGE);
                others.retain(|q| q != jsonb::TRANSIENT);
                others.dedup();
                if others.is_empty() {
                    return;
                }
                out.push(
                    Diagnostic::new(
                        codes::JSONB_TRANSIENT_MIXED,
                        Severity::Error,
                        decl.name_span,
                        "When a class field is annotated with @JsonbTransient, this field, getter or setter must not be annotated with other JSON Binding annotations.",
                    )
                    .with_data(json!(others)),
                );
            })
            .run(ctx.model, Vec::new());
        Ok(diagnostics)
    }
}
