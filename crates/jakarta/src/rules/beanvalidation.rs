use crate::names::{codes, validation};
use annolint_api::{Diagnostic, Severity};
use annolint_core::diagnostics::RuleModule;
use annolint_core::model::{Declaration, DeclarationFold, NodeKind, TypeRef};
use annolint_core::resolve::simple_name;
use annolint_core::{AnalysisContext, Result};
use serde_json::json;

/// Placement of built-in constraint annotations.
pub struct BeanValidationRules;

fn is_boolean(type_ref: &TypeRef) -> bool {
    matches!(type_ref.base_name(), "boolean" | "Boolean" | "java.lang.Boolean")
}

fn is_string(type_ref: &TypeRef) -> bool {
    matches!(
        type_ref.base_name(),
        "String" | "java.lang.String" | "CharSequence" | "java.lang.CharSequence"
    )
}

fn constraints(ctx: &AnalysisContext<'_>, decl: &Declaration, out: &mut Vec<Diagnostic>) {
    if decl.is_constructor() {
        return;
    }
    for qualified in ctx.matching_annotations(decl, validation::CONSTRAINTS) {
        let Some(range) = ctx.annotation(decl, &qualified).and_then(|a| a.span) else {
            continue;
        };
        let simple = simple_name(&qualified);
        let report = |code: &str, message: String| {
            Diagnostic::new(code, Severity::Error, range, message).with_data(json!([qualified]))
        };

        if decl.modifiers.is_static() {
            out.push(report(
                codes::CONSTRAINT_ON_STATIC,
                "Constraint annotations are not allowed on static fields or methods.".to_string(),
            ));
        }
        let Some(value_type) = decl.value_type() else {
            continue;
        };
        if validation::BOOLEAN_ONLY.contains(&qualified.as_str()) && !is_boolean(value_type) {
            out.push(report(
                codes::CONSTRAINT_NOT_BOOLEAN,
                format!("The @{simple} annotation can only be used on boolean and Boolean type fields or methods."),
            ));
        }
        if validation::STRING_ONLY.contains(&qualified.as_str()) && !is_string(value_type) {
            out.push(report(
                codes::CONSTRAINT_NOT_STRING,
                format!("The @{simple} annotation can only be used on String and CharSequence type fields or methods."),
            ));
        }
    }
}

impl RuleModule for BeanValidationRules {
    fn id(&self) -> &'static str {
        "jakarta.validation"
    }

    fn codes(&self) -> &'static [&'static str] {
        &[
            codes::CONSTRAINT_ON_STATIC,
            codes::CONSTRAINT_NOT_BOOLEAN,
            codes::CONSTRAINT_NOT_STRING,
        ]
    }

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
        let diagnostics = DeclarationFold::new()
            .on(NodeKind::Field, |decl, out: &mut Vec<Diagnostic>| constraints(ctx, decl, out))
            .on(NodeKind::Method, |decl, out| constraints(ctx, decl, out))
            .run(ctx.model, Vec::new());
        Ok(diagnostics)
    }
}
