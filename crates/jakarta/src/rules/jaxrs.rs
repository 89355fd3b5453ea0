use crate::names::{codes, jaxrs};
use annolint_api::{Diagnostic, Severity};
use annolint_core::diagnostics::RuleModule;
use annolint_core::diagnostics::shapes::{ConstructorVerdict, arbitrate_constructors, require_public};
use annolint_core::model::{DeclarationFold, NodeKind, TypeKind};
use annolint_core::{AnalysisContext, Result};
use serde_json::json;

/// Resource methods: visibility and the single entity parameter.
pub struct ResourceMethodRules;

impl RuleModule for ResourceMethodRules {
    fn id(&self) -> &'static str {
        "jakarta.jaxrs.methods"
    }

    fn codes(&self) -> &'static [&'static str] {
        &[codes::NON_PUBLIC_RESOURCE_METHOD, codes::MULTIPLE_ENTITY_PARAMS]
    }

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
        let diagnostics = DeclarationFold::new()
            .on(NodeKind::Method, |decl, out: &mut Vec<Diagnostic>| {
                let Some(method) = decl.as_method() else {
                    return;
                };
                if method.is_constructor || !ctx.has_any_annotation(decl, jaxrs::HTTP_METHODS) {
                    return;
                }
                out.extend(require_public(
                    decl,
                    codes::NON_PUBLIC_RESOURCE_METHOD,
                    "Only public methods can be exposed as resource methods.",
                ));

                let entities: Vec<&str> = method
                    .parameters
                    .iter()
                    .filter(|p| !ctx.has_any_annotation(p, jaxrs::NON_ENTITY_PARAMS))
                    .map(|p| p.name.as_str())
                    .collect();
                if entities.len() > 1 {
                    out.push(
                        Diagnostic::new(
                            codes::MULTIPLE_ENTITY_PARAMS,
                            Severity::Error,
                            decl.name_span,
                            "Resource methods cannot have more than one entity parameter.",
                        )
                        .with_data(json!(entities)),
                    );
                }
            })
            .run(ctx.model, Vec::new());
        Ok(diagnostics)
    }
}

/// Constructor selection of root resources (`@Path`) and providers
/// (`@Provider`). Providers only need a public constructor.
pub struct ResourceConstructorRules;

impl RuleModule for ResourceConstructorRules {
    fn id(&self) -> &'static str {
        "jakarta.jaxrs.constructors"
    }

    fn codes(&self) -> &'static [&'static str] {
        &[
            codes::NO_PUBLIC_CONSTRUCTOR,
            codes::UNUSED_CONSTRUCTOR,
            codes::AMBIGUOUS_CONSTRUCTORS,
        ]
    }

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
        let diagnostics = DeclarationFold::new()
            .on(NodeKind::Type, |decl, out: &mut Vec<Diagnostic>| {
                let Some(ty) = decl.as_type().filter(|t| t.kind == TypeKind::Class) else {
                    return;
                };
                let root = ctx.has_annotation(decl, jaxrs::PATH);
                if !root && !ctx.has_annotation(decl, jaxrs::PROVIDER) {
                    return;
                }

                for (ctor, verdict) in arbitrate_constructors(ty.constructors(), root) {
                    let diagnostic = match verdict {
                        ConstructorVerdict::NoPublic => Diagnostic::new(
                            codes::NO_PUBLIC_CONSTRUCTOR,
                            Severity::Error,
                            ctor.name_span,
                            "Root resource and provider classes must have a public constructor.",
                        ),
                        ConstructorVerdict::Unused => Diagnostic::new(
                            codes::UNUSED_CONSTRUCTOR,
                            Severity::Warning,
                            ctor.name_span,
                            "This constructor is unused, as root resource classes will only use the constructor with the most parameters.",
                        ),
                        ConstructorVerdict::Ambiguous => Diagnostic::new(
                            codes::AMBIGUOUS_CONSTRUCTORS,
                            Severity::Warning,
                            ctor.name_span,
                            "Multiple constructors have the same number of parameters, it might be ambiguous which constructor is used.",
                        ),
                    };
                    out.push(diagnostic);
                }
            })
            .run(ctx.model, Vec::new());
        Ok(diagnostics)
    }
}
