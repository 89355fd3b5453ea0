use crate::names::{annotation, codes};
use annolint_api::Diagnostic;
use annolint_core::diagnostics::RuleModule;
use annolint_core::diagnostics::shapes::{LifecycleCodes, lifecycle_method_shape, missing_attributes};
use annolint_core::model::{Declaration, DeclarationFold, NodeKind};
use annolint_core::{AnalysisContext, Result};

const RESOURCE_ATTRIBUTES: &[&str] = &["name", "type"];

/// `@Resource` attributes and the shape of `@PostConstruct`/`@PreDestroy`
/// methods.
pub struct AnnotationRules;

impl RuleModule for AnnotationRules {
    fn id(&self) -> &'static str {
        "jakarta.annotation"
    }

    fn codes(&self) -> &'static [&'static str] {
        &[
            codes::MISSING_RESOURCE_NAME,
            codes::MISSING_RESOURCE_TYPE,
            codes::POST_CONSTRUCT_PARAMS,
            codes::POST_CONSTRUCT_RETURN_TYPE,
            codes::POST_CONSTRUCT_EXCEPTION,
            codes::POST_CONSTRUCT_STATIC,
            codes::PRE_DESTROY_PARAMS,
            codes::PRE_DESTROY_RETURN_TYPE,
            codes::PRE_DESTROY_EXCEPTION,
            codes::PRE_DESTROY_STATIC,
        ]
    }

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
        let post_construct = LifecycleCodes::new("PostConstruct");
        let pre_destroy = LifecycleCodes::new("PreDestroy");

        let resource = |decl: &Declaration, out: &mut Vec<Diagnostic>| {
            for found in ctx.annotations(decl, annotation::RESOURCE) {
                out.extend(missing_attributes(found, RESOURCE_ATTRIBUTES));
            }
        };

        let diagnostics = DeclarationFold::new()
            .on(NodeKind::Type, resource)
            .on(NodeKind::Field, resource)
            .on(NodeKind::Method, |decl, out| {
                resource(decl, out);
                if ctx.has_annotation(decl, annotation::POST_CONSTRUCT) {
                    out.extend(lifecycle_method_shape(decl, "PostConstruct", &post_construct));
                }
                if ctx.has_annotation(decl, annotation::PRE_DESTROY) {
                    out.extend(lifecycle_method_shape(decl, "PreDestroy", &pre_destroy));
                }
            })
            .run(ctx.model, Vec::new());
        Ok(diagnostics)
    }
}
