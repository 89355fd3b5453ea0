use crate::names::{codes, servlet};
use annolint_api::{Diagnostic, Severity};
use annolint_core::diagnostics::RuleModule;
use annolint_core::model::{Annotation, Declaration, DeclarationFold, NodeKind, TypeKind};
use annolint_core::{AnalysisContext, Result};

/// `@WebServlet`, `@WebFilter` and `@WebListener` classes.
pub struct ServletRules;

struct UrlAttributes {
    annotation: &'static str,
    /// Any one of these satisfies the annotation.
    alternatives: &'static [&'static str],
    missing: &'static str,
    conflict: &'static str,
}

const WEB_SERVLET: UrlAttributes = UrlAttributes {
    annotation: "WebServlet",
    alternatives: &["value", "urlPatterns"],
    missing: codes::SERVLET_MISSING_ATTRIBUTES,
    conflict: codes::SERVLET_ATTRIBUTE_CONFLICT,
};

const WEB_FILTER: UrlAttributes = UrlAttributes {
    annotation: "WebFilter",
    alternatives: &["value", "urlPatterns", "servletNames"],
    missing: codes::FILTER_MISSING_ATTRIBUTES,
    conflict: codes::FILTER_ATTRIBUTE_CONFLICT,
};

impl UrlAttributes {
    fn check(&self, found: &Annotation, out: &mut Vec<Diagnostic>) {
        let Some(range) = found.span else {
            return;
        };
        let name = self.annotation;
        if found.has_attribute("value") && found.has_attribute("urlPatterns") {
            out.push(Diagnostic::new(
                self.conflict,
                Severity::Error,
                range,
                format!("The @{name} annotation cannot have both 'value' and 'urlPatterns' attributes specified at once."),
            ));
        } else if !self.alternatives.iter().any(|a| found.has_attribute(a)) {
            out.push(Diagnostic::new(
                self.missing,
                Severity::Error,
                range,
                format!("The @{name} annotation must define the attribute 'urlPatterns' or 'value'."),
            ));
        }
    }
}

fn implements_any(ctx: &AnalysisContext<'_>, decl: &Declaration, interfaces: &[&str]) -> bool {
    decl.as_type().is_some_and(|ty| {
        ty.interfaces
            .iter()
            .any(|i| interfaces.iter().any(|q| ctx.type_is(i, q)))
    })
}

fn servlet_class(ctx: &AnalysisContext<'_>, decl: &Declaration, out: &mut Vec<Diagnostic>) {
    let Some(ty) = decl.as_type().filter(|t| t.kind == TypeKind::Class) else {
        return;
    };

    let servlets = ctx.annotations(decl, servlet::WEB_SERVLET);
    if !servlets.is_empty() {
        // an existing superclass may extend HttpServlet further up
        if ty.superclass.is_none() {
            out.push(Diagnostic::new(
                codes::SERVLET_NOT_HTTP_SERVLET,
                Severity::Error,
                decl.name_span,
                "Annotated classes with @WebServlet must extend the HttpServlet class.",
            ));
        }
        for found in servlets {
            WEB_SERVLET.check(found, out);
        }
    }

    let filters = ctx.annotations(decl, servlet::WEB_FILTER);
    if !filters.is_empty() {
        if !implements_any(ctx, decl, &[servlet::FILTER]) {
            out.push(Diagnostic::new(
                codes::FILTER_NOT_FILTER,
                Severity::Error,
                decl.name_span,
                "Annotated classes with @WebFilter must implement the Filter interface.",
            ));
        }
        for found in filters {
            WEB_FILTER.check(found, out);
        }
    }

    if ctx.has_annotation(decl, servlet::WEB_LISTENER) && !implements_any(ctx, decl, servlet::LISTENERS) {
        out.push(Diagnostic::new(
            codes::LISTENER_NOT_LISTENER,
            Severity::Error,
            decl.name_span,
            "Annotated classes with @WebListener must implement one or more of the ServletContextListener, \
             ServletContextAttributeListener, ServletRequestListener, ServletRequestAttributeListener, \
             HttpSessionListener, HttpSessionAttributeListener or HttpSessionIdListener interfaces.",
        ));
    }
}

impl RuleModule for ServletRules {
    fn id(&self) -> &'static str {
        "jakarta.servlet"
    }

    fn codes(&self) -> &'static [&'static str] {
        &[
            codes::SERVLET_NOT_HTTP_SERVLET,
            codes::SERVLET_MISSING_ATTRIBUTES,
            codes::SERVLET_ATTRIBUTE_CONFLICT,
            codes::FILTER_MISSING_ATTRIBUTES,
            codes::FILTER_ATTRIBUTE_CONFLICT,
            codes::FILTER_NOT_FILTER,
            codes::LISTENER_NOT_LISTENER,
        ]
    }

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
        let diagnostics = DeclarationFold::new()
            .on(NodeKind::Type, |decl, out: &mut Vec<Diagnostic>| servlet_class(ctx, decl, out))
            .run(ctx.model, Vec::new());
        Ok(diagnostics)
    }
}
