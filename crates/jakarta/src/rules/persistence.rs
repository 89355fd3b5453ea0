use crate::names::{codes, persistence};
use annolint_api::{Diagnostic, Severity};
use annolint_core::diagnostics::RuleModule;
use annolint_core::model::{Annotation, Declaration, DeclarationFold, Modifier, NodeKind, TypeKind};
use annolint_core::{AnalysisContext, Result};

/// Entity class shape and map key annotations.
pub struct PersistenceRules;

fn entity_shape(ctx: &AnalysisContext<'_>, decl: &Declaration, out: &mut Vec<Diagnostic>) {
    let Some(ty) = decl.as_type().filter(|t| t.kind == TypeKind::Class) else {
        return;
    };
    if !ctx.has_annotation(decl, persistence::ENTITY) {
        return;
    }

    let mut constructors = ty.constructors().peekable();
    let has_constructors = constructors.peek().is_some();
    let usable_no_arg = constructors.any(|c| {
        c.as_method().is_some_and(|m| m.parameters.is_empty())
            && (c.modifiers.contains(Modifier::Public) || c.modifiers.contains(Modifier::Protected))
    });
    if has_constructors && !usable_no_arg {
        out.push(Diagnostic::new(
            codes::ENTITY_NO_ARG_CONSTRUCTOR,
            Severity::Error,
            decl.name_span,
            "Classes annotated with @Entity must declare a public or protected constructor with no parameters.",
        ));
    }

    if decl.modifiers.is_final() {
        out.push(Diagnostic::new(
            codes::ENTITY_FINAL_CLASS,
            Severity::Error,
            decl.name_span,
            "A class annotated with @Entity must not be final.",
        ));
    }
    for method in ty.methods().filter(|m| m.modifiers.is_final()) {
        out.push(Diagnostic::new(
            codes::ENTITY_FINAL_METHOD,
            Severity::Error,
            method.name_span,
            "Methods of a class annotated with @Entity must not be final.",
        ));
    }
    for field in ty
        .fields()
        .filter(|f| f.modifiers.is_final() && !f.modifiers.is_static())
    {
        out.push(Diagnostic::new(
            codes::ENTITY_FINAL_FIELD,
            Severity::Error,
            field.name_span,
            "Persistent instance variables of a class annotated with @Entity must not be final.",
        ));
    }
}

fn map_keys(ctx: &AnalysisContext<'_>, decl: &Declaration, out: &mut Vec<Diagnostic>) {
    if ctx.has_annotation(decl, persistence::MAP_KEY) && ctx.has_annotation(decl, persistence::MAP_KEY_CLASS) {
        out.push(Diagnostic::new(
            codes::MAP_KEY_AND_MAP_KEY_CLASS,
            Severity::Error,
            decl.name_span,
            "@MapKeyClass and @MapKey annotations cannot be used on the same field or property.",
        ));
    }

    let mut columns: Vec<&Annotation> = ctx.annotations(decl, persistence::MAP_KEY_JOIN_COLUMN);
    for container in ctx.annotations(decl, persistence::MAP_KEY_JOIN_COLUMNS) {
        columns.extend(container.contained());
    }
    if columns.len() < 2 {
        return;
    }
    for column in columns {
        let complete = persistence::JOIN_COLUMN_ATTRIBUTES
            .iter()
            .all(|attr| column.has_attribute(attr));
        let Some(range) = column.span.filter(|_| !complete) else {
            continue;
        };
        out.push(Diagnostic::new(
            codes::MAP_KEY_JOIN_COLUMN_ATTRIBUTES,
            Severity::Error,
            range,
            "If more than one @MapKeyJoinColumn annotation is applied to a field or property, both the name and the referencedColumnName elements must be specified in each such annotation.",
        ));
    }
}

impl RuleModule for PersistenceRules {
    fn id(&self) -> &'static str {
        "jakarta.persistence"
    }

    fn codes(&self) -> &'static [&'static str] {
        &[
            codes::ENTITY_NO_ARG_CONSTRUCTOR,
            codes::ENTITY_FINAL_CLASS,
            codes::ENTITY_FINAL_METHOD,
            codes::ENTITY_FINAL_FIELD,
            codes::MAP_KEY_AND_MAP_KEY_CLASS,
            codes::MAP_KEY_JOIN_COLUMN_ATTRIBUTES,
        ]
    }

    fn collect(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Diagnostic>> {
        let diagnostics = DeclarationFold::new()
            .on(NodeKind::Type, |decl, out: &mut Vec<Diagnostic>| entity_shape(ctx, decl, out))
            .on(NodeKind::Field, |decl, out| map_keys(ctx, decl, out))
            .on(NodeKind::Method, |decl, out| map_keys(ctx, decl, out))
            .run(ctx.model, Vec::new());
        Ok(diagnostics)
    }
}
