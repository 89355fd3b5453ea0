//! Quick-fix modules. Each one is a small parameterized participant; the
//! instances the rule set registers are listed in [`modules`].

mod annotations;
mod members;
mod supertypes;

pub use annotations::{Flagged, InsertAttributes, RemoveAnnotations, RemoveAttribute, RemoveFlagged};
pub use members::{ChangeReturnType, InsertConstructor, ModifierFix, RemoveParameters};
pub use supertypes::{ExtendClass, ImplementInterface};

use crate::names::{annotation, cdi, codes, inject, jsonb, persistence, servlet};
use annolint_api::{CodeActionStub, Diagnostic, ResolveData};
use annolint_core::AnalysisContext;
use annolint_core::model::Modifier;
use annolint_core::quickfix::{QuickFixModule, resolve_data_for};
use annolint_core::resolve::simple_name;

/// A stub for `diagnostic`, or `None` when no declaration owns its range.
pub(crate) fn stub<F>(
    ctx: &AnalysisContext<'_>,
    diagnostic: &Diagnostic,
    participant: &str,
    title: String,
    data: F,
) -> Option<CodeActionStub>
where
    F: FnOnce(ResolveData) -> ResolveData,
{
    let resolve = resolve_data_for(ctx, diagnostic, participant)?;
    Some(CodeActionStub::quickfix(title, diagnostic, data(resolve)))
}

/// `@A, @B` for a list of qualified names.
pub(crate) fn mentions<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| format!("@{}", simple_name(n.as_ref())))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn modules() -> Vec<Box<dyn QuickFixModule>> {
    vec![
        // jakarta.annotation
        Box::new(InsertAttributes {
            id: "jakarta.annotation.insertName",
            codes: &[codes::MISSING_RESOURCE_NAME],
            annotation: annotation::RESOURCE,
            container: None,
            attributes: &["name"],
        }),
        Box::new(InsertAttributes {
            id: "jakarta.annotation.insertType",
            codes: &[codes::MISSING_RESOURCE_TYPE],
            annotation: annotation::RESOURCE,
            container: None,
            attributes: &["type"],
        }),
        Box::new(RemoveParameters {
            id: "jakarta.annotation.removeParameters",
            codes: &[codes::POST_CONSTRUCT_PARAMS, codes::PRE_DESTROY_PARAMS],
            keep_each: false,
        }),
        Box::new(ChangeReturnType {
            id: "jakarta.annotation.returnVoid",
            codes: &[codes::POST_CONSTRUCT_RETURN_TYPE, codes::PRE_DESTROY_RETURN_TYPE],
            type_name: "void",
        }),
        Box::new(ModifierFix {
            id: "jakarta.removeStatic",
            codes: &[
                codes::POST_CONSTRUCT_STATIC,
                codes::PRE_DESTROY_STATIC,
                codes::INJECT_STATIC,
                codes::CONSTRAINT_ON_STATIC,
            ],
            title: "Remove the 'static' modifier",
            add: &[],
            remove: &[Modifier::Static],
        }),
        // jakarta.ws.rs
        Box::new(ModifierFix {
            id: "jakarta.jaxrs.makeMethodPublic",
            codes: &[codes::NON_PUBLIC_RESOURCE_METHOD],
            title: "Make method public",
            add: &[Modifier::Public],
            remove: &[],
        }),
        Box::new(ModifierFix {
            id: "jakarta.jaxrs.makeConstructorPublic",
            codes: &[codes::NO_PUBLIC_CONSTRUCTOR],
            title: "Make constructor public",
            add: &[Modifier::Public],
            remove: &[],
        }),
        Box::new(RemoveParameters {
            id: "jakarta.jaxrs.keepEntityParameter",
            codes: &[codes::MULTIPLE_ENTITY_PARAMS],
            keep_each: true,
        }),
        Box::new(InsertConstructor {
            id: "jakarta.insertPublicConstructor",
            codes: &[codes::NO_PUBLIC_CONSTRUCTOR, codes::ENTITY_NO_ARG_CONSTRUCTOR],
            visibility: Modifier::Public,
        }),
        // jakarta.enterprise
        Box::new(RemoveFlagged {
            id: "jakarta.cdi.keepScope",
            codes: &[
                codes::SCOPES_ON_MANAGED_BEAN,
                codes::SCOPES_ON_PRODUCER_FIELD,
                codes::SCOPES_ON_PRODUCER_METHOD,
            ],
            mode: Flagged::AllButOne,
        }),
        Box::new(RemoveAnnotations {
            id: "jakarta.cdi.removeProduces",
            codes: &[codes::PRODUCES_AND_INJECT],
            annotations: &[cdi::PRODUCES],
        }),
        Box::new(RemoveFlagged {
            id: "jakarta.cdi.removeParameterAnnotation",
            codes: &[codes::INVALID_INJECT_PARAM],
            mode: Flagged::Each,
        }),
        // jakarta.inject
        Box::new(RemoveAnnotations {
            id: "jakarta.inject.removeInject",
            codes: &[
                codes::PRODUCES_AND_INJECT,
                codes::INJECT_FINAL,
                codes::INJECT_ABSTRACT,
                codes::INJECT_STATIC,
                codes::INJECT_GENERIC,
                codes::INJECT_CONSTRUCTORS,
            ],
            annotations: &[inject::INJECT],
        }),
        Box::new(ModifierFix {
            id: "jakarta.removeFinal",
            codes: &[
                codes::INJECT_FINAL,
                codes::ENTITY_FINAL_CLASS,
                codes::ENTITY_FINAL_METHOD,
                codes::ENTITY_FINAL_FIELD,
            ],
            title: "Remove the 'final' modifier",
            add: &[],
            remove: &[Modifier::Final],
        }),
        Box::new(ModifierFix {
            id: "jakarta.inject.removeAbstract",
            codes: &[codes::INJECT_ABSTRACT],
            title: "Remove the 'abstract' modifier",
            add: &[],
            remove: &[Modifier::Abstract],
        }),
        // jakarta.persistence
        Box::new(InsertConstructor {
            id: "jakarta.persistence.insertProtectedConstructor",
            codes: &[codes::ENTITY_NO_ARG_CONSTRUCTOR],
            visibility: Modifier::Protected,
        }),
        Box::new(RemoveAnnotations {
            id: "jakarta.persistence.removeMapKey",
            codes: &[codes::MAP_KEY_AND_MAP_KEY_CLASS],
            annotations: &[persistence::MAP_KEY],
        }),
        Box::new(RemoveAnnotations {
            id: "jakarta.persistence.removeMapKeyClass",
            codes: &[codes::MAP_KEY_AND_MAP_KEY_CLASS],
            annotations: &[persistence::MAP_KEY_CLASS],
        }),
        Box::new(InsertAttributes {
            id: "jakarta.persistence.insertJoinColumnAttributes",
            codes: &[codes::MAP_KEY_JOIN_COLUMN_ATTRIBUTES],
            annotation: persistence::MAP_KEY_JOIN_COLUMN,
            container: Some(persistence::MAP_KEY_JOIN_COLUMNS),
            attributes: persistence::JOIN_COLUMN_ATTRIBUTES,
        }),
        // jakarta.servlet
        Box::new(ExtendClass {
            id: "jakarta.servlet.extendHttpServlet",
            codes: &[codes::SERVLET_NOT_HTTP_SERVLET],
            superclass: servlet::HTTP_SERVLET,
        }),
        Box::new(InsertAttributes {
            id: "jakarta.servlet.insertServletValue",
            codes: &[codes::SERVLET_MISSING_ATTRIBUTES],
            annotation: servlet::WEB_SERVLET,
            container: None,
            attributes: &["value"],
        }),
        Box::new(InsertAttributes {
            id: "jakarta.servlet.insertServletUrlPatterns",
            codes: &[codes::SERVLET_MISSING_ATTRIBUTES],
            annotation: servlet::WEB_SERVLET,
            container: None,
            attributes: &["urlPatterns"],
        }),
        Box::new(RemoveAttribute {
            id: "jakarta.servlet.removeServletValue",
            codes: &[codes::SERVLET_ATTRIBUTE_CONFLICT],
            annotation: servlet::WEB_SERVLET,
            attribute: "value",
        }),
        Box::new(RemoveAttribute {
            id: "jakarta.servlet.removeServletUrlPatterns",
            codes: &[codes::SERVLET_ATTRIBUTE_CONFLICT],
            annotation: servlet::WEB_SERVLET,
            attribute: "urlPatterns",
        }),
        Box::new(InsertAttributes {
            id: "jakarta.servlet.insertFilterValue",
            codes: &[codes::FILTER_MISSING_ATTRIBUTES],
            annotation: servlet::WEB_FILTER,
            container: None,
            attributes: &["value"],
        }),
        Box::new(InsertAttributes {
            id: "jakarta.servlet.insertFilterUrlPatterns",
            codes: &[codes::FILTER_MISSING_ATTRIBUTES],
            annotation: servlet::WEB_FILTER,
            container: None,
            attributes: &["urlPatterns"],
        }),
        Box::new(RemoveAttribute {
            id: "jakarta.servlet.removeFilterValue",
            codes: &[codes::FILTER_ATTRIBUTE_CONFLICT],
            annotation: servlet::WEB_FILTER,
            attribute: "value",
        }),
        Box::new(RemoveAttribute {
            id: "jakarta.servlet.removeFilterUrlPatterns",
            codes: &[codes::FILTER_ATTRIBUTE_CONFLICT],
            annotation: servlet::WEB_FILTER,
            attribute: "urlPatterns",
        }),
        Box::new(ImplementInterface {
            id: "jakarta.servlet.implementFilter",
            codes: &[codes::FILTER_NOT_FILTER],
            interfaces: &[servlet::FILTER],
        }),
        Box::new(ImplementInterface {
            id: "jakarta.servlet.implementListener",
            codes: &[codes::LISTENER_NOT_LISTENER],
            interfaces: servlet::LISTENERS,
        }),
        // jakarta.validation
        Box::new(RemoveFlagged {
            id: "jakarta.validation.removeConstraint",
            codes: &[
                codes::CONSTRAINT_ON_STATIC,
                codes::CONSTRAINT_NOT_BOOLEAN,
                codes::CONSTRAINT_NOT_STRING,
            ],
            mode: Flagged::Each,
        }),
        // jakarta.json.bind
        Box::new(RemoveAnnotations {
            id: "jakarta.jsonb.removeCreator",
            codes: &[codes::JSONB_CREATORS],
            annotations: &[jsonb::CREATOR],
        }),
        Box::new(RemoveAnnotations {
            id: "jakarta.jsonb.removeTransient",
            codes: &[codes::JSONB_TRANSIENT_MIXED],
            annotations: &[jsonb::TRANSIENT],
        }),
        Box::new(RemoveFlagged {
            id: "jakarta.jsonb.removeOthers",
            codes: &[codes::JSONB_TRANSIENT_MIXED],
            mode: Flagged::All,
        }),
    ]
}
