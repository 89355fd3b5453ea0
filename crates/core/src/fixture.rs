//! Hand-built declaration models for unit tests.

use crate::model::{
    Annotation, BindingKey, DeclKind, Declaration, DeclarationModel, FieldDecl, Import, MethodDecl,
    Modifier, ModifierSet, ParameterDecl, TypeDecl, TypeKind, TypeRef, Variable,
};
use crate::resolve::{TypeNameResolver, simple_name};
use annolint_api::TextRange;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const PACKAGE: &str = "com.example";

static NEXT_SPAN: AtomicUsize = AtomicUsize::new(1);

fn span() -> TextRange {
    let n = NEXT_SPAN.fetch_add(1, Ordering::Relaxed);
    TextRange::new(n * 1000, n * 1000 + 10)
}

fn enclosing(ranges: impl IntoIterator<Item = TextRange>) -> TextRange {
    ranges
        .into_iter()
        .reduce(|a, b| TextRange::new(a.start.min(b.start), a.end.max(b.end)))
        .unwrap_or_else(span)
}

/// Children are built before their parent, so a parent's span encloses every
/// span handed out while building it.
fn declaration(name: &str, owner: Option<&str>, key: BindingKey, kind: DeclKind) -> Declaration {
    let name_span = span();
    let mut covered = vec![name_span];
    match &kind {
        DeclKind::Type(t) => covered.extend(t.members.iter().map(|m| m.span)),
        DeclKind::Method(m) => {
            covered.extend(m.parameters.iter().map(|p| p.span));
            covered.extend(m.return_type.iter().map(|t| t.span));
            covered.push(m.parameters_span);
        }
        DeclKind::Field(f) => {
            covered.push(f.type_ref.span);
            covered.extend(f.variables.iter().map(|v| v.span));
        }
        DeclKind::Parameter(p) => covered.push(p.type_ref.span),
    }
    let span = enclosing(covered);
    Declaration {
        name: name.to_string(),
        owner: owner.map(str::to_string),
        key,
        span,
        name_span,
        head_offset: span.start,
        modifiers: ModifierSet::new(),
        annotations: Vec::new(),
        kind,
    }
}

pub fn class(name: &str, members: Vec<Declaration>) -> Declaration {
    let qualified = format!("{PACKAGE}.{name}");
    declaration(
        name,
        None,
        BindingKey::for_type(&qualified),
        DeclKind::Type(TypeDecl {
            kind: TypeKind::Class,
            qualified_name: qualified,
            superclass: None,
            interfaces: Vec::new(),
            interfaces_span: None,
            extends_offset: 0,
            implements_offset: 0,
            body_open: 0,
            members,
        }),
    )
}

pub fn method(owner: &str, name: &str, params: &[(&str, &str)], return_type: Option<&str>) -> Declaration {
    let owner = format!("{PACKAGE}.{owner}");
    let types: Vec<&str> = params.iter().map(|(t, _)| *t).collect();
    let key = BindingKey::for_method(&owner, name, &types);
    let parameters = params
        .iter()
        .map(|(ty, pname)| {
            declaration(
                pname,
                Some(key.as_str()),
                BindingKey::for_parameter(&key, pname),
                DeclKind::Parameter(ParameterDecl {
                    type_ref: TypeRef::new(*ty, span()),
                    varargs: false,
                }),
            )
        })
        .collect();
    declaration(
        name,
        Some(&owner),
        key,
        DeclKind::Method(MethodDecl {
            is_constructor: return_type.is_none(),
            is_generic: false,
            return_type: return_type.map(|t| TypeRef::new(t, span())),
            parameters,
            parameters_span: span(),
            throws: Vec::new(),
            has_body: true,
        }),
    )
}

pub fn constructor(owner: &str, params: &[(&str, &str)]) -> Declaration {
    method(owner, owner, params, None)
}

pub fn field(owner: &str, name: &str, ty: &str) -> Declaration {
    let owner = format!("{PACKAGE}.{owner}");
    let key = BindingKey::for_field(&owner, name);
    declaration(
        name,
        Some(&owner),
        key,
        DeclKind::Field(FieldDecl {
            type_ref: TypeRef::new(ty, span()),
            variables: vec![Variable {
                name: name.to_string(),
                span: span(),
            }],
        }),
    )
}

pub fn with_modifiers(mut decl: Declaration, modifiers: &[Modifier]) -> Declaration {
    decl.modifiers = ModifierSet::from_modifiers(modifiers);
    decl
}

pub fn annotated(mut decl: Declaration, annotation: Annotation) -> Declaration {
    let mut annotation = annotation;
    let at = span();
    annotation.span = Some(at);
    decl.span = enclosing([decl.span, at]);
    decl.annotations.push(annotation);
    decl
}

pub fn model(types: Vec<Declaration>, imports: &[&str]) -> DeclarationModel {
    let mut model = DeclarationModel::new("file:///Example.java", "");
    model.package = Some(PACKAGE.to_string());
    model.imports = imports
        .iter()
        .map(|path| Import {
            path: path.to_string(),
            on_demand: false,
            is_static: false,
            span: span(),
        })
        .collect();
    model.types = types;
    model
}

/// Resolves simple names through single-type imports only.
pub struct ImportsOnly;

impl TypeNameResolver for ImportsOnly {
    fn resolve(&self, model: &DeclarationModel, written: &str) -> Option<String> {
        if written.contains('.') {
            return Some(written.to_string());
        }
        model
            .imports
            .iter()
            .find(|i| simple_name(&i.path) == written)
            .map(|i| i.path.clone())
    }
}
