//! Immutable per-request view of one parsed source file.
//!
//! Declarations form an owned tree: types own their members (nested types
//! included), methods own their parameters. Every piece a proposal may touch
//! keeps its byte span so an edit converter can turn structural changes into
//! text edits against the same snapshot.

pub mod annotation;
pub mod binding;
pub mod fold;
pub mod modifier;

pub use annotation::{Annotation, AnnotationAttribute, AnnotationStyle, AnnotationValue};
pub use binding::BindingKey;
pub use fold::{DeclarationFold, NodeKind};
pub use modifier::{Modifier, ModifierSet, ModifierToken, Visibility};

use annolint_api::TextRange;

#[derive(Debug, Clone)]
pub struct DeclarationModel {
    pub uri: String,
    pub text: String,
    pub package: Option<String>,
    /// Span of the whole `package ...;` declaration.
    pub package_span: Option<TextRange>,
    pub imports: Vec<Import>,
    pub types: Vec<Declaration>,
}

impl DeclarationModel {
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
            package: None,
            package_span: None,
            imports: Vec::new(),
            types: Vec::new(),
        }
    }

    /// All declarations in pre-order (a type before its members, a method
    /// before its parameters).
    pub fn declarations(&self) -> Vec<&Declaration> {
        let mut out = Vec::new();
        let mut stack: Vec<&Declaration> = self.types.iter().rev().collect();
        while let Some(decl) = stack.pop() {
            out.push(decl);
            stack.extend(decl.children().iter().rev());
        }
        out
    }

    pub fn slice(&self, range: TextRange) -> &str {
        self.text.get(range.start..range.end).unwrap_or("")
    }

    /// Qualifies a simple type name with the file's package.
    pub fn qualify(&self, simple: &str) -> String {
        match &self.package {
            Some(pkg) if !pkg.is_empty() => format!("{pkg}.{simple}"),
            _ => simple.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Dotted path without `import`, `static`, `.*` or `;`.
    pub path: String,
    pub on_demand: bool,
    pub is_static: bool,
    pub span: TextRange,
}

impl Import {
    /// Simple name a single-type import brings into scope.
    pub fn simple_name(&self) -> Option<&str> {
        if self.on_demand {
            None
        } else {
            Some(crate::resolve::simple_name(&self.path))
        }
    }
}

/// A type reference as written, e.g. `List<String>` or `int[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub span: TextRange,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, span: TextRange) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// The written name without type arguments or array brackets.
    pub fn base_name(&self) -> &str {
        let end = self
            .name
            .find(|c: char| c == '<' || c == '[')
            .unwrap_or(self.name.len());
        self.name[..end].trim()
    }

    pub fn is_void(&self) -> bool {
        self.name == "void"
    }
}

#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: String,
    /// Qualified name of the owning type (for parameters, the owning method's key).
    pub owner: Option<String>,
    pub key: BindingKey,
    pub span: TextRange,
    pub name_span: TextRange,
    /// First offset after the modifier list; new keywords and annotations go here.
    pub head_offset: usize,
    pub modifiers: ModifierSet,
    pub annotations: Vec<Annotation>,
    pub kind: DeclKind,
}

#[derive(Debug, Clone)]
pub enum DeclKind {
    Type(TypeDecl),
    Method(MethodDecl),
    Field(FieldDecl),
    Parameter(ParameterDecl),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub qualified_name: String,
    pub superclass: Option<TypeRef>,
    /// `implements` list for classes, enums and records; `extends` list for interfaces.
    pub interfaces: Vec<TypeRef>,
    pub interfaces_span: Option<TextRange>,
    /// Where a new `extends` clause is inserted (after the name or type parameters).
    pub extends_offset: usize,
    /// Where a new `implements` clause is inserted.
    pub implements_offset: usize,
    /// Offset just after the body's opening brace.
    pub body_open: usize,
    pub members: Vec<Declaration>,
}

impl TypeDecl {
    pub fn constructors<'a>(&'a self) -> impl Iterator<Item = &'a Declaration> + 'a {
        self.members
            .iter()
            .filter(|m| m.as_method().is_some_and(|m| m.is_constructor))
    }

    pub fn methods<'a>(&'a self) -> impl Iterator<Item = &'a Declaration> + 'a {
        self.members
            .iter()
            .filter(|m| m.as_method().is_some_and(|m| !m.is_constructor))
    }

    pub fn fields<'a>(&'a self) -> impl Iterator<Item = &'a Declaration> + 'a {
        self.members.iter().filter(|m| m.as_field().is_some())
    }
}

#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub is_constructor: bool,
    pub is_generic: bool,
    /// `None` for constructors.
    pub return_type: Option<TypeRef>,
    pub parameters: Vec<Declaration>,
    /// Text between the parentheses of the parameter list.
    pub parameters_span: TextRange,
    pub throws: Vec<TypeRef>,
    pub has_body: bool,
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub type_ref: TypeRef,
    pub variables: Vec<Variable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub span: TextRange,
}

#[derive(Debug, Clone)]
pub struct ParameterDecl {
    pub type_ref: TypeRef,
    pub varargs: bool,
}

impl Declaration {
    pub fn node_kind(&self) -> NodeKind {
        match &self.kind {
            DeclKind::Type(_) => NodeKind::Type,
            DeclKind::Method(_) => NodeKind::Method,
            DeclKind::Field(_) => NodeKind::Field,
            DeclKind::Parameter(_) => NodeKind::Parameter,
        }
    }

    pub fn as_type(&self) -> Option<&TypeDecl> {
        match &self.kind {
            DeclKind::Type(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDecl> {
        match &self.kind {
            DeclKind::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldDecl> {
        match &self.kind {
            DeclKind::Field(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_parameter(&self) -> Option<&ParameterDecl> {
        match &self.kind {
            DeclKind::Parameter(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.as_method().is_some_and(|m| m.is_constructor)
    }

    /// Structural children: members of a type, parameters of a method.
    pub fn children(&self) -> &[Declaration] {
        match &self.kind {
            DeclKind::Type(t) => &t.members,
            DeclKind::Method(m) => &m.parameters,
            DeclKind::Field(_) | DeclKind::Parameter(_) => &[],
        }
    }

    /// The declared type of a field or parameter, the return type of a method.
    pub fn value_type(&self) -> Option<&TypeRef> {
        match &self.kind {
            DeclKind::Field(f) => Some(&f.type_ref),
            DeclKind::Parameter(p) => Some(&p.type_ref),
            DeclKind::Method(m) => m.return_type.as_ref(),
            DeclKind::Type(_) => None,
        }
    }

    /// Human-readable kind used in diagnostic messages.
    pub fn describe(&self) -> &'static str {
        match &self.kind {
            DeclKind::Type(_) => "type",
            DeclKind::Method(m) if m.is_constructor => "constructor",
            DeclKind::Method(_) => "method",
            DeclKind::Field(_) => "field",
            DeclKind::Parameter(_) => "parameter",
        }
    }
}
