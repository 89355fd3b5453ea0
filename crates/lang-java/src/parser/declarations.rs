use super::annotations;
use super::syntax::{all_children, compact, find_child, head_offset, named_children, range, text};
use annolint_core::model::{
    BindingKey, DeclKind, Declaration, FieldDecl, Import, MethodDecl, ParameterDecl, TypeDecl,
    TypeKind, TypeRef, Variable,
};
use annolint_api::TextRange;
use tree_sitter::Node;

pub(crate) fn type_kind(node: Node<'_>) -> Option<TypeKind> {
    Some(match node.kind() {
        "class_declaration" => TypeKind::Class,
        "interface_declaration" => TypeKind::Interface,
        "enum_declaration" => TypeKind::Enum,
        "record_declaration" => TypeKind::Record,
        "annotation_type_declaration" => TypeKind::Annotation,
        _ => return None,
    })
}

/// Package name and the span of its declaration.
pub(crate) fn package(root: Node<'_>, src: &str) -> Option<(String, TextRange)> {
    let decl = find_child(root, "package_declaration")?;
    named_children(decl)
        .into_iter()
        .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))
        .map(|name| (compact(text(name, src)), range(decl)))
}

pub(crate) fn imports(root: Node<'_>, src: &str) -> Vec<Import> {
    all_children(root)
        .into_iter()
        .filter(|c| c.kind() == "import_declaration")
        .filter_map(|decl| {
            let parts = all_children(decl);
            let path = parts
                .iter()
                .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))?;
            Some(Import {
                path: compact(text(*path, src)),
                on_demand: parts.iter().any(|c| c.kind() == "asterisk"),
                is_static: parts.iter().any(|c| c.kind() == "static"),
                span: range(decl),
            })
        })
        .collect()
}

/// Walks one file's declarations into owned model nodes.
pub(crate) struct DeclarationBuilder<'s> {
    pub src: &'s str,
    pub package: Option<&'s str>,
}

impl DeclarationBuilder<'_> {
    fn type_ref(&self, node: Node<'_>) -> TypeRef {
        TypeRef::new(compact(text(node, self.src)), range(node))
    }

    pub fn type_declaration(&self, node: Node<'_>, outer: Option<&str>) -> Option<Declaration> {
        let kind = type_kind(node)?;
        let name_node = node.child_by_field_name("name")?;
        let name = text(name_node, self.src).to_string();
        let qualified_name = match (outer, self.package) {
            (Some(outer), _) => format!("{outer}.{name}"),
            (None, Some(pkg)) if !pkg.is_empty() => format!("{pkg}.{name}"),
            (None, _) => name.clone(),
        };

        let (modifiers, annotations) =
            annotations::modifiers(find_child(node, "modifiers"), self.src);

        let mut extends_offset = node
            .child_by_field_name("type_parameters")
            .unwrap_or(name_node)
            .end_byte();
        if kind == TypeKind::Record {
            if let Some(components) = node.child_by_field_name("parameters") {
                extends_offset = components.end_byte();
            }
        }

        let mut superclass = None;
        let mut interfaces = Vec::new();
        let mut interfaces_span = None;
        for child in all_children(node) {
            match child.kind() {
                "superclass" => {
                    superclass = named_children(child)
                        .into_iter()
                        .next()
                        .map(|t| self.type_ref(t));
                }
                "super_interfaces" | "extends_interfaces" => {
                    if let Some(list) = find_child(child, "type_list") {
                        interfaces = named_children(list)
                            .into_iter()
                            .map(|t| self.type_ref(t))
                            .collect();
                        interfaces_span = Some(range(list));
                    }
                }
                _ => {}
            }
        }
        let implements_offset = superclass
            .as_ref()
            .map_or(extends_offset, |s: &TypeRef| s.span.end);

        let body = node.child_by_field_name("body");
        let body_open = body.map_or(node.end_byte(), |b| b.start_byte() + 1);
        let members = body
            .map(|b| self.members(b, &qualified_name))
            .unwrap_or_default();

        Some(Declaration {
            name,
            owner: outer.map(str::to_string),
            key: BindingKey::for_type(&qualified_name),
            span: range(node),
            name_span: range(name_node),
            head_offset: head_offset(node),
            modifiers,
            annotations,
            kind: DeclKind::Type(TypeDecl {
                kind,
                qualified_name,
                superclass,
                interfaces,
                interfaces_span,
                extends_offset,
                implements_offset,
                body_open,
                members,
            }),
        })
    }

    fn members(&self, body: Node<'_>, owner: &str) -> Vec<Declaration> {
        let mut out = Vec::new();
        for child in named_children(body) {
            match child.kind() {
                "field_declaration" => out.extend(self.field(child, owner)),
                "method_declaration" | "constructor_declaration" => {
                    out.extend(self.method(child, owner))
                }
                "enum_body_declarations" => out.extend(self.members(child, owner)),
                _ => out.extend(self.type_declaration(child, Some(owner))),
            }
        }
        out
    }

    fn field(&self, node: Node<'_>, owner: &str) -> Option<Declaration> {
        let type_ref = self.type_ref(node.child_by_field_name("type")?);
        let variables: Vec<Variable> = named_children(node)
            .into_iter()
            .filter(|c| c.kind() == "variable_declarator")
            .filter_map(|d| d.child_by_field_name("name"))
            .map(|n| Variable {
                name: text(n, self.src).to_string(),
                span: range(n),
            })
            .collect();
        let first = variables.first()?;
        let (modifiers, annotations) =
            annotations::modifiers(find_child(node, "modifiers"), self.src);

        Some(Declaration {
            name: first.name.clone(),
            owner: Some(owner.to_string()),
            key: BindingKey::for_field(owner, &first.name),
            span: range(node),
            name_span: first.span,
            head_offset: head_offset(node),
            modifiers,
            annotations,
            kind: DeclKind::Field(FieldDecl {
                type_ref,
                variables,
            }),
        })
    }

    fn method(&self, node: Node<'_>, owner: &str) -> Option<Declaration> {
        let is_constructor = node.kind() == "constructor_declaration";
        let name_node = node.child_by_field_name("name")?;
        let params_node = node.child_by_field_name("parameters")?;
        let name = text(name_node, self.src).to_string();

        let raw_params: Vec<(Node<'_>, TypeRef, Node<'_>, bool)> = named_children(params_node)
            .into_iter()
            .filter_map(|p| self.parameter_parts(p))
            .collect();
        let param_types: Vec<String> = raw_params
            .iter()
            .map(|(_, t, _, varargs)| {
                if *varargs {
                    format!("{}...", t.name)
                } else {
                    t.name.clone()
                }
            })
            .collect();
        let key = BindingKey::for_method(owner, &name, &param_types);

        let parameters = raw_params
            .into_iter()
            .map(|(node, type_ref, name_node, varargs)| {
                let pname = text(name_node, self.src).to_string();
                let (modifiers, annotations) =
                    annotations::modifiers(find_child(node, "modifiers"), self.src);
                Declaration {
                    key: BindingKey::for_parameter(&key, &pname),
                    name: pname,
                    owner: Some(key.to_string()),
                    span: range(node),
                    name_span: range(name_node),
                    head_offset: head_offset(node),
                    modifiers,
                    annotations,
                    kind: DeclKind::Parameter(ParameterDecl { type_ref, varargs }),
                }
            })
            .collect();

        let throws = find_child(node, "throws")
            .map(|t| {
                named_children(t)
                    .into_iter()
                    .map(|ty| self.type_ref(ty))
                    .collect()
            })
            .unwrap_or_default();
        let return_type = if is_constructor {
            None
        } else {
            node.child_by_field_name("type").map(|t| self.type_ref(t))
        };
        let (modifiers, annotations) =
            annotations::modifiers(find_child(node, "modifiers"), self.src);

        Some(Declaration {
            name,
            owner: Some(owner.to_string()),
            key,
            span: range(node),
            name_span: range(name_node),
            head_offset: head_offset(node),
            modifiers,
            annotations,
            kind: DeclKind::Method(MethodDecl {
                is_constructor,
                is_generic: node.child_by_field_name("type_parameters").is_some(),
                return_type,
                parameters,
                parameters_span: TextRange::new(
                    params_node.start_byte() + 1,
                    params_node.end_byte().saturating_sub(1).max(params_node.start_byte() + 1),
                ),
                throws,
                has_body: node.child_by_field_name("body").is_some(),
            }),
        })
    }

    /// `(parameter node, type, name node, varargs)` of one formal parameter.
    fn parameter_parts<'t>(&self, node: Node<'t>) -> Option<(Node<'t>, TypeRef, Node<'t>, bool)> {
        match node.kind() {
            "formal_parameter" => {
                let ty = node.child_by_field_name("type")?;
                let name = node.child_by_field_name("name")?;
                Some((node, self.type_ref(ty), name, false))
            }
            "spread_parameter" => {
                let children = named_children(node);
                let ty = children
                    .iter()
                    .find(|c| {
                        !matches!(c.kind(), "modifiers" | "variable_declarator")
                            && !annotations::is_annotation(**c)
                    })?;
                let name = children
                    .iter()
                    .find(|c| c.kind() == "variable_declarator")?
                    .child_by_field_name("name")?;
                Some((node, self.type_ref(*ty), name, true))
            }
            _ => None,
        }
    }
}
