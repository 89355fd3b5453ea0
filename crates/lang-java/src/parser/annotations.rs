use super::syntax::{all_children, named_children, range, text};
use annolint_core::model::annotation::VALUE_ATTRIBUTE;
use annolint_core::model::{
    Annotation, AnnotationAttribute, AnnotationStyle, AnnotationValue, Modifier, ModifierSet,
    ModifierToken,
};
use tree_sitter::Node;

pub(crate) fn is_annotation(node: Node<'_>) -> bool {
    matches!(node.kind(), "marker_annotation" | "annotation")
}

/// Keywords and annotations of a `modifiers` node, in source order.
pub(crate) fn modifiers(node: Option<Node<'_>>, src: &str) -> (ModifierSet, Vec<Annotation>) {
    let Some(node) = node else {
        return (ModifierSet::new(), Vec::new());
    };
    let mut tokens = Vec::new();
    let mut annotations = Vec::new();
    for child in all_children(node) {
        if is_annotation(child) {
            annotations.push(annotation(child, src));
        } else if let Some(modifier) = Modifier::from_keyword(text(child, src)) {
            tokens.push(ModifierToken {
                modifier,
                span: Some(range(child)),
            });
        }
    }
    (ModifierSet::from_tokens(tokens), annotations)
}

pub(crate) fn annotation(node: Node<'_>, src: &str) -> Annotation {
    let name = node
        .child_by_field_name("name")
        .map(|n| text(n, src).split_whitespace().collect::<String>())
        .unwrap_or_default();
    let span = Some(range(node));

    let Some(arguments) = node.child_by_field_name("arguments") else {
        return Annotation {
            name,
            style: AnnotationStyle::Marker,
            attributes: Vec::new(),
            span,
        };
    };

    let items = named_children(arguments);
    let (style, attributes) = match items.as_slice() {
        [] => (AnnotationStyle::Normal, Vec::new()),
        [single] if single.kind() != "element_value_pair" => (
            AnnotationStyle::SingleValue,
            vec![AnnotationAttribute::new(VALUE_ATTRIBUTE, value(*single, src))],
        ),
        pairs => (
            AnnotationStyle::Normal,
            pairs
                .iter()
                .filter(|p| p.kind() == "element_value_pair")
                .filter_map(|pair| {
                    let key = pair.child_by_field_name("key")?;
                    let val = pair.child_by_field_name("value")?;
                    Some(AnnotationAttribute::new(text(key, src), value(val, src)))
                })
                .collect(),
        ),
    };

    Annotation {
        name,
        style,
        attributes,
        span,
    }
}

fn value(node: Node<'_>, src: &str) -> AnnotationValue {
    let raw = text(node, src);
    match node.kind() {
        "string_literal" if raw.starts_with("\"\"\"") => AnnotationValue::Expression(raw.to_string()),
        "string_literal" => AnnotationValue::String(unquote(raw).to_string()),
        "decimal_integer_literal"
        | "hex_integer_literal"
        | "octal_integer_literal"
        | "binary_integer_literal"
        | "decimal_floating_point_literal"
        | "hex_floating_point_literal" => AnnotationValue::Number(raw.to_string()),
        "true" => AnnotationValue::Boolean(true),
        "false" => AnnotationValue::Boolean(false),
        "null_literal" => AnnotationValue::Null,
        "class_literal" => {
            let ty = raw
                .trim_end()
                .strip_suffix("class")
                .map(|t| t.trim_end().trim_end_matches('.').trim_end())
                .unwrap_or(raw);
            AnnotationValue::TypeLiteral(ty.to_string())
        }
        "marker_annotation" | "annotation" => AnnotationValue::Annotation(Box::new(annotation(node, src))),
        "element_value_array_initializer" => AnnotationValue::Array(
            named_children(node)
                .into_iter()
                .map(|item| value(item, src))
                .collect(),
        ),
        _ => AnnotationValue::Expression(raw.to_string()),
    }
}

fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}
