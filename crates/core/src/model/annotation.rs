use annolint_api::TextRange;
use std::fmt;

/// How an annotation is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationStyle {
    /// `@A`
    Marker,
    /// `@A(x)`, the single value is stored under `value`.
    SingleValue,
    /// `@A(k = v, ...)`
    Normal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    /// Literal contents without the quotes, escapes kept verbatim.
    String(String),
    Number(String),
    Boolean(bool),
    /// `Foo.class`, stored as `Foo`.
    TypeLiteral(String),
    Annotation(Box<Annotation>),
    Array(Vec<AnnotationValue>),
    /// Any other constant expression (enum constants, concatenations, text
    /// blocks), verbatim.
    Expression(String),
    Null,
}

impl AnnotationValue {
    pub fn as_annotation(&self) -> Option<&Annotation> {
        match self {
            AnnotationValue::Annotation(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Nested annotations of an array value, or of a single nested annotation.
    pub fn nested_annotations(&self) -> Vec<&Annotation> {
        match self {
            AnnotationValue::Annotation(a) => vec![a.as_ref()],
            AnnotationValue::Array(items) => items.iter().filter_map(|v| v.as_annotation()).collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::String(s) => write!(f, "\"{s}\""),
            AnnotationValue::Number(n) => f.write_str(n),
            AnnotationValue::Boolean(b) => write!(f, "{b}"),
            AnnotationValue::TypeLiteral(t) => write!(f, "{t}.class"),
            AnnotationValue::Annotation(a) => write!(f, "{a}"),
            AnnotationValue::Array(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            AnnotationValue::Expression(e) => f.write_str(e),
            AnnotationValue::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationAttribute {
    pub name: String,
    pub value: AnnotationValue,
}

impl AnnotationAttribute {
    pub fn new(name: impl Into<String>, value: AnnotationValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An annotation usage. `name` is the name as written (simple or qualified);
/// annotations created by a proposal carry their qualified name and no span.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub name: String,
    pub style: AnnotationStyle,
    pub attributes: Vec<AnnotationAttribute>,
    pub span: Option<TextRange>,
}

pub const VALUE_ATTRIBUTE: &str = "value";

impl Annotation {
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: AnnotationStyle::Marker,
            attributes: Vec::new(),
            span: None,
        }
    }

    pub fn normal(name: impl Into<String>, attributes: Vec<AnnotationAttribute>) -> Self {
        let mut annotation = Self {
            name: name.into(),
            style: AnnotationStyle::Normal,
            attributes,
            span: None,
        };
        annotation.normalize_style();
        annotation
    }

    pub fn simple_name(&self) -> &str {
        crate::resolve::simple_name(&self.name)
    }

    pub fn is_synthesized(&self) -> bool {
        self.span.is_none()
    }

    pub fn attribute(&self, name: &str) -> Option<&AnnotationValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Nested annotations held in the `value` attribute. Non-empty only for
    /// container annotations such as `@MapKeyJoinColumns({...})`.
    pub fn contained(&self) -> Vec<&Annotation> {
        match self.attribute(VALUE_ATTRIBUTE) {
            Some(value) if self.attributes.len() == 1 => value.nested_annotations(),
            _ => Vec::new(),
        }
    }

    /// Picks the lightest style able to express the current attributes. A
    /// single-value annotation only stays single-value while `value` is its
    /// sole attribute.
    pub fn normalize_style(&mut self) {
        self.style = match self.attributes.as_slice() {
            [] => AnnotationStyle::Marker,
            [only] if only.name == VALUE_ATTRIBUTE && self.style == AnnotationStyle::SingleValue => {
                AnnotationStyle::SingleValue
            }
            _ => AnnotationStyle::Normal,
        };
    }

    /// Renders the annotation with `name` in place of the written name.
    pub fn render_as(&self, name: &str) -> String {
        let mut out = format!("@{name}");
        match self.style {
            AnnotationStyle::Marker if self.attributes.is_empty() => {}
            AnnotationStyle::SingleValue if self.attributes.len() == 1 => {
                out.push_str(&format!("({})", self.attributes[0].value));
            }
            _ => {
                let body = self
                    .attributes
                    .iter()
                    .map(|a| format!("{} = {}", a.name, a.value))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!("({body})"));
            }
        }
        out
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_as(&self.name))
    }
}
