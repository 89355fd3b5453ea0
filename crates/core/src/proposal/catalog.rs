use crate::model::{Annotation, AnnotationValue};
use std::collections::{BTreeMap, HashMap};

/// Declared type of an annotation attribute, as far as defaulting cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    Boolean,
    /// Any of `byte`, `short`, `int`, `long`, `float`, `double`, `char`.
    Numeric,
    String,
    Class,
    Enum,
    Annotation(String),
    Array(Box<AttributeType>),
}

impl AttributeType {
    pub fn array_of(element: AttributeType) -> Self {
        AttributeType::Array(Box::new(element))
    }

    /// The value a newly added attribute of this type starts with.
    pub fn default_value(&self) -> AnnotationValue {
        match self {
            AttributeType::Boolean => AnnotationValue::Boolean(false),
            AttributeType::Numeric => AnnotationValue::Number("0".to_string()),
            AttributeType::String => AnnotationValue::String(String::new()),
            AttributeType::Array(element) => AnnotationValue::Array(vec![element.default_value()]),
            AttributeType::Annotation(name) => {
                AnnotationValue::Annotation(Box::new(Annotation::marker(name.clone())))
            }
            AttributeType::Class | AttributeType::Enum => AnnotationValue::Null,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnnotationInfo {
    pub qualified_name: String,
    pub attributes: BTreeMap<String, AttributeType>,
    /// Set when the annotation's `value` is an array of this annotation.
    pub contains: Option<String>,
}

impl AnnotationInfo {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Self::default()
        }
    }

    pub fn attribute(mut self, name: &str, ty: AttributeType) -> Self {
        self.attributes.insert(name.to_string(), ty);
        self
    }

    pub fn container_of(mut self, element: impl Into<String>) -> Self {
        let element = element.into();
        self.attributes.insert(
            crate::model::annotation::VALUE_ATTRIBUTE.to_string(),
            AttributeType::array_of(AttributeType::Annotation(element.clone())),
        );
        self.contains = Some(element);
        self
    }
}

/// Attribute types of the annotations quick fixes create or extend.
#[derive(Debug, Clone, Default)]
pub struct AnnotationCatalog {
    entries: HashMap<String, AnnotationInfo>,
}

impl AnnotationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, info: AnnotationInfo) {
        self.entries.insert(info.qualified_name.clone(), info);
    }

    pub fn get(&self, qualified_name: &str) -> Option<&AnnotationInfo> {
        self.entries.get(qualified_name)
    }

    pub fn attribute_type(&self, annotation: &str, attribute: &str) -> Option<&AttributeType> {
        self.get(annotation)?.attributes.get(attribute)
    }

    /// Element annotation of a container annotation.
    pub fn container_element(&self, annotation: &str) -> Option<&str> {
        self.get(annotation)?.contains.as_deref()
    }

    /// Default for `attribute` of `annotation`; attributes the catalog does not
    /// describe start as an empty string.
    pub fn default_value(&self, annotation: &str, attribute: &str) -> AnnotationValue {
        self.attribute_type(annotation, attribute)
            .map(AttributeType::default_value)
            .unwrap_or_else(|| AnnotationValue::String(String::new()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
