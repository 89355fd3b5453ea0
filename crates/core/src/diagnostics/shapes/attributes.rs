use crate::model::Annotation;
use annolint_api::{Diagnostic, Severity};

/// `MissingResourceNameAttribute` for `Resource` and `name`.
pub fn missing_attribute_code(annotation_simple_name: &str, attribute: &str) -> String {
    let mut chars = attribute.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("Missing{annotation_simple_name}{capitalized}Attribute")
}

/// One diagnostic per required attribute absent from `annotation`, reported
/// on the annotation itself.
pub fn missing_attributes(annotation: &Annotation, required: &[&str]) -> Vec<Diagnostic> {
    let Some(range) = annotation.span else {
        return Vec::new();
    };
    let simple = annotation.simple_name();
    required
        .iter()
        .filter(|attr| !annotation.has_attribute(attr))
        .map(|attr| {
            Diagnostic::new(
                missing_attribute_code(simple, attr),
                Severity::Error,
                range,
                format!("The @{simple} annotation must define the attribute '{attr}'."),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnnotationAttribute, AnnotationValue};
    use annolint_api::TextRange;

    #[test]
    fn one_diagnostic_per_missing_attribute() {
        let mut annotation = Annotation::marker("jakarta.annotation.Resource");
        annotation.span = Some(TextRange::new(4, 13));
        let found = missing_attributes(&annotation, &["name", "type"]);
        let codes: Vec<&str> = found.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["MissingResourceNameAttribute", "MissingResourceTypeAttribute"]);
        assert!(found.iter().all(|d| d.range == TextRange::new(4, 13)));

        annotation
            .attributes
            .push(AnnotationAttribute::new("type", AnnotationValue::TypeLiteral("Object".into())));
        let found = missing_attributes(&annotation, &["name", "type"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "MissingResourceNameAttribute");
    }
}
