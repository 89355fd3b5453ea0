use crate::model::{Declaration, TypeRef};
use annolint_api::{Diagnostic, Severity};

/// Unchecked exception types commonly named in `throws` clauses.
const UNCHECKED: &[&str] = &[
    "RuntimeException",
    "Error",
    "IllegalArgumentException",
    "IllegalStateException",
    "NullPointerException",
    "UnsupportedOperationException",
    "IndexOutOfBoundsException",
    "ClassCastException",
    "ArithmeticException",
];

fn is_checked(exception: &TypeRef) -> bool {
    let simple = crate::resolve::simple_name(exception.base_name());
    !UNCHECKED.contains(&simple)
}

/// Codes reported by [`lifecycle_method_shape`], derived from one prefix:
/// `PostConstruct` gives `PostConstructParams`, `PostConstructReturnType`,
/// `PostConstructException` and `PostConstructStatic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleCodes {
    pub params: String,
    pub return_type: String,
    pub exception: String,
    pub is_static: String,
}

impl LifecycleCodes {
    pub fn new(prefix: &str) -> Self {
        Self {
            params: format!("{prefix}Params"),
            return_type: format!("{prefix}ReturnType"),
            exception: format!("{prefix}Exception"),
            is_static: format!("{prefix}Static"),
        }
    }
}

/// Checks a lifecycle callback: no parameters, `void`, no checked
/// exceptions (a warning) and not `static`.
pub fn lifecycle_method_shape(method: &Declaration, annotation: &str, codes: &LifecycleCodes) -> Vec<Diagnostic> {
    let Some(shape) = method.as_method().filter(|m| !m.is_constructor) else {
        return Vec::new();
    };
    let range = method.name_span;
    let mut out = Vec::new();

    if !shape.parameters.is_empty() {
        out.push(Diagnostic::new(
            codes.params.clone(),
            Severity::Error,
            range,
            format!("A method with the @{annotation} annotation must not have any parameters."),
        ));
    }
    if shape.return_type.as_ref().is_some_and(|t| !t.is_void()) {
        out.push(Diagnostic::new(
            codes.return_type.clone(),
            Severity::Error,
            range,
            format!("A method with the @{annotation} annotation must be void."),
        ));
    }
    if shape.throws.iter().any(is_checked) {
        out.push(Diagnostic::new(
            codes.exception.clone(),
            Severity::Warning,
            range,
            format!("A method with the @{annotation} annotation must not throw checked exceptions."),
        ));
    }
    if method.modifiers.is_static() {
        out.push(Diagnostic::new(
            codes.is_static.clone(),
            Severity::Error,
            range,
            format!("A method with the @{annotation} annotation must not be static."),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;
    use crate::model::{DeclKind, Modifier};
    use annolint_api::TextRange;

    #[test]
    fn reports_each_violation() {
        let mut method = fixture::with_modifiers(
            fixture::method("Bean", "init", &[("String", "a"), ("int", "b")], Some("String")),
            &[Modifier::Static],
        );
        if let DeclKind::Method(m) = &mut method.kind {
            m.throws.push(TypeRef::new("java.io.IOException", TextRange::new(0, 1)));
            m.throws.push(TypeRef::new("RuntimeException", TextRange::new(0, 1)));
        }
        let found = lifecycle_method_shape(&method, "PostConstruct", &LifecycleCodes::new("PostConstruct"));
        let codes: Vec<(&str, Severity)> = found.iter().map(|d| (d.code.as_str(), d.severity)).collect();
        assert_eq!(
            codes,
            vec![
                ("PostConstructParams", Severity::Error),
                ("PostConstructReturnType", Severity::Error),
                ("PostConstructException", Severity::Warning),
                ("PostConstructStatic", Severity::Error),
            ]
        );
    }

    #[test]
    fn unchecked_throws_and_void_pass() {
        let mut method = fixture::method("Bean", "close", &[], Some("void"));
        if let DeclKind::Method(m) = &mut method.kind {
            m.throws.push(TypeRef::new("IllegalStateException", TextRange::new(0, 1)));
        }
        assert!(lifecycle_method_shape(&method, "PreDestroy", &LifecycleCodes::new("PreDestroy")).is_empty());
    }
}
