use super::{Declaration, DeclarationModel};
use annolint_api::TextRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a declaration that survives re-parsing the same file.
///
/// Shapes: `pkg.Type`, `pkg.Type.Inner`, `pkg.Type.field`,
/// `pkg.Type#method(T1,T2)` and `pkg.Type#method(T1)/param`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingKey(pub String);

impl BindingKey {
    pub fn for_type(qualified_name: &str) -> Self {
        Self(qualified_name.to_string())
    }

    pub fn for_field(owner: &str, name: &str) -> Self {
        Self(format!("{owner}.{name}"))
    }

    pub fn for_method<S: AsRef<str>>(owner: &str, name: &str, parameter_types: &[S]) -> Self {
        let params = parameter_types
            .iter()
            .map(|t| t.as_ref().split_whitespace().collect::<String>())
            .collect::<Vec<_>>()
            .join(",");
        Self(format!("{owner}#{name}({params})"))
    }

    pub fn for_parameter(method: &BindingKey, name: &str) -> Self {
        Self(format!("{}/{name}", method.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl DeclarationModel {
    /// Innermost declaration whose span contains `offset`.
    ///
    /// A position on a field's variable yields the field itself; a position on
    /// a parameter yields the parameter. `None` is a normal outcome.
    pub fn declaration_at(&self, offset: usize) -> Option<&Declaration> {
        self.innermost(|decl| decl.span.contains(offset))
    }

    /// Innermost declaration whose span covers all of `range`.
    pub fn declaration_for_range(&self, range: TextRange) -> Option<&Declaration> {
        self.innermost(|decl| decl.span.contains_range(range))
    }

    pub fn find_by_key(&self, key: &BindingKey) -> Option<&Declaration> {
        self.declarations().into_iter().find(|d| &d.key == key)
    }

    pub fn find_by_span(&self, span: TextRange) -> Option<&Declaration> {
        self.declarations().into_iter().find(|d| d.span == span)
    }

    /// The declaration that structurally owns `child` (type for members, method
    /// for parameters).
    pub fn parent_of(&self, child: &Declaration) -> Option<&Declaration> {
        self.declarations()
            .into_iter()
            .find(|d| d.children().iter().any(|c| c.key == child.key && c.span == child.span))
    }

    fn innermost<F>(&self, matches: F) -> Option<&Declaration>
    where
        F: Fn(&Declaration) -> bool,
    {
        let mut level: &[Declaration] = &self.types;
        let mut found = None;
        while let Some(decl) = level.iter().find(|d| matches(d)) {
            found = Some(decl);
            level = decl.children();
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_keys_ignore_whitespace_in_types() {
        let key = BindingKey::for_method("com.A", "run", &["Map<String, Integer>", "int"]);
        assert_eq!(key.as_str(), "com.A#run(Map<String,Integer>,int)");
        let param = BindingKey::for_parameter(&key, "count");
        assert_eq!(param.as_str(), "com.A#run(Map<String,Integer>,int)/count");
    }
}
