use crate::model::DeclarationModel;
use std::collections::HashSet;

/// Last dotted segment of a (possibly qualified) name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Package part of a qualified name, `None` for simple names.
pub fn package_of(name: &str) -> Option<&str> {
    name.rfind('.').map(|i| &name[..i])
}

/// Semantic type lookup backing the second resolution tier (the classpath
/// in a full IDE).
pub trait TypeSearch: Send + Sync {
    fn type_exists(&self, qualified_name: &str) -> bool;
}

/// A fixed set of qualified type names.
#[derive(Debug, Clone, Default)]
pub struct KnownTypes {
    names: HashSet<String>,
}

impl KnownTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, qualified_name: impl Into<String>) {
        self.names.insert(qualified_name.into());
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TypeSearch for KnownTypes {
    fn type_exists(&self, qualified_name: &str) -> bool {
        self.names.contains(qualified_name)
    }
}

/// Resolves a type name as written in a file to its qualified name.
pub trait TypeNameResolver: Send + Sync {
    fn resolve(&self, model: &DeclarationModel, written: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_parts() {
        assert_eq!(simple_name("jakarta.ws.rs.GET"), "GET");
        assert_eq!(simple_name("GET"), "GET");
        assert_eq!(package_of("jakarta.ws.rs.GET"), Some("jakarta.ws.rs"));
        assert_eq!(package_of("GET"), None);
    }
}
