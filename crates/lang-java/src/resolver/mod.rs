//! Two-tier type name resolution.
//!
//! Scopes are consulted in order; the first answer wins. The import table and
//! the file's own declarations are purely syntactic. Only when both miss does
//! resolution fall back to a [`TypeSearch`] over on-demand imports and the
//! file's package.

pub mod context;
pub mod scope;

use annolint_core::model::DeclarationModel;
use annolint_core::resolve::{TypeNameResolver, TypeSearch};
use context::ResolutionContext;
use scope::{FileScope, ImportScope, NameScope, PackageScope};
use std::sync::Arc;
use tracing::trace;

#[derive(Clone)]
pub struct JavaResolver {
    search: Arc<dyn TypeSearch>,
}

impl JavaResolver {
    pub fn new(search: Arc<dyn TypeSearch>) -> Self {
        Self { search }
    }

    fn scopes(&self) -> [Box<dyn NameScope + '_>; 3] {
        [
            Box::new(ImportScope),
            Box::new(FileScope),
            Box::new(PackageScope {
                search: self.search.as_ref(),
            }),
        ]
    }
}

impl TypeNameResolver for JavaResolver {
    fn resolve(&self, model: &DeclarationModel, written: &str) -> Option<String> {
        if written.contains('.') {
            return Some(written.to_string());
        }
        let ctx = ResolutionContext::new(model, written);
        for scope in self.scopes() {
            if let Some(qualified) = scope.resolve(written, &ctx) {
                trace!(name = written, scope = scope.name(), resolved = %qualified, "type name resolved");
                return Some(qualified);
            }
        }
        trace!(name = written, uri = %model.uri, "type name unresolved");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::JavaParser;
    use annolint_core::resolve::KnownTypes;

    fn resolver(known: &[&str]) -> JavaResolver {
        let mut types = KnownTypes::new();
        types.extend(known.iter().copied());
        JavaResolver::new(Arc::new(types))
    }

    fn model(source: &str) -> DeclarationModel {
        JavaParser::new().parse("file:///T.java", source).unwrap()
    }

    #[test]
    fn single_type_import_wins() {
        let model = model("package p;\nimport jakarta.inject.Inject;\nimport other.*;\nclass T {}");
        let r = resolver(&["other.Inject"]);
        assert_eq!(r.resolve(&model, "Inject").as_deref(), Some("jakarta.inject.Inject"));
    }

    #[test]
    fn declared_types_resolve_without_search() {
        let model = model("package p;\nclass T { static class Inner {} }");
        let r = resolver(&[]);
        assert_eq!(r.resolve(&model, "Inner").as_deref(), Some("p.T.Inner"));
        assert_eq!(r.resolve(&model, "T").as_deref(), Some("p.T"));
    }

    #[test]
    fn falls_back_to_search() {
        let model = model("package p;\nimport jakarta.ws.rs.*;\nclass T {}");
        let r = resolver(&["jakarta.ws.rs.GET", "p.Helper"]);
        assert_eq!(r.resolve(&model, "GET").as_deref(), Some("jakarta.ws.rs.GET"));
        assert_eq!(r.resolve(&model, "Helper").as_deref(), Some("p.Helper"));
        assert_eq!(r.resolve(&model, "POST"), None);
    }

    #[test]
    fn qualified_names_pass_through() {
        let model = model("class T {}");
        assert_eq!(
            resolver(&[]).resolve(&model, "jakarta.inject.Inject").as_deref(),
            Some("jakarta.inject.Inject")
        );
    }
}
