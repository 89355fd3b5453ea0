use crate::model::{Annotation, Declaration, DeclarationModel, TypeRef};
use crate::resolve::{TypeNameResolver, simple_name};

/// What rules and proposals see of one file: the model plus name resolution.
#[derive(Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub model: &'a DeclarationModel,
    pub resolver: &'a dyn TypeNameResolver,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(model: &'a DeclarationModel, resolver: &'a dyn TypeNameResolver) -> Self {
        Self { model, resolver }
    }

    /// `true` when `written` names the type `qualified`.
    ///
    /// The simple names are compared first; the resolver only runs when they
    /// agree.
    pub fn names(&self, written: &str, qualified: &str) -> bool {
        if written.contains('.') {
            return written == qualified;
        }
        if written != simple_name(qualified) {
            return false;
        }
        self.resolver
            .resolve(self.model, written)
            .is_some_and(|q| q == qualified)
    }

    pub fn resolve(&self, written: &str) -> Option<String> {
        self.resolver.resolve(self.model, written)
    }

    pub fn type_is(&self, type_ref: &TypeRef, qualified: &str) -> bool {
        self.names(type_ref.base_name(), qualified)
    }

    pub fn is_annotation(&self, annotation: &Annotation, qualified: &str) -> bool {
        self.names(&annotation.name, qualified)
    }

    /// First annotation of `decl` naming `qualified`.
    pub fn annotation<'d>(&self, decl: &'d Declaration, qualified: &str) -> Option<&'d Annotation> {
        decl.annotations
            .iter()
            .find(|a| self.is_annotation(a, qualified))
    }

    /// Every annotation of `decl` naming `qualified` (repeatable annotations).
    pub fn annotations<'d>(&self, decl: &'d Declaration, qualified: &str) -> Vec<&'d Annotation> {
        decl.annotations
            .iter()
            .filter(|a| self.is_annotation(a, qualified))
            .collect()
    }

    /// Indices into `decl.annotations` naming `qualified`.
    pub fn annotation_indices(&self, decl: &Declaration, qualified: &str) -> Vec<usize> {
        decl.annotations
            .iter()
            .enumerate()
            .filter(|(_, a)| self.is_annotation(a, qualified))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_annotation(&self, decl: &Declaration, qualified: &str) -> bool {
        decl.annotations
            .iter()
            .any(|a| self.is_annotation(a, qualified))
    }

    pub fn has_any_annotation(&self, decl: &Declaration, group: &[&str]) -> bool {
        group.iter().any(|q| self.has_annotation(decl, q))
    }

    /// Members of `group` present on `decl`, in the order they are written.
    pub fn matching_annotations(&self, decl: &Declaration, group: &[&str]) -> Vec<String> {
        let mut found = Vec::new();
        for annotation in &decl.annotations {
            if let Some(q) = group.iter().find(|q| self.is_annotation(annotation, q)) {
                if !found.iter().any(|f: &String| f == q) {
                    found.push((*q).to_string());
                }
            }
        }
        found
    }

    /// Annotations of `decl` whose qualified name starts with `package.`.
    pub fn annotations_in_package(&self, decl: &Declaration, package: &str) -> Vec<String> {
        let prefix = format!("{package}.");
        decl.annotations
            .iter()
            .filter_map(|a| {
                if a.name.contains('.') {
                    Some(a.name.clone())
                } else {
                    self.resolve(&a.name)
                }
            })
            .filter(|q| q.starts_with(&prefix) && !q[prefix.len()..].contains('.'))
            .collect()
    }
}
