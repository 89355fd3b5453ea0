use annolint_api::TextEdit;
use annolint_core::model::{Annotation, AnnotationValue, DeclarationModel};
use annolint_core::resolve::{package_of, simple_name};
use std::collections::BTreeSet;

/// Decides how a qualified type name is written in one file and collects the
/// imports that choice requires.
pub(crate) struct Naming<'a> {
    model: &'a DeclarationModel,
    added: BTreeSet<String>,
}

impl<'a> Naming<'a> {
    pub fn new(model: &'a DeclarationModel) -> Self {
        Self {
            model,
            added: BTreeSet::new(),
        }
    }

    /// Simple name when it is visible or can be imported; the qualified name
    /// when another type already owns the simple name.
    pub fn type_name(&mut self, qualified: &str) -> String {
        let simple = simple_name(qualified);
        let Some(package) = package_of(qualified) else {
            return qualified.to_string();
        };

        let visible = self.model.package.as_deref() == Some(package)
            || package == "java.lang"
            || self.model.imports.iter().any(|i| {
                !i.is_static && ((!i.on_demand && i.path == qualified) || (i.on_demand && i.path == package))
            })
            || self.added.contains(qualified);
        if visible {
            return simple.to_string();
        }

        let taken = self
            .model
            .imports
            .iter()
            .any(|i| !i.is_static && i.simple_name() == Some(simple))
            || self.added.iter().any(|a| simple_name(a) == simple)
            || self.model.declarations().iter().any(|d| d.as_type().is_some() && d.name == simple);
        if taken {
            return qualified.to_string();
        }

        self.added.insert(qualified.to_string());
        simple.to_string()
    }

    /// Copy of `annotation` with every synthesized name rewritten for this
    /// file. Names already written in the source are kept.
    pub fn localize(&mut self, annotation: &Annotation) -> Annotation {
        let mut out = annotation.clone();
        if annotation.is_synthesized() && annotation.name.contains('.') {
            out.name = self.type_name(&annotation.name);
        }
        for attribute in &mut out.attributes {
            attribute.value = self.localize_value(&attribute.value);
        }
        out
    }

    fn localize_value(&mut self, value: &AnnotationValue) -> AnnotationValue {
        match value {
            AnnotationValue::Annotation(nested) => AnnotationValue::Annotation(Box::new(self.localize(nested))),
            AnnotationValue::Array(items) => {
                AnnotationValue::Array(items.iter().map(|v| self.localize_value(v)).collect())
            }
            other => other.clone(),
        }
    }

    /// One edit inserting every collected import, or `None` when nothing was
    /// added.
    pub fn import_edit(&self) -> Option<TextEdit> {
        if self.added.is_empty() {
            return None;
        }
        let lines: String = self
            .added
            .iter()
            .map(|q| format!("import {q};"))
            .collect::<Vec<_>>()
            .join("\n");

        let edit = if let Some(last) = self.model.imports.iter().map(|i| i.span.end).max() {
            TextEdit::insert(last, format!("\n{lines}"))
        } else if let Some(package) = self.model.package_span {
            TextEdit::insert(package.end, format!("\n\n{lines}"))
        } else {
            TextEdit::insert(0, format!("{lines}\n\n"))
        };
        Some(edit)
    }
}
