use super::{AnnotationCatalog, Mutation, MutationOp};
use crate::context::AnalysisContext;
use crate::model::annotation::VALUE_ATTRIBUTE;
use crate::model::{Annotation, AnnotationAttribute, AnnotationStyle, AnnotationValue, Declaration};

/// Inserts an annotation or merges attributes into the one already present.
///
/// Existing attributes survive unless listed in `remove`; attributes in `add`
/// are appended only when missing, so applying the same proposal again
/// changes nothing.
pub struct AnnotationProposal<'a> {
    catalog: &'a AnnotationCatalog,
    qualified_name: String,
    add: Vec<String>,
    remove: Vec<String>,
}

impl<'a> AnnotationProposal<'a> {
    pub fn new(catalog: &'a AnnotationCatalog, qualified_name: impl Into<String>) -> Self {
        Self {
            catalog,
            qualified_name: qualified_name.into(),
            add: Vec::new(),
            remove: Vec::new(),
        }
    }

    pub fn add<S: AsRef<str>>(mut self, attributes: &[S]) -> Self {
        self.add
            .extend(attributes.iter().map(|a| a.as_ref().to_string()));
        self
    }

    pub fn remove<S: AsRef<str>>(mut self, attributes: &[S]) -> Self {
        self.remove
            .extend(attributes.iter().map(|a| a.as_ref().to_string()));
        self
    }

    pub fn apply(&self, ctx: &AnalysisContext<'_>, target: &Declaration) -> Mutation {
        let mut mutation = Mutation::new(target);
        match ctx
            .annotation_indices(target, &self.qualified_name)
            .first()
            .copied()
        {
            None => mutation.push(MutationOp::InsertAnnotation {
                annotation: self.synthesize(&self.qualified_name),
            }),
            Some(index) => {
                let existing = &target.annotations[index];
                let merged = self.merge(existing, &self.qualified_name);
                if &merged != existing {
                    mutation.push(MutationOp::ReplaceAnnotation {
                        index,
                        annotation: merged,
                    });
                }
            }
        }
        mutation
    }

    /// A fresh annotation carrying only the attributes to add, each defaulted.
    /// A container gets exactly one element.
    pub fn synthesize(&self, qualified_name: &str) -> Annotation {
        if let Some(element) = self.catalog.container_element(qualified_name) {
            let entry = self.synthesize(element);
            return Annotation {
                name: qualified_name.to_string(),
                style: AnnotationStyle::SingleValue,
                attributes: vec![AnnotationAttribute::new(
                    VALUE_ATTRIBUTE,
                    AnnotationValue::Array(vec![AnnotationValue::Annotation(Box::new(entry))]),
                )],
                span: None,
            };
        }
        let attributes = self
            .add
            .iter()
            .map(|name| {
                AnnotationAttribute::new(
                    name.clone(),
                    self.catalog.default_value(qualified_name, name),
                )
            })
            .collect();
        Annotation::normal(qualified_name, attributes)
    }

    pub fn merge(&self, existing: &Annotation, qualified_name: &str) -> Annotation {
        if let Some(element) = self.catalog.container_element(qualified_name) {
            if let Some(merged) = self.merge_container(existing, element) {
                return merged;
            }
        }

        let mut attributes: Vec<AnnotationAttribute> = existing
            .attributes
            .iter()
            .filter(|a| !self.remove.contains(&a.name))
            .cloned()
            .collect();
        for name in &self.add {
            if !attributes.iter().any(|a| &a.name == name) {
                attributes.push(AnnotationAttribute::new(
                    name.clone(),
                    self.catalog.default_value(qualified_name, name),
                ));
            }
        }

        let mut merged = Annotation {
            name: existing.name.clone(),
            style: existing.style,
            attributes,
            span: existing.span,
        };
        merged.normalize_style();
        merged
    }

    /// `None` when `existing` carries attributes besides `value`, i.e. it is
    /// not used as a container here.
    fn merge_container(&self, existing: &Annotation, element: &str) -> Option<Annotation> {
        let entries: Vec<AnnotationValue> = match existing.attributes.as_slice() {
            [] => Vec::new(),
            [only] if only.name == VALUE_ATTRIBUTE => match &only.value {
                AnnotationValue::Array(items) => items.clone(),
                single @ AnnotationValue::Annotation(_) => vec![single.clone()],
                _ => return None,
            },
            _ => return None,
        };

        let entries = if entries.is_empty() {
            vec![AnnotationValue::Annotation(Box::new(self.synthesize(element)))]
        } else {
            entries
                .into_iter()
                .map(|entry| match entry {
                    AnnotationValue::Annotation(nested) => {
                        AnnotationValue::Annotation(Box::new(self.merge(&nested, element)))
                    }
                    other => other,
                })
                .collect()
        };

        let style = match existing.style {
            AnnotationStyle::Normal => AnnotationStyle::Normal,
            _ => AnnotationStyle::SingleValue,
        };
        Some(Annotation {
            name: existing.name.clone(),
            style,
            attributes: vec![AnnotationAttribute::new(
                VALUE_ATTRIBUTE,
                AnnotationValue::Array(entries),
            )],
            span: existing.span,
        })
    }
}

/// Removes every annotation of `target` naming one of `qualified_names`.
pub fn remove_annotations<S: AsRef<str>>(
    ctx: &AnalysisContext<'_>,
    target: &Declaration,
    qualified_names: &[S],
) -> Mutation {
    let mut indices: Vec<usize> = qualified_names
        .iter()
        .flat_map(|q| ctx.annotation_indices(target, q.as_ref()))
        .collect();
    indices.sort_unstable();
    indices.dedup();
    remove_annotations_at(target, &indices)
}

pub fn remove_annotations_at(target: &Declaration, indices: &[usize]) -> Mutation {
    let mut mutation = Mutation::new(target);
    for &index in indices {
        if index < target.annotations.len() {
            mutation.push(MutationOp::RemoveAnnotation { index });
        }
    }
    mutation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{self, ImportsOnly};
    use crate::proposal::{AnnotationInfo, AttributeType};

    const RESOURCE: &str = "jakarta.annotation.Resource";

    fn string(value: &str) -> AnnotationValue {
        AnnotationValue::String(value.to_string())
    }

    fn apply_merged(mutation: &Mutation, target: &Declaration) -> Declaration {
        let mut next = target.clone();
        for op in &mutation.ops {
            match op {
                MutationOp::ReplaceAnnotation { index, annotation } => {
                    next.annotations[*index] = annotation.clone()
                }
                MutationOp::InsertAnnotation { annotation } => {
                    next.annotations.push(annotation.clone())
                }
                other => panic!("unexpected op {other:?}"),
            }
        }
        next
    }

    #[test]
    fn inserts_missing_annotation_with_defaults() {
        let catalog = AnnotationCatalog::new();
        let field = fixture::field("Bean", "ds", "DataSource");
        let model = fixture::model(vec![fixture::class("Bean", vec![field.clone()])], &[]);
        let ctx = AnalysisContext::new(&model, &ImportsOnly);

        let mutation = AnnotationProposal::new(&catalog, RESOURCE)
            .add(&["name"])
            .apply(&ctx, &field);
        match mutation.ops.as_slice() {
            [MutationOp::InsertAnnotation { annotation }] => {
                assert_eq!(annotation.to_string(), "@jakarta.annotation.Resource(name = \"\")");
            }
            ops => panic!("unexpected {ops:?}"),
        }
    }

    #[test]
    fn repeated_insert_is_idempotent() {
        let catalog = AnnotationCatalog::new();
        let field = fixture::annotated(
            fixture::field("Bean", "ds", "DataSource"),
            Annotation::normal("Resource", vec![AnnotationAttribute::new("x", string(""))]),
        );
        let model = fixture::model(vec![fixture::class("Bean", vec![field.clone()])], &[RESOURCE]);
        let ctx = AnalysisContext::new(&model, &ImportsOnly);
        let proposal = AnnotationProposal::new(&catalog, RESOURCE).add(&["y"]);

        let once = apply_merged(&proposal.apply(&ctx, &field), &field);
        assert_eq!(once.annotations.len(), 1);
        assert_eq!(once.annotations[0].attribute_names(), vec!["x", "y"]);

        let twice_mutation = proposal.apply(&ctx, &once);
        assert!(twice_mutation.is_empty());
        let twice = apply_merged(&twice_mutation, &once);
        assert_eq!(twice.annotations[0].to_string(), "@Resource(x = \"\", y = \"\")");
    }

    #[test]
    fn removal_drops_listed_attributes_only() {
        let catalog = AnnotationCatalog::new();
        let existing = Annotation::normal(
            "WebServlet",
            vec![
                AnnotationAttribute::new("value", string("/a")),
                AnnotationAttribute::new("urlPatterns", string("/b")),
                AnnotationAttribute::new("name", string("s")),
            ],
        );
        let merged = AnnotationProposal::new(&catalog, "jakarta.servlet.annotation.WebServlet")
            .remove(&["urlPatterns"])
            .merge(&existing, "jakarta.servlet.annotation.WebServlet");
        assert_eq!(merged.attribute_names(), vec!["value", "name"]);
    }

    #[test]
    fn single_value_form_becomes_named() {
        let catalog = AnnotationCatalog::new();
        let existing = Annotation {
            name: "WebServlet".to_string(),
            style: AnnotationStyle::SingleValue,
            attributes: vec![AnnotationAttribute::new("value", string("/a"))],
            span: None,
        };
        let merged = AnnotationProposal::new(&catalog, "x.WebServlet")
            .add(&["name"])
            .merge(&existing, "x.WebServlet");
        assert_eq!(merged.to_string(), "@WebServlet(value = \"/a\", name = \"\")");
    }

    #[test]
    fn container_merges_into_every_entry() {
        let mut catalog = AnnotationCatalog::new();
        catalog.insert(AnnotationInfo::new("p.Columns").container_of("p.Column"));
        catalog.insert(AnnotationInfo::new("p.Column").attribute("name", AttributeType::String));

        let existing = Annotation {
            name: "Columns".to_string(),
            style: AnnotationStyle::SingleValue,
            attributes: vec![AnnotationAttribute::new(
                "value",
                AnnotationValue::Array(vec![
                    AnnotationValue::Annotation(Box::new(Annotation::marker("Column"))),
                    AnnotationValue::Annotation(Box::new(Annotation::normal(
                        "Column",
                        vec![AnnotationAttribute::new("name", string("k"))],
                    ))),
                ]),
            )],
            span: None,
        };
        let proposal = AnnotationProposal::new(&catalog, "p.Columns").add(&["name", "ref"]);
        let merged = proposal.merge(&existing, "p.Columns");
        assert_eq!(
            merged.to_string(),
            "@Columns({@Column(name = \"\", ref = \"\"), @Column(name = \"k\", ref = \"\")})"
        );

        let empty = Annotation::marker("Columns");
        assert_eq!(
            proposal.merge(&empty, "p.Columns").to_string(),
            "@Columns({@p.Column(name = \"\", ref = \"\")})"
        );
    }

    #[test]
    fn class_typed_attribute_defaults_to_null() {
        let mut catalog = AnnotationCatalog::new();
        catalog.insert(AnnotationInfo::new("p.Key").attribute("type", AttributeType::Class));
        let added = AnnotationProposal::new(&catalog, "p.Key")
            .add(&["type"])
            .synthesize("p.Key");
        assert_eq!(added.to_string(), "@p.Key(type = null)");
    }

    #[test]
    fn removes_every_matching_annotation() {
        let method = fixture::annotated(
            fixture::annotated(
                fixture::method("Bean", "init", &[], Some("void")),
                Annotation::marker("Produces"),
            ),
            Annotation::marker("Inject"),
        );
        let model = fixture::model(
            vec![fixture::class("Bean", vec![method.clone()])],
            &["jakarta.enterprise.inject.Produces", "jakarta.inject.Inject"],
        );
        let ctx = AnalysisContext::new(&model, &ImportsOnly);
        let mutation = remove_annotations(&ctx, &method, &["jakarta.inject.Inject"]);
        assert_eq!(mutation.ops, vec![MutationOp::RemoveAnnotation { index: 1 }]);
    }
}
