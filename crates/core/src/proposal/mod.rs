//! Structural transformations a quick fix performs.
//!
//! Primitives never touch text. They describe what should change on one
//! declaration as a [`Mutation`]; an [`EditConverter`](crate::edit::EditConverter)
//! turns that into edits.

pub mod annotation;
pub mod catalog;
pub mod constructor;
pub mod modifier;
pub mod parameter;
pub mod return_type;
pub mod supertype;

pub use annotation::{AnnotationProposal, remove_annotations, remove_annotations_at};
pub use catalog::{AnnotationCatalog, AnnotationInfo, AttributeType};
pub use constructor::insert_constructor;
pub use modifier::{merge_modifiers, replace_modifiers};
pub use parameter::{prune, remove_parameters};
pub use return_type::change_return_type;
pub use supertype::{extend_class, implement_interface};

use crate::model::{Annotation, BindingKey, Declaration, Modifier, ModifierSet};
use annolint_api::TextRange;

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOp {
    /// Rewrite the annotation at `index` of the target's annotation list.
    ReplaceAnnotation { index: usize, annotation: Annotation },
    /// Add a new annotation; its name is qualified.
    InsertAnnotation { annotation: Annotation },
    RemoveAnnotation { index: usize },
    /// The complete modifier list afterwards. Kept keywords retain their spans.
    SetModifiers { modifiers: ModifierSet },
    /// Indices of the parameters that survive, in order.
    RetainParameters { keep: Vec<usize> },
    SetReturnType { type_name: String },
    InsertConstructor { visibility: Modifier },
    AddInterface { qualified_name: String },
    SetSuperclass { qualified_name: String },
}

/// Changes to one declaration of one file.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub target: TextRange,
    pub target_key: BindingKey,
    pub ops: Vec<MutationOp>,
}

impl Mutation {
    pub fn new(target: &Declaration) -> Self {
        Self {
            target: target.span,
            target_key: target.key.clone(),
            ops: Vec::new(),
        }
    }

    pub fn with(mut self, op: MutationOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn push(&mut self, op: MutationOp) {
        self.ops.push(op);
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
