use crate::error::Result;
use crate::model::DeclarationModel;
use crate::proposal::Mutation;
use annolint_api::TextEdit;

/// Renders a structural mutation as text edits against the snapshot it was
/// computed from. Edits come back sorted by offset and never overlap.
pub trait EditConverter: Send + Sync {
    fn convert(&self, model: &DeclarationModel, mutation: &Mutation) -> Result<Vec<TextEdit>>;
}
