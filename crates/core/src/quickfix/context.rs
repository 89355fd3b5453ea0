use crate::context::AnalysisContext;
use crate::edit::EditConverter;
use crate::model::DeclarationModel;
use crate::proposal::AnnotationCatalog;
use crate::provider::SourceModelProvider;
use crate::resolve::TypeNameResolver;

/// What a quick-fix module sees while resolving.
pub struct ProposalContext<'a> {
    pub analysis: AnalysisContext<'a>,
    pub catalog: &'a AnnotationCatalog,
}

impl<'a> ProposalContext<'a> {
    pub fn model(&self) -> &'a DeclarationModel {
        self.analysis.model
    }
}

/// Collaborators of one resolve call.
pub struct ResolveRequest<'a> {
    /// Snapshot the stub is resolved against.
    pub model: &'a DeclarationModel,
    pub resolver: &'a dyn TypeNameResolver,
    /// Consulted when the target is missing from `model`.
    pub provider: Option<&'a dyn SourceModelProvider>,
    pub converter: &'a dyn EditConverter,
}
