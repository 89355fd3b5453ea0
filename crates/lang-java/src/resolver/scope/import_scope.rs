use super::NameScope;
use crate::resolver::context::ResolutionContext;

/// Single-type imports, matched by simple name.
pub struct ImportScope;

impl NameScope for ImportScope {
    fn resolve(&self, name: &str, context: &ResolutionContext<'_>) -> Option<String> {
        context
            .model
            .imports
            .iter()
            .filter(|imp| !imp.is_static)
            .find(|imp| imp.simple_name() == Some(name))
            .map(|imp| imp.path.clone())
    }

    fn name(&self) -> &'static str {
        "Import"
    }
}
