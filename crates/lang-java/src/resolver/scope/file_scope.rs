use super::NameScope;
use crate::resolver::context::ResolutionContext;

/// Types declared in the file itself, nested ones included.
pub struct FileScope;

impl NameScope for FileScope {
    fn resolve(&self, name: &str, context: &ResolutionContext<'_>) -> Option<String> {
        context
            .model
            .declarations()
            .into_iter()
            .filter(|d| d.name == name)
            .find_map(|d| d.as_type().map(|t| t.qualified_name.clone()))
    }

    fn name(&self) -> &'static str {
        "File"
    }
}
