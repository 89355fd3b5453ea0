use super::NameScope;
use crate::resolver::context::ResolutionContext;
use annolint_core::resolve::TypeSearch;

/// Semantic fallback: asks the type search for `pkg.Name` within every
/// on-demand import, then within the file's own package.
pub struct PackageScope<'a> {
    pub search: &'a dyn TypeSearch,
}

impl NameScope for PackageScope<'_> {
    fn resolve(&self, name: &str, context: &ResolutionContext<'_>) -> Option<String> {
        // Types conventionally start upper case; skip the search otherwise.
        if !name.chars().next().is_some_and(|c| c.is_uppercase()) {
            return None;
        }
        context
            .on_demand_packages()
            .chain(context.package)
            .map(|pkg| format!("{pkg}.{name}"))
            .find(|candidate| self.search.type_exists(candidate))
    }

    fn name(&self) -> &'static str {
        "Package"
    }
}
