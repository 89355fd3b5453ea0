use annolint_core::model::DeclarationModel;

/// One lookup of a simple type name in one file.
pub struct ResolutionContext<'a> {
    pub model: &'a DeclarationModel,
    pub name: &'a str,
    pub package: Option<&'a str>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(model: &'a DeclarationModel, name: &'a str) -> Self {
        Self {
            model,
            name,
            package: model.package.as_deref().filter(|p| !p.is_empty()),
        }
    }

    /// Packages named by on-demand, non-static imports.
    pub fn on_demand_packages(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.model
            .imports
            .iter()
            .filter(|i| i.on_demand && !i.is_static)
            .map(|i| i.path.as_str())
    }
}
