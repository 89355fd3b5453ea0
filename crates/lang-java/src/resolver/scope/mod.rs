use super::context::ResolutionContext;

pub mod file_scope;
pub mod import_scope;
pub mod package_scope;

pub use file_scope::FileScope;
pub use import_scope::ImportScope;
pub use package_scope::PackageScope;

pub trait NameScope {
    fn resolve(&self, name: &str, context: &ResolutionContext<'_>) -> Option<String>;

    fn name(&self) -> &'static str;
}
