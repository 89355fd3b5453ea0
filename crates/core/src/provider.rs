use crate::error::Result;
use crate::model::DeclarationModel;

/// Source of parsed files, consulted again at resolve time when the target
/// declaration is not part of the snapshot the request carried.
pub trait SourceModelProvider: Send + Sync {
    fn parse(&self, uri: &str) -> Result<DeclarationModel>;
}
