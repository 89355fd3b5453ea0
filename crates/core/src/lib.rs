pub mod context;
pub mod diagnostics;
pub mod edit;
pub mod error;
#[cfg(test)]
mod fixture;
pub mod logging;
pub mod model;
pub mod proposal;
pub mod provider;
pub mod quickfix;
pub mod resolve;
pub mod settings;
pub mod text;

pub use context::AnalysisContext;
pub use error::{AnnolintError, Result};
