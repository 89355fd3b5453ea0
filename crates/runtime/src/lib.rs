//! The service a language server host builds once and hands to its request
//! handlers.

pub mod convert;
pub mod documents;
mod service;

pub use annolint_core::logging::LoggingConfig;
pub use annolint_core::settings::DiagnosticsSettings;
pub use documents::{Document, DocumentStore};
pub use service::AnnolintService;

use std::sync::Arc;

/// A service over a fresh document store, with the Jakarta rule set and
/// default settings.
pub fn build_default_service() -> (Arc<DocumentStore>, AnnolintService) {
    let documents = Arc::new(DocumentStore::new());
    let service = AnnolintService::new(DiagnosticsSettings::default(), documents.clone());
    (documents, service)
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, config: &LoggingConfig) -> impl Drop {
    annolint_core::logging::init_logging(component, config)
}
