//! Rule modules, one per Jakarta API package.

mod annotations;
mod beanvalidation;
mod cdi;
mod di;
mod jaxrs;
mod jsonb;
mod persistence;
mod servlet;

pub use annotations::AnnotationRules;
pub use beanvalidation::BeanValidationRules;
pub use cdi::CdiRules;
pub use di::InjectRules;
pub use jaxrs::{ResourceConstructorRules, ResourceMethodRules};
pub use jsonb::JsonbRules;
pub use persistence::PersistenceRules;
pub use servlet::ServletRules;

use annolint_core::diagnostics::RuleModule;

pub fn modules() -> Vec<Box<dyn RuleModule>> {
    vec![
        Box::new(AnnotationRules),
        Box::new(ResourceMethodRules),
        Box::new(ResourceConstructorRules),
        Box::new(CdiRules),
        Box::new(InjectRules),
        Box::new(PersistenceRules),
        Box::new(ServletRules),
        Box::new(BeanValidationRules),
        Box::new(JsonbRules),
    ]
}
