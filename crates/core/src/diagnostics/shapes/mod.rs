//! Reusable rule shapes. Each returns findings for one declaration; concrete
//! rule modules pick codes and messages.

pub mod attributes;
pub mod constructors;
pub mod exclusion;
pub mod lifecycle;

pub use attributes::{missing_attribute_code, missing_attributes};
pub use constructors::{ConstructorVerdict, arbitrate_constructors};
pub use exclusion::{Cardinality, mutual_exclusion};
pub use lifecycle::{LifecycleCodes, lifecycle_method_shape};

use crate::model::Declaration;
use annolint_api::{Diagnostic, Severity};

/// `code` on `decl` unless it is declared `public`.
pub fn require_public(decl: &Declaration, code: &str, message: impl Into<String>) -> Option<Diagnostic> {
    if decl.modifiers.is_public() {
        None
    } else {
        Some(Diagnostic::new(code, Severity::Error, decl.name_span, message))
    }
}
