pub mod action;
pub mod diagnostic;
pub mod range;

pub use action::*;
pub use diagnostic::*;
pub use range::*;
