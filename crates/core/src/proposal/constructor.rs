use super::{Mutation, MutationOp};
use crate::error::{AnnolintError, Result};
use crate::model::{Declaration, Modifier, TypeKind};

/// Adds `<visibility> Name() {}` as the first member of a class. Fails when
/// the class already declares a no-arg constructor.
pub fn insert_constructor(target: &Declaration, visibility: Modifier) -> Result<Mutation> {
    match target.as_type() {
        Some(ty) if ty.kind == TypeKind::Class => {
            let has_no_arg = ty
                .constructors()
                .any(|c| c.as_method().is_some_and(|m| m.parameters.is_empty()));
            if has_no_arg {
                return Err(AnnolintError::Mutation(format!(
                    "`{}` already declares a no-arg constructor",
                    target.name
                )));
            }
            Ok(Mutation::new(target).with(MutationOp::InsertConstructor { visibility }))
        }
        _ => Err(AnnolintError::Mutation(format!(
            "cannot add a constructor to {} `{}`",
            target.describe(),
            target.name
        ))),
    }
}
