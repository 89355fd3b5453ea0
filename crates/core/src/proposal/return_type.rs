use super::{Mutation, MutationOp};
use crate::error::{AnnolintError, Result};
use crate::model::Declaration;

pub fn change_return_type(target: &Declaration, type_name: &str) -> Result<Mutation> {
    let method = target
        .as_method()
        .filter(|m| !m.is_constructor)
        .ok_or_else(|| {
            AnnolintError::Mutation(format!(
                "{} `{}` has no return type",
                target.describe(),
                target.name
            ))
        })?;
    let mut mutation = Mutation::new(target);
    if method.return_type.as_ref().is_none_or(|t| t.name != type_name) {
        mutation.push(MutationOp::SetReturnType {
            type_name: type_name.to_string(),
        });
    }
    Ok(mutation)
}
