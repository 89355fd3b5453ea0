use super::{Mutation, MutationOp};
use crate::context::AnalysisContext;
use crate::error::{AnnolintError, Result};
use crate::model::{Declaration, TypeDecl};

fn type_of<'a>(target: &'a Declaration) -> Result<&'a TypeDecl> {
    target.as_type().ok_or_else(|| {
        AnnolintError::Mutation(format!("{} `{}` is not a type", target.describe(), target.name))
    })
}

/// Adds `qualified_name` to the implements list (the extends list of an
/// interface). Empty when the type already names it.
pub fn implement_interface(
    ctx: &AnalysisContext<'_>,
    target: &Declaration,
    qualified_name: &str,
) -> Result<Mutation> {
    let ty = type_of(target)?;
    let mut mutation = Mutation::new(target);
    if !ty.interfaces.iter().any(|i| ctx.type_is(i, qualified_name)) {
        mutation.push(MutationOp::AddInterface {
            qualified_name: qualified_name.to_string(),
        });
    }
    Ok(mutation)
}

/// Sets the superclass, replacing an existing `extends` clause.
pub fn extend_class(ctx: &AnalysisContext<'_>, target: &Declaration, qualified_name: &str) -> Result<Mutation> {
    let ty = type_of(target)?;
    let mut mutation = Mutation::new(target);
    if !ty
        .superclass
        .as_ref()
        .is_some_and(|s| ctx.type_is(s, qualified_name))
    {
        mutation.push(MutationOp::SetSuperclass {
            qualified_name: qualified_name.to_string(),
        });
    }
    Ok(mutation)
}
