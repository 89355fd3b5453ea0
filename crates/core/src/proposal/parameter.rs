use super::{Mutation, MutationOp};
use crate::error::{AnnolintError, Result};
use crate::model::Declaration;

/// Indices that survive pruning `count` parameters: every removable one goes
/// except `keep`. Relative order is preserved.
pub fn prune(count: usize, removable: &[usize], keep: Option<usize>) -> Vec<usize> {
    (0..count)
        .filter(|i| !removable.contains(i) || Some(*i) == keep)
        .collect()
}

pub fn remove_parameters(target: &Declaration, removable: &[usize], keep: Option<usize>) -> Result<Mutation> {
    let method = target.as_method().ok_or_else(|| {
        AnnolintError::Mutation(format!("{} `{}` has no parameter list", target.describe(), target.name))
    })?;
    let kept = prune(method.parameters.len(), removable, keep);
    let mut mutation = Mutation::new(target);
    if kept.len() != method.parameters.len() {
        mutation.push(MutationOp::RetainParameters { keep: kept });
    }
    Ok(mutation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[test]
    fn keeps_only_the_chosen_removable() {
        assert_eq!(prune(3, &[0, 1, 2], Some(1)), vec![1]);
        assert_eq!(prune(3, &[0, 2], None), vec![1]);
        assert_eq!(prune(4, &[1, 3], Some(3)), vec![0, 2, 3]);
        assert!(prune(2, &[0, 1], None).is_empty());
    }

    #[test]
    fn removes_all_parameters() {
        let method = fixture::method("Bean", "init", &[("String", "a"), ("int", "b")], Some("int"));
        let mutation = remove_parameters(&method, &[0, 1], None).unwrap();
        assert_eq!(mutation.ops, vec![MutationOp::RetainParameters { keep: vec![] }]);
    }

    #[test]
    fn fields_have_no_parameters() {
        let field = fixture::field("Bean", "name", "String");
        assert!(matches!(
            remove_parameters(&field, &[0], None),
            Err(AnnolintError::Mutation(_))
        ));
    }
}
