use super::{Mutation, MutationOp};
use crate::model::{Declaration, Modifier, ModifierSet, ModifierToken};

/// Merges modifier changes into an existing list.
///
/// Walking the existing keywords in order: a keyword listed in `remove` is
/// dropped; a visibility keyword is dropped when `add` brings its own
/// visibility; everything else is kept with its span. Added keywords are
/// appended afterwards, so at most one visibility keyword ever remains.
pub fn merge_modifiers(existing: &ModifierSet, add: &[Modifier], remove: &[Modifier]) -> ModifierSet {
    let adds_visibility = add.iter().any(|m| m.is_visibility());
    let mut tokens: Vec<ModifierToken> = existing
        .tokens()
        .iter()
        .filter(|t| !remove.contains(&t.modifier))
        .filter(|t| !(adds_visibility && t.modifier.is_visibility()))
        .cloned()
        .collect();
    for &modifier in add {
        if !tokens.iter().any(|t| t.modifier == modifier) {
            tokens.push(ModifierToken {
                modifier,
                span: None,
            });
        }
    }
    ModifierSet::from_tokens(tokens)
}

pub fn replace_modifiers(target: &Declaration, add: &[Modifier], remove: &[Modifier]) -> Mutation {
    let merged = merge_modifiers(&target.modifiers, add, remove);
    let mut mutation = Mutation::new(target);
    if merged != target.modifiers {
        mutation.push(MutationOp::SetModifiers { modifiers: merged });
    }
    mutation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Visibility;
    use annolint_api::TextRange;

    fn written(modifiers: &[(Modifier, usize)]) -> ModifierSet {
        ModifierSet::from_tokens(
            modifiers
                .iter()
                .map(|&(modifier, at)| ModifierToken {
                    modifier,
                    span: Some(TextRange::new(at, at + modifier.keyword().len())),
                })
                .collect(),
        )
    }

    #[test]
    fn new_visibility_replaces_old() {
        let existing = written(&[(Modifier::Private, 0), (Modifier::Static, 8)]);
        let merged = merge_modifiers(&existing, &[Modifier::Public], &[]);
        assert_eq!(merged.to_vec(), vec![Modifier::Static, Modifier::Public]);
        assert_eq!(merged.visibility(), Visibility::Public);
        assert!(!merged.contains(Modifier::Private));
        assert!(!merged.contains(Modifier::Protected));
    }

    #[test]
    fn removal_wins_over_add() {
        let existing = written(&[(Modifier::Public, 0), (Modifier::Static, 7), (Modifier::Final, 14)]);
        let merged = merge_modifiers(&existing, &[], &[Modifier::Static]);
        assert_eq!(merged.to_vec(), vec![Modifier::Public, Modifier::Final]);
        assert!(merged.tokens().iter().all(|t| t.span.is_some()));
    }

    #[test]
    fn adding_present_keyword_keeps_it_once() {
        let existing = written(&[(Modifier::Public, 0)]);
        let merged = merge_modifiers(&existing, &[Modifier::Public], &[]);
        assert_eq!(merged.to_vec(), vec![Modifier::Public]);
        assert!(merged.tokens()[0].span.is_none());
    }

    #[test]
    fn non_visibility_add_keeps_existing_visibility() {
        let existing = written(&[(Modifier::Protected, 0)]);
        let merged = merge_modifiers(&existing, &[Modifier::Final], &[]);
        assert_eq!(merged.to_vec(), vec![Modifier::Protected, Modifier::Final]);
    }
}
