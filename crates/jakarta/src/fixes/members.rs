use super::stub;
use annolint_api::{CodeActionStub, Diagnostic, ResolveData};
use annolint_core::model::{Declaration, DeclarationModel, Modifier};
use annolint_core::proposal::{
    Mutation, change_return_type, insert_constructor, remove_parameters, replace_modifiers,
};
use annolint_core::quickfix::{ProposalContext, QuickFixModule};
use annolint_core::{AnalysisContext, AnnolintError, Result};

const PARAMETERS_KEY: &str = "parameters";
const KEEP_KEY: &str = "keep";

pub struct ModifierFix {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub title: &'static str,
    pub add: &'static [Modifier],
    pub remove: &'static [Modifier],
}

impl QuickFixModule for ModifierFix {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        stub(ctx, diagnostic, self.id, self.title.to_string(), |data| data)
            .into_iter()
            .collect()
    }

    fn resolve(&self, _ctx: &ProposalContext<'_>, target: &Declaration, _data: &ResolveData) -> Result<Mutation> {
        Ok(replace_modifiers(target, self.add, self.remove))
    }
}

/// Removes parameters of the diagnosed method. With `keep_each`, the payload
/// lists the removable parameters and one action is offered per survivor.
pub struct RemoveParameters {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub keep_each: bool,
}

impl QuickFixModule for RemoveParameters {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        if !self.keep_each {
            return stub(ctx, diagnostic, self.id, "Remove all parameters".to_string(), |data| data)
                .into_iter()
                .collect();
        }
        let removable = diagnostic.data_strings();
        removable
            .iter()
            .filter_map(|keep| {
                let title = format!("Remove all entity parameters except {keep}");
                stub(ctx, diagnostic, self.id, title, |data| {
                    data.with_strings(PARAMETERS_KEY, removable.iter().cloned())
                        .with_str(KEEP_KEY, keep.clone())
                })
            })
            .collect()
    }

    fn resolve(&self, _ctx: &ProposalContext<'_>, target: &Declaration, data: &ResolveData) -> Result<Mutation> {
        let method = target
            .as_method()
            .ok_or_else(|| AnnolintError::Mutation(format!("`{}` is not a method", target.name)))?;
        if !self.keep_each {
            let all: Vec<usize> = (0..method.parameters.len()).collect();
            return remove_parameters(target, &all, None);
        }

        let names = data.strings(PARAMETERS_KEY);
        let removable: Vec<usize> = method
            .parameters
            .iter()
            .enumerate()
            .filter(|(_, p)| names.contains(&p.name))
            .map(|(i, _)| i)
            .collect();
        let keep = data
            .str(KEEP_KEY)
            .and_then(|name| method.parameters.iter().position(|p| p.name == name));
        remove_parameters(target, &removable, keep)
    }
}

pub struct ChangeReturnType {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub type_name: &'static str,
}

impl QuickFixModule for ChangeReturnType {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        let title = format!("Change return type to {}", self.type_name);
        stub(ctx, diagnostic, self.id, title, |data| data)
            .into_iter()
            .collect()
    }

    fn resolve(&self, _ctx: &ProposalContext<'_>, target: &Declaration, _data: &ResolveData) -> Result<Mutation> {
        change_return_type(target, self.type_name)
    }
}

/// Adds a no-argument constructor to the diagnosed type, or to the type owning
/// the diagnosed member.
pub struct InsertConstructor {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub visibility: Modifier,
}

impl QuickFixModule for InsertConstructor {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        let applicable = ctx
            .model
            .declaration_for_range(diagnostic.range)
            .and_then(|target| constructor_owner(ctx.model, target))
            .is_some_and(|owner| insert_constructor(owner, self.visibility).is_ok());
        if !applicable {
            return Vec::new();
        }
        let title = format!("Add a no-arg {} constructor to this class", self.visibility);
        stub(ctx, diagnostic, self.id, title, |data| data)
            .into_iter()
            .collect()
    }

    fn resolve(&self, ctx: &ProposalContext<'_>, target: &Declaration, _data: &ResolveData) -> Result<Mutation> {
        let owner = constructor_owner(ctx.model(), target)
            .ok_or_else(|| AnnolintError::Mutation(format!("no type owns `{}`", target.name)))?;
        insert_constructor(owner, self.visibility)
    }
}

fn constructor_owner<'m>(model: &'m DeclarationModel, target: &'m Declaration) -> Option<&'m Declaration> {
    if target.as_type().is_some() {
        Some(target)
    } else {
        model.parent_of(target).filter(|d| d.as_type().is_some())
    }
}
