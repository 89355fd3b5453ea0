use super::stub;
use annolint_api::{CodeActionStub, Diagnostic, ResolveData};
use annolint_core::model::Declaration;
use annolint_core::proposal::{Mutation, extend_class, implement_interface};
use annolint_core::quickfix::{ProposalContext, QuickFixModule};
use annolint_core::resolve::simple_name;
use annolint_core::{AnalysisContext, AnnolintError, Result};

const INTERFACE_KEY: &str = "interface";

/// One action per candidate interface.
pub struct ImplementInterface {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub interfaces: &'static [&'static str],
}

impl QuickFixModule for ImplementInterface {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        self.interfaces
            .iter()
            .filter_map(|&interface| {
                let title = format!("Let the class implement '{}'", simple_name(interface));
                stub(ctx, diagnostic, self.id, title, |data| data.with_str(INTERFACE_KEY, interface))
            })
            .collect()
    }

    fn resolve(&self, ctx: &ProposalContext<'_>, target: &Declaration, data: &ResolveData) -> Result<Mutation> {
        let interface = data
            .str(INTERFACE_KEY)
            .ok_or_else(|| AnnolintError::Mutation("no interface recorded".to_string()))?;
        implement_interface(&ctx.analysis, target, interface)
    }
}

pub struct ExtendClass {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub superclass: &'static str,
}

impl QuickFixModule for ExtendClass {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        let title = format!("Let the class extend '{}'", simple_name(self.superclass));
        stub(ctx, diagnostic, self.id, title, |data| data)
            .into_iter()
            .collect()
    }

    fn resolve(&self, ctx: &ProposalContext<'_>, target: &Declaration, _data: &ResolveData) -> Result<Mutation> {
        extend_class(&ctx.analysis, target, self.superclass)
    }
}
