//! Two-phase code actions.
//!
//! `propose` is cheap: it only decides whether a fix applies and records what
//! `resolve` needs to redo the work. `resolve` relocates the declaration,
//! builds the mutation and converts it to edits. Nothing is kept between the
//! two calls.

mod context;

pub use context::{ProposalContext, ResolveRequest};

use crate::context::AnalysisContext;
use crate::error::{AnnolintError, Result, panic_message};
use crate::model::{BindingKey, Declaration, DeclarationModel};
use crate::proposal::{AnnotationCatalog, Mutation};
use annolint_api::{CodeActionStub, Diagnostic, ResolveData, ResolvedEdit, TextRange};
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{debug, error, warn};

pub trait QuickFixModule: Send + Sync {
    /// Identifier stored in resolve data to route `resolve` back here.
    fn participant_id(&self) -> &'static str;

    /// Diagnostic codes this module offers fixes for.
    fn codes(&self) -> &'static [&'static str];

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub>;

    fn resolve(&self, ctx: &ProposalContext<'_>, target: &Declaration, data: &ResolveData) -> Result<Mutation>;
}

/// Resolve data pointing at the declaration that owns `diagnostic`, or `None`
/// when nothing encloses its range.
pub fn resolve_data_for(
    ctx: &AnalysisContext<'_>,
    diagnostic: &Diagnostic,
    participant: &str,
) -> Option<ResolveData> {
    let target = ctx.model.declaration_for_range(diagnostic.range)?;
    Some(
        ResolveData::new(ctx.model.uri.clone(), participant, diagnostic.range)
            .with_code(diagnostic.code.clone())
            .with_binding_key(Some(target.key.to_string())),
    )
}

/// Relocates the declaration a stub was proposed for: by range first, checked
/// against the binding key, then by binding key alone.
pub fn locate<'m>(model: &'m DeclarationModel, data: &ResolveData) -> Option<&'m Declaration> {
    let key = data.binding_key.as_ref().map(|k| BindingKey(k.clone()));
    let by_range = model.declaration_for_range(data.range);
    match (&key, by_range) {
        (None, found) => found,
        (Some(key), Some(found)) if &found.key == key => Some(found),
        (Some(key), _) => model.find_by_key(key),
    }
}

/// Maps codes to quick-fix modules. Built once by the host and shared by
/// reference.
pub struct QuickFixRegistry {
    modules: Vec<Box<dyn QuickFixModule>>,
    by_code: HashMap<String, Vec<usize>>,
    by_participant: HashMap<String, usize>,
    catalog: AnnotationCatalog,
}

impl QuickFixRegistry {
    pub fn new(catalog: AnnotationCatalog) -> Self {
        Self {
            modules: Vec::new(),
            by_code: HashMap::new(),
            by_participant: HashMap::new(),
            catalog,
        }
    }

    pub fn register(&mut self, module: Box<dyn QuickFixModule>) {
        let index = self.modules.len();
        for code in module.codes() {
            self.by_code.entry(code.to_string()).or_default().push(index);
        }
        let previous = self
            .by_participant
            .insert(module.participant_id().to_string(), index);
        if previous.is_some() {
            warn!(participant = module.participant_id(), "participant registered twice");
        }
        self.modules.push(module);
    }

    pub fn catalog(&self) -> &AnnotationCatalog {
        &self.catalog
    }

    pub fn has_fixes_for(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Stubs for one diagnostic from every module handling its code.
    pub fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        let Some(indices) = self.by_code.get(&diagnostic.code) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for &index in indices {
            let module = &self.modules[index];
            match catch_unwind(AssertUnwindSafe(|| module.propose(ctx, diagnostic))) {
                Ok(stubs) => out.extend(stubs),
                Err(payload) => error!(
                    participant = module.participant_id(),
                    code = %diagnostic.code,
                    "propose panicked: {}",
                    panic_message(payload.as_ref())
                ),
            }
        }
        out
    }

    /// Stubs for every diagnostic intersecting `range`.
    pub fn code_actions(
        &self,
        ctx: &AnalysisContext<'_>,
        range: TextRange,
        diagnostics: &[Diagnostic],
    ) -> Vec<CodeActionStub> {
        diagnostics
            .iter()
            .filter(|d| d.range.intersects(range))
            .flat_map(|d| self.propose(ctx, d))
            .collect()
    }

    /// Computes the edit for a stub. Every failure is logged and yields `None`.
    pub fn resolve(&self, data: &ResolveData, request: &ResolveRequest<'_>) -> Option<ResolvedEdit> {
        let Some(&index) = self.by_participant.get(&data.participant) else {
            debug!(participant = %data.participant, "no such quick-fix participant");
            return None;
        };
        let module = &self.modules[index];

        let reparsed;
        let (model, target) = match locate(request.model, data) {
            Some(target) => (request.model, target),
            None => {
                let Some(provider) = request.provider else {
                    debug!(uri = %data.uri, "target declaration not found");
                    return None;
                };
                reparsed = match provider.parse(&data.uri) {
                    Ok(model) => model,
                    Err(e) => {
                        warn!(uri = %data.uri, "reparse for resolve failed: {}", e);
                        return None;
                    }
                };
                match locate(&reparsed, data) {
                    Some(target) => (&reparsed, target),
                    None => {
                        debug!(uri = %data.uri, key = ?data.binding_key, "target declaration not found after reparse");
                        return None;
                    }
                }
            }
        };

        let ctx = ProposalContext {
            analysis: AnalysisContext::new(model, request.resolver),
            catalog: &self.catalog,
        };
        let outcome = catch_unwind(AssertUnwindSafe(|| module.resolve(&ctx, target, data)))
            .unwrap_or_else(|payload| Err(AnnolintError::Internal(panic_message(payload.as_ref()))));
        let mutation = match outcome {
            Ok(mutation) => mutation,
            Err(e) => {
                warn!(participant = %data.participant, target = %target.key, "cannot build mutation: {}", e);
                return None;
            }
        };

        match request.converter.convert(model, &mutation) {
            Ok(edits) => Some(ResolvedEdit::single(data.uri.clone(), edits)),
            Err(e) => {
                warn!(participant = %data.participant, "cannot convert mutation: {}", e);
                None
            }
        }
    }
}
