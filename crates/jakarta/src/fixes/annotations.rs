use super::{mentions, stub};
use annolint_api::{CodeActionStub, Diagnostic, ResolveData};
use annolint_core::model::Declaration;
use annolint_core::proposal::{AnnotationProposal, Mutation, remove_annotations};
use annolint_core::quickfix::{ProposalContext, QuickFixModule};
use annolint_core::resolve::simple_name;
use annolint_core::{AnalysisContext, AnnolintError, Result};

const ANNOTATIONS_KEY: &str = "annotations";

/// Adds attributes to an annotation, or to every entry of its container when
/// the declaration carries the container instead.
pub struct InsertAttributes {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub annotation: &'static str,
    pub container: Option<&'static str>,
    pub attributes: &'static [&'static str],
}

impl QuickFixModule for InsertAttributes {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        let simple = simple_name(self.annotation);
        let title = match self.attributes {
            [one] => format!("Insert the attribute '{one}' to @{simple}"),
            many => format!("Insert the attributes {} to @{simple}", many.join(", ")),
        };
        stub(ctx, diagnostic, self.id, title, |data| data)
            .into_iter()
            .collect()
    }

    fn resolve(&self, ctx: &ProposalContext<'_>, target: &Declaration, _data: &ResolveData) -> Result<Mutation> {
        let annotation = match self.container {
            Some(container) if ctx.analysis.has_annotation(target, container) => container,
            _ => self.annotation,
        };
        Ok(AnnotationProposal::new(ctx.catalog, annotation)
            .add(self.attributes)
            .apply(&ctx.analysis, target))
    }
}

pub struct RemoveAttribute {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub annotation: &'static str,
    pub attribute: &'static str,
}

impl QuickFixModule for RemoveAttribute {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        let title = format!(
            "Remove the attribute '{}' from @{}",
            self.attribute,
            simple_name(self.annotation)
        );
        stub(ctx, diagnostic, self.id, title, |data| data)
            .into_iter()
            .collect()
    }

    fn resolve(&self, ctx: &ProposalContext<'_>, target: &Declaration, _data: &ResolveData) -> Result<Mutation> {
        if !ctx.analysis.has_annotation(target, self.annotation) {
            return Err(AnnolintError::Mutation(format!(
                "`{}` carries no @{}",
                target.name,
                simple_name(self.annotation)
            )));
        }
        Ok(AnnotationProposal::new(ctx.catalog, self.annotation)
            .remove(&[self.attribute])
            .apply(&ctx.analysis, target))
    }
}

/// Removes a fixed set of annotations.
pub struct RemoveAnnotations {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub annotations: &'static [&'static str],
}

impl QuickFixModule for RemoveAnnotations {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        let title = format!("Remove {}", mentions(self.annotations));
        stub(ctx, diagnostic, self.id, title, |data| data)
            .into_iter()
            .collect()
    }

    fn resolve(&self, ctx: &ProposalContext<'_>, target: &Declaration, _data: &ResolveData) -> Result<Mutation> {
        Ok(remove_annotations(&ctx.analysis, target, self.annotations))
    }
}

/// How [`RemoveFlagged`] turns the annotation names a diagnostic carries into
/// actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flagged {
    /// One action per name, removing that annotation.
    Each,
    /// One action removing all of them.
    All,
    /// One action per name, removing every other one.
    AllButOne,
}

/// Removes annotations named in the diagnostic payload.
pub struct RemoveFlagged {
    pub id: &'static str,
    pub codes: &'static [&'static str],
    pub mode: Flagged,
}

impl RemoveFlagged {
    fn action(
        &self,
        ctx: &AnalysisContext<'_>,
        diagnostic: &Diagnostic,
        title: String,
        remove: Vec<String>,
    ) -> Option<CodeActionStub> {
        stub(ctx, diagnostic, self.id, title, |data| {
            data.with_strings(ANNOTATIONS_KEY, remove)
        })
    }
}

impl QuickFixModule for RemoveFlagged {
    fn participant_id(&self) -> &'static str {
        self.id
    }

    fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    fn propose(&self, ctx: &AnalysisContext<'_>, diagnostic: &Diagnostic) -> Vec<CodeActionStub> {
        let flagged = diagnostic.data_strings();
        if flagged.is_empty() {
            return Vec::new();
        }
        match self.mode {
            Flagged::Each => flagged
                .iter()
                .filter_map(|name| {
                    let title = format!("Remove {}", mentions(std::slice::from_ref(name)));
                    self.action(ctx, diagnostic, title, vec![name.clone()])
                })
                .collect(),
            Flagged::All => {
                let title = format!("Remove {}", mentions(&flagged));
                self.action(ctx, diagnostic, title, flagged.clone())
                    .into_iter()
                    .collect()
            }
            Flagged::AllButOne => flagged
                .iter()
                .filter_map(|keep| {
                    let others: Vec<String> = flagged.iter().filter(|n| *n != keep).cloned().collect();
                    let title = format!("Remove {}", mentions(&others));
                    self.action(ctx, diagnostic, title, others)
                })
                .collect(),
        }
    }

    fn resolve(&self, ctx: &ProposalContext<'_>, target: &Declaration, data: &ResolveData) -> Result<Mutation> {
        let names = data.strings(ANNOTATIONS_KEY);
        if names.is_empty() {
            return Err(AnnolintError::Mutation("no annotations recorded to remove".to_string()));
        }
        Ok(remove_annotations(&ctx.analysis, target, &names))
    }
}
