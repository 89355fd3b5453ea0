//! Renders mutations as text edits against the snapshot they were built from.

mod naming;

use annolint_api::{TextEdit, TextRange};
use annolint_core::edit::EditConverter;
use annolint_core::model::{Declaration, DeclarationModel, Modifier, ModifierSet, TypeKind};
use annolint_core::proposal::{Mutation, MutationOp};
use annolint_core::text::{indentation_at, skip_spaces, skip_whitespace};
use annolint_core::{AnnolintError, Result};
use naming::Naming;

const INDENT_UNIT: &str = "    ";

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaEditConverter;

impl JavaEditConverter {
    pub fn new() -> Self {
        Self
    }
}

impl EditConverter for JavaEditConverter {
    fn convert(&self, model: &DeclarationModel, mutation: &Mutation) -> Result<Vec<TextEdit>> {
        let target = model
            .find_by_span(mutation.target)
            .filter(|d| d.key == mutation.target_key)
            .or_else(|| model.find_by_key(&mutation.target_key))
            .ok_or_else(|| AnnolintError::Edit(format!("no declaration `{}`", mutation.target_key)))?;

        let mut writer = EditWriter {
            model,
            src: &model.text,
            target,
            naming: Naming::new(model),
            edits: Vec::new(),
        };
        for op in &mutation.ops {
            writer.apply(op)?;
        }
        writer.finish()
    }
}

struct EditWriter<'a> {
    model: &'a DeclarationModel,
    src: &'a str,
    target: &'a Declaration,
    naming: Naming<'a>,
    edits: Vec<TextEdit>,
}

impl<'a> EditWriter<'a> {
    fn apply(&mut self, op: &MutationOp) -> Result<()> {
        match op {
            MutationOp::ReplaceAnnotation { index, annotation } => {
                let span = self.annotation_span(*index)?;
                let rendered = self.naming.localize(annotation).to_string();
                self.edits.push(TextEdit::replace(span, rendered));
            }
            MutationOp::InsertAnnotation { annotation } => {
                let rendered = self.naming.localize(annotation).to_string();
                let at = self.target.span.start;
                let text = if self.target.as_parameter().is_some() {
                    format!("{rendered} ")
                } else {
                    format!("{rendered}\n{}", indentation_at(self.src, at))
                };
                self.edits.push(TextEdit::insert(at, text));
            }
            MutationOp::RemoveAnnotation { index } => {
                let span = self.annotation_span(*index)?;
                let end = skip_whitespace(self.src, span.end);
                self.edits.push(TextEdit::delete(TextRange::new(span.start, end)));
            }
            MutationOp::SetModifiers { modifiers } => self.set_modifiers(modifiers),
            MutationOp::RetainParameters { keep } => {
                let method = self.target.as_method().ok_or_else(|| self.shape_error("parameters"))?;
                let kept = keep
                    .iter()
                    .map(|&i| {
                        method
                            .parameters
                            .get(i)
                            .map(|p| self.model.slice(p.span).to_string())
                            .ok_or_else(|| AnnolintError::Edit(format!("no parameter #{i}")))
                    })
                    .collect::<Result<Vec<_>>>()?;
                self.edits
                    .push(TextEdit::replace(method.parameters_span, kept.join(", ")));
            }
            MutationOp::SetReturnType { type_name } => {
                let span = self
                    .target
                    .as_method()
                    .and_then(|m| m.return_type.as_ref())
                    .map(|t| t.span)
                    .ok_or_else(|| self.shape_error("a return type"))?;
                let written = self.written_type(type_name);
                self.edits.push(TextEdit::replace(span, written));
            }
            MutationOp::InsertConstructor { visibility } => {
                let ty = self.target.as_type().ok_or_else(|| self.shape_error("a body"))?;
                let indent = match ty.members.first() {
                    Some(member) => indentation_at(self.src, member.span.start).to_string(),
                    None => format!("{}{INDENT_UNIT}", indentation_at(self.src, self.target.span.start)),
                };
                let text = format!(
                    "\n{indent}{visibility} {}() {{\n{indent}}}\n",
                    self.target.name
                );
                self.edits.push(TextEdit::insert(ty.body_open, text));
            }
            MutationOp::AddInterface { qualified_name } => {
                let ty = self.target.as_type().ok_or_else(|| self.shape_error("supertypes"))?;
                let name = self.naming.type_name(qualified_name);
                let edit = match ty.interfaces_span {
                    Some(list) => TextEdit::insert(list.end, format!(", {name}")),
                    None if ty.kind == TypeKind::Interface => {
                        TextEdit::insert(ty.extends_offset, format!(" extends {name}"))
                    }
                    None => TextEdit::insert(ty.implements_offset, format!(" implements {name}")),
                };
                self.edits.push(edit);
            }
            MutationOp::SetSuperclass { qualified_name } => {
                let ty = self.target.as_type().ok_or_else(|| self.shape_error("a superclass"))?;
                let name = self.naming.type_name(qualified_name);
                let edit = match &ty.superclass {
                    Some(existing) => TextEdit::replace(existing.span, name),
                    None => TextEdit::insert(ty.extends_offset, format!(" extends {name}")),
                };
                self.edits.push(edit);
            }
        }
        Ok(())
    }

    /// Keywords gone from `modifiers` are deleted with their trailing spaces.
    /// An added visibility leads the list: it overwrites a dropped keyword
    /// written before every kept one, or goes in front of the first kept one.
    /// Other added keywords follow the last kept keyword.
    fn set_modifiers(&mut self, modifiers: &ModifierSet) {
        let kept: Vec<TextRange> = modifiers.tokens().iter().filter_map(|t| t.span).collect();
        let mut dropped: Vec<TextRange> = self
            .target
            .modifiers
            .tokens()
            .iter()
            .filter_map(|t| t.span)
            .filter(|span| !kept.contains(span))
            .collect();
        dropped.sort_by_key(|s| s.start);
        let (mut leading, mut trailing): (Vec<Modifier>, Vec<Modifier>) = modifiers
            .tokens()
            .iter()
            .filter(|t| t.span.is_none())
            .map(|t| t.modifier)
            .partition(|m| m.is_visibility());
        let first_kept = kept.iter().map(|s| s.start).min();
        let last_kept = kept.iter().map(|s| s.end).max();
        if last_kept.is_none() {
            leading.append(&mut trailing);
        }

        let mut dropped = dropped.into_iter().peekable();
        if !leading.is_empty() {
            let text = keywords(&leading);
            let in_place = dropped.next_if(|d| first_kept.is_none_or(|k| d.start < k));
            match (in_place, first_kept) {
                (Some(first), _) => self.edits.push(TextEdit::replace(first, text)),
                (None, Some(at)) => self.edits.push(TextEdit::insert(at, format!("{text} "))),
                (None, None) => self
                    .edits
                    .push(TextEdit::insert(self.target.head_offset, format!("{text} "))),
            }
        }
        if let Some(end) = last_kept {
            if !trailing.is_empty() {
                self.edits
                    .push(TextEdit::insert(end, format!(" {}", keywords(&trailing))));
            }
        }
        for span in dropped {
            let end = skip_spaces(self.src, span.end);
            self.edits.push(TextEdit::delete(TextRange::new(span.start, end)));
        }
    }

    fn annotation_span(&self, index: usize) -> Result<TextRange> {
        self.target
            .annotations
            .get(index)
            .and_then(|a| a.span)
            .ok_or_else(|| AnnolintError::Edit(format!("no written annotation #{index} on `{}`", self.target.name)))
    }

    fn written_type(&mut self, type_name: &str) -> String {
        if type_name.contains('.') && !type_name.contains('<') {
            self.naming.type_name(type_name)
        } else {
            type_name.to_string()
        }
    }

    fn shape_error(&self, what: &str) -> AnnolintError {
        AnnolintError::Edit(format!("{} `{}` has no {what}", self.target.describe(), self.target.name))
    }

    fn finish(mut self) -> Result<Vec<TextEdit>> {
        self.edits.extend(self.naming.import_edit());
        self.edits.sort_by_key(|e| e.range.start);
        for pair in self.edits.windows(2) {
            if pair[1].range.start < pair[0].range.end {
                return Err(AnnolintError::Edit(format!(
                    "overlapping edits at {}..{}",
                    pair[1].range.start, pair[0].range.end
                )));
            }
        }
        Ok(self.edits)
    }
}

fn keywords(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(|m| m.keyword())
        .collect::<Vec<_>>()
        .join(" ")
}
