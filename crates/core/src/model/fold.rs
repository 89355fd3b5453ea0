use super::{Declaration, DeclarationModel};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Type,
    Method,
    Field,
    Parameter,
}

type Callback<'a, A> = Box<dyn FnMut(&Declaration, &mut A) + 'a>;

/// Recursive pre-order fold over the declaration tree, driven by one callback
/// per node kind. Kinds without a callback are traversed but not reported.
///
/// ```ignore
/// let methods = DeclarationFold::new()
///     .on(NodeKind::Method, |decl, acc: &mut Vec<String>| acc.push(decl.name.clone()))
///     .run(&model, Vec::new());
/// ```
pub struct DeclarationFold<'a, A> {
    callbacks: HashMap<NodeKind, Callback<'a, A>>,
}

impl<A> Default for DeclarationFold<'_, A> {
    fn default() -> Self {
        Self {
            callbacks: HashMap::new(),
        }
    }
}

impl<'a, A> DeclarationFold<'a, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(mut self, kind: NodeKind, callback: F) -> Self
    where
        F: FnMut(&Declaration, &mut A) + 'a,
    {
        self.callbacks.insert(kind, Box::new(callback));
        self
    }

    pub fn run(mut self, model: &DeclarationModel, init: A) -> A {
        let mut acc = init;
        for decl in &model.types {
            self.visit(decl, &mut acc);
        }
        acc
    }

    pub fn run_from(mut self, root: &Declaration, init: A) -> A {
        let mut acc = init;
        self.visit(root, &mut acc);
        acc
    }

    fn visit(&mut self, decl: &Declaration, acc: &mut A) {
        if let Some(callback) = self.callbacks.get_mut(&decl.node_kind()) {
            callback(decl, acc);
        }
        for child in decl.children() {
            self.visit(child, acc);
        }
    }
}
