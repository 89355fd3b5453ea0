//! tree-sitter front end producing the declaration model.

mod annotations;
mod declarations;
mod syntax;

use annolint_core::model::DeclarationModel;
use annolint_core::provider::SourceModelProvider;
use annolint_core::{AnnolintError, Result};
use declarations::DeclarationBuilder;
use tracing::debug;

#[derive(Clone)]
pub struct JavaParser {
    pub language: tree_sitter::Language,
}

impl JavaParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    pub fn parse_tree(&self, source: &str) -> Result<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| AnnolintError::Parsing(e.to_string()))?;
        parser
            .parse(source, None)
            .ok_or_else(|| AnnolintError::Parsing("tree-sitter returned no tree".to_string()))
    }

    /// Parses one compilation unit. Syntax errors do not fail the parse; the
    /// declarations tree-sitter could still recognize are kept.
    pub fn parse(&self, uri: &str, source: &str) -> Result<DeclarationModel> {
        let tree = self.parse_tree(source)?;
        let root = tree.root_node();
        if root.has_error() {
            debug!(uri, "source has syntax errors");
        }

        let mut model = DeclarationModel::new(uri, source);
        if let Some((package, span)) = declarations::package(root, source) {
            model.package = Some(package);
            model.package_span = Some(span);
        }
        model.imports = declarations::imports(root, source);

        let builder = DeclarationBuilder {
            src: source,
            package: model.package.as_deref(),
        };
        let types = syntax::named_children(root)
            .into_iter()
            .filter_map(|node| builder.type_declaration(node, None))
            .collect();
        model.types = types;
        Ok(model)
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses whatever text `read` returns for a URI.
pub struct ParsingProvider<F> {
    parser: JavaParser,
    read: F,
}

impl<F> ParsingProvider<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    pub fn new(parser: JavaParser, read: F) -> Self {
        Self { parser, read }
    }
}

impl<F> SourceModelProvider for ParsingProvider<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn parse(&self, uri: &str) -> Result<DeclarationModel> {
        let text = (self.read)(uri)
            .ok_or_else(|| AnnolintError::Api(annolint_api::ApiError::UnknownDocument(uri.to_string())))?;
        self.parser.parse(uri, &text)
    }
}
