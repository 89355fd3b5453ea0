pub mod edit;
pub mod parser;
pub mod resolver;

use annolint_core::edit::EditConverter;
use annolint_core::model::DeclarationModel;
use annolint_core::resolve::{TypeNameResolver, TypeSearch};
use annolint_core::Result;
use std::sync::Arc;

pub use edit::JavaEditConverter;
pub use parser::{JavaParser, ParsingProvider};
pub use resolver::JavaResolver;

/// Everything the engine needs to work on Java sources.
#[derive(Clone)]
pub struct JavaPlugin {
    parser: JavaParser,
    resolver: Arc<JavaResolver>,
    converter: Arc<JavaEditConverter>,
}

impl JavaPlugin {
    pub fn new(search: Arc<dyn TypeSearch>) -> Self {
        Self {
            parser: JavaParser::new(),
            resolver: Arc::new(JavaResolver::new(search)),
            converter: Arc::new(JavaEditConverter::new()),
        }
    }

    pub fn name(&self) -> &str {
        "java"
    }

    pub fn supported_extensions(&self) -> &[&str] {
        &["java"]
    }

    pub fn parse(&self, uri: &str, source: &str) -> Result<DeclarationModel> {
        self.parser.parse(uri, source)
    }

    pub fn parser(&self) -> &JavaParser {
        &self.parser
    }

    pub fn resolver(&self) -> Arc<dyn TypeNameResolver> {
        self.resolver.clone()
    }

    pub fn converter(&self) -> Arc<dyn EditConverter> {
        self.converter.clone()
    }
}
