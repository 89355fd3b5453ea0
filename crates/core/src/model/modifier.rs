use annolint_api::TextRange;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Sealed,
    NonSealed,
    Strictfp,
    Default,
    Synchronized,
    Native,
    Transient,
    Volatile,
}

impl Modifier {
    pub const VISIBILITY: [Modifier; 3] = [Modifier::Public, Modifier::Protected, Modifier::Private];

    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Sealed => "sealed",
            Modifier::NonSealed => "non-sealed",
            Modifier::Strictfp => "strictfp",
            Modifier::Default => "default",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "public" => Modifier::Public,
            "protected" => Modifier::Protected,
            "private" => Modifier::Private,
            "abstract" => Modifier::Abstract,
            "static" => Modifier::Static,
            "final" => Modifier::Final,
            "sealed" => Modifier::Sealed,
            "non-sealed" => Modifier::NonSealed,
            "strictfp" => Modifier::Strictfp,
            "default" => Modifier::Default,
            "synchronized" => Modifier::Synchronized,
            "native" => Modifier::Native,
            "transient" => Modifier::Transient,
            "volatile" => Modifier::Volatile,
            _ => return None,
        })
    }

    /// Members of the mutually exclusive visibility group. Package-private is
    /// the absence of all three.
    pub fn is_visibility(self) -> bool {
        Self::VISIBILITY.contains(&self)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    PackagePrivate,
}

/// One keyword as it appears in the source. Synthesized keywords have no span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierToken {
    pub modifier: Modifier,
    pub span: Option<TextRange>,
}

/// Ordered modifier keywords of a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierSet {
    tokens: Vec<ModifierToken>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens(tokens: Vec<ModifierToken>) -> Self {
        Self { tokens }
    }

    pub fn from_modifiers(modifiers: &[Modifier]) -> Self {
        let mut set = Self::new();
        for &m in modifiers {
            set.insert(m);
        }
        set
    }

    /// Adds `modifier`; a visibility keyword replaces any visibility already present.
    pub fn insert(&mut self, modifier: Modifier) {
        if self.contains(modifier) {
            return;
        }
        if modifier.is_visibility() {
            self.tokens.retain(|t| !t.modifier.is_visibility());
        }
        self.tokens.push(ModifierToken {
            modifier,
            span: None,
        });
    }

    pub fn tokens(&self) -> &[ModifierToken] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.tokens.iter().map(|t| t.modifier)
    }

    pub fn to_vec(&self) -> Vec<Modifier> {
        self.iter().collect()
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.tokens.iter().any(|t| t.modifier == modifier)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn visibility(&self) -> Visibility {
        for m in self.iter() {
            match m {
                Modifier::Public => return Visibility::Public,
                Modifier::Protected => return Visibility::Protected,
                Modifier::Private => return Visibility::Private,
                _ => {}
            }
        }
        Visibility::PackagePrivate
    }

    pub fn is_public(&self) -> bool {
        self.contains(Modifier::Public)
    }

    pub fn is_static(&self) -> bool {
        self.contains(Modifier::Static)
    }

    pub fn is_final(&self) -> bool {
        self.contains(Modifier::Final)
    }

    pub fn is_abstract(&self) -> bool {
        self.contains(Modifier::Abstract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_single_visibility() {
        let mut set = ModifierSet::from_modifiers(&[Modifier::Private, Modifier::Static]);
        set.insert(Modifier::Public);
        assert_eq!(set.to_vec(), vec![Modifier::Static, Modifier::Public]);
        assert_eq!(set.visibility(), Visibility::Public);
    }

    #[test]
    fn keywords_round_trip() {
        for m in [Modifier::NonSealed, Modifier::Transient, Modifier::Default] {
            assert_eq!(Modifier::from_keyword(m.keyword()), Some(m));
        }
        assert_eq!(Modifier::from_keyword("record"), None);
        assert_eq!(ModifierSet::new().visibility(), Visibility::PackagePrivate);
    }
}
