//! Jakarta EE rule set: rule modules, quick fixes and the attribute catalog
//! they share.

pub mod catalog;
pub mod fixes;
pub mod names;
pub mod rules;

use annolint_core::diagnostics::DiagnosticsEngine;
use annolint_core::quickfix::QuickFixRegistry;
use annolint_core::resolve::KnownTypes;

/// An engine with every rule module registered.
pub fn diagnostics_engine() -> DiagnosticsEngine {
    let mut engine = DiagnosticsEngine::new();
    for rule in rules::modules() {
        engine.register(rule);
    }
    engine
}

/// A registry with every quick fix registered over [`catalog::jakarta_catalog`].
pub fn quick_fix_registry() -> QuickFixRegistry {
    let mut registry = QuickFixRegistry::new(catalog::jakarta_catalog());
    for module in fixes::modules() {
        registry.register(module);
    }
    registry
}

/// The qualified names rules ask about, so that on-demand imports such as
/// `import jakarta.ws.rs.*;` resolve without a classpath.
pub fn known_types() -> KnownTypes {
    use names::*;

    let mut types = KnownTypes::new();
    types.extend([
        annotation::RESOURCE,
        annotation::POST_CONSTRUCT,
        annotation::PRE_DESTROY,
        jaxrs::PATH,
        jaxrs::PROVIDER,
        cdi::PRODUCES,
        inject::INJECT,
        persistence::ENTITY,
        persistence::MAP_KEY,
        persistence::MAP_KEY_CLASS,
        persistence::MAP_KEY_JOIN_COLUMN,
        persistence::MAP_KEY_JOIN_COLUMNS,
        servlet::WEB_SERVLET,
        servlet::WEB_FILTER,
        servlet::WEB_LISTENER,
        servlet::HTTP_SERVLET,
        servlet::FILTER,
    ]);
    for group in [
        jaxrs::HTTP_METHODS,
        jaxrs::NON_ENTITY_PARAMS,
        cdi::SCOPES,
        cdi::INVALID_INJECT_PARAMS,
        servlet::LISTENERS,
        validation::CONSTRAINTS,
        jsonb::ANNOTATIONS,
    ] {
        types.extend(group.iter().copied());
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use annolint_core::resolve::TypeSearch;
    use std::collections::HashSet;

    #[test]
    fn every_rule_code_has_a_unique_owner() {
        let engine = diagnostics_engine();
        let mut seen = HashSet::new();
        for rule in engine.rules() {
            for code in rule.codes() {
                assert!(seen.insert(*code), "{code} reported by two rules");
            }
        }
        assert_eq!(seen.len(), 43);
    }

    #[test]
    fn fixes_only_target_known_codes() {
        let engine = diagnostics_engine();
        let codes: HashSet<&str> = engine.rules().flat_map(|r| r.codes().iter().copied()).collect();
        let mut participants = HashSet::new();
        for module in fixes::modules() {
            assert!(participants.insert(module.participant_id()));
            for code in module.codes() {
                assert!(codes.contains(code), "{code} has a fix but no rule");
            }
        }
    }

    #[test]
    fn known_types_cover_on_demand_imports() {
        let types = known_types();
        assert!(types.type_exists("jakarta.ws.rs.GET"));
        assert!(types.type_exists("jakarta.validation.constraints.NotNull"));
        assert!(!types.type_exists("jakarta.ws.rs.Nope"));
    }
}
