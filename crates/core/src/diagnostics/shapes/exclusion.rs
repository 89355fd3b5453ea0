use crate::context::AnalysisContext;
use crate::model::Declaration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    AtMostOne,
    ExactlyOne,
}

impl Cardinality {
    pub fn allows(self, count: usize) -> bool {
        match self {
            Cardinality::AtMostOne => count <= 1,
            Cardinality::ExactlyOne => count == 1,
        }
    }
}

/// Members of `group` on `decl` when their number violates `cardinality`.
/// The list is what the diagnostic carries as payload.
pub fn mutual_exclusion(
    ctx: &AnalysisContext<'_>,
    decl: &Declaration,
    group: &[&str],
    cardinality: Cardinality,
) -> Option<Vec<String>> {
    let matched = ctx.matching_annotations(decl, group);
    if cardinality.allows(matched.len()) {
        None
    } else {
        Some(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{self, ImportsOnly};
    use crate::model::Annotation;

    const SCOPES: [&str; 2] = [
        "jakarta.enterprise.context.RequestScoped",
        "jakarta.enterprise.context.ApplicationScoped",
    ];

    #[test]
    fn reports_matched_names_on_violation() {
        let bean = fixture::annotated(
            fixture::annotated(fixture::class("Bean", vec![]), Annotation::marker("RequestScoped")),
            Annotation::marker("ApplicationScoped"),
        );
        let model = fixture::model(vec![bean.clone()], &SCOPES);
        let ctx = AnalysisContext::new(&model, &ImportsOnly);

        let matched = mutual_exclusion(&ctx, &bean, &SCOPES, Cardinality::AtMostOne).unwrap();
        assert_eq!(matched, SCOPES.to_vec());

        let plain = fixture::class("Plain", vec![]);
        assert!(mutual_exclusion(&ctx, &plain, &SCOPES, Cardinality::AtMostOne).is_none());
        assert_eq!(
            mutual_exclusion(&ctx, &plain, &SCOPES, Cardinality::ExactlyOne),
            Some(vec![])
        );
    }
}
