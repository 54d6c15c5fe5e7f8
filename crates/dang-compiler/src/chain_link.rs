//! Chain link resolution for input fields sourced from other decisions

use crate::error::{CompileError, Result};
use dang_core::ChainLink;

/// Leading component every source reference must carry
pub const SOURCE_PREFIX: &str = "Decision";

/// Resolve a dotted source reference such as `Decision.pricing.riskScore`.
///
/// An empty reference means the field is supplied directly and has no link.
/// Anything other than exactly three non-empty components led by `Decision`
/// fails with `UnrecognizedSourceComponent`.
pub fn resolve_chain_link(reference: &str, destination_key: &str) -> Result<Option<ChainLink>> {
    if reference.is_empty() {
        return Ok(None);
    }

    let components: Vec<&str> = reference.split('.').collect();
    match components.as_slice() {
        [prefix, decision_name, source_key]
            if *prefix == SOURCE_PREFIX && !decision_name.is_empty() && !source_key.is_empty() =>
        {
            Ok(Some(ChainLink {
                decision_name: decision_name.to_string(),
                source_key: source_key.to_string(),
                destination_key: destination_key.to_string(),
            }))
        }
        _ => Err(CompileError::UnrecognizedSourceComponent(
            reference.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_valid_reference() {
        let link = resolve_chain_link("Decision.pricing.score", "base_score")
            .unwrap()
            .unwrap();

        assert_eq!(
            link,
            ChainLink {
                decision_name: "pricing".to_string(),
                source_key: "score".to_string(),
                destination_key: "base_score".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_reference_has_no_link() {
        assert_eq!(resolve_chain_link("", "age"), Ok(None));
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        assert_eq!(
            resolve_chain_link("Foo.pricing.score", "x"),
            Err(CompileError::UnrecognizedSourceComponent(
                "Foo.pricing.score".to_string()
            ))
        );
        assert!(resolve_chain_link("decision.pricing.score", "x").is_err());
    }

    #[test]
    fn test_wrong_component_count_rejected() {
        for reference in ["Decision", "Decision.pricing", "Decision.pricing.score.extra", "."] {
            assert!(
                matches!(
                    resolve_chain_link(reference, "x"),
                    Err(CompileError::UnrecognizedSourceComponent(_))
                ),
                "expected '{}' to be rejected",
                reference
            );
        }
    }

    #[test]
    fn test_empty_components_rejected() {
        assert!(resolve_chain_link("Decision..score", "x").is_err());
        assert!(resolve_chain_link("Decision.pricing.", "x").is_err());
    }
}
