//! Submodule defining the errors used across the crate.

use alloc::string::String;

use crate::ast::expression::PrecedenceTier;
use crate::dialect::Dialect;

/// Errors raised while rendering, converting or rewriting syntax tree nodes.
///
/// Every error is raised synchronously by the operation that failed. Rendering
/// is atomic: a failed render never hands back partial SQL text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The node is well formed but the target dialect cannot express it.
    #[error("{feature} is not supported by the {dialect} dialect")]
    UnsupportedDialectFeature {
        /// Short description of the construct that was rejected.
        feature: &'static str,
        /// The dialect the node was rendered for.
        dialect: Dialect,
    },
    /// The statement kind has no rendering branch for the dialect at all.
    #[error("{statement} cannot be rendered for the {dialect} dialect")]
    UnrecognizedDialect {
        /// The statement kind, e.g. `CREATE TABLE`.
        statement: &'static str,
        /// The dialect the statement was rendered for.
        dialect: Dialect,
    },
    /// A literal's text does not lexically match the requested representation.
    #[error("Literal {literal} cannot be converted to {target}")]
    LiteralConversion {
        /// The literal text as stored in the node.
        literal: String,
        /// The representation that was requested.
        target: &'static str,
    },
    /// A column type rewrite was asked to map a type it has no entry for.
    #[error("Type mapping has no entry for column type {type_name}")]
    MutationInput {
        /// The upper-cased type name missing from the mapping.
        type_name: String,
    },
    /// An operand binds more loosely than the operator embedding it.
    ///
    /// The text would read back as a different tree, e.g. an `OR` under `+`.
    #[error("A {child} operand cannot appear under a {parent} operator")]
    PrecedenceViolation {
        /// Tier of the embedding operator.
        parent: PrecedenceTier,
        /// Tier of the offending operand.
        child: PrecedenceTier,
    },
    /// The tree nests deeper than the configured rendering bound.
    #[error("Syntax tree nesting exceeds the limit of {limit} levels")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        let err = Error::UnsupportedDialectFeature {
            feature: "the % operator",
            dialect: Dialect::Db2,
        };
        assert_eq!(
            err.to_string(),
            "the % operator is not supported by the DB2 dialect"
        );

        let err = Error::MutationInput {
            type_name: "BIGINT".into(),
        };
        assert_eq!(
            err.to_string(),
            "Type mapping has no entry for column type BIGINT"
        );

        let err = Error::PrecedenceViolation {
            parent: PrecedenceTier::Compute,
            child: PrecedenceTier::LogicalOr,
        };
        assert_eq!(
            err.to_string(),
            "A logical OR operand cannot appear under a compute operator"
        );
    }
}
