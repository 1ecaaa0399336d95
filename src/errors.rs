//! Error types with diagnostic codes using miette
//!
//! Routing itself never fails: these faults come from building shape
//! descriptors and from asking for a routing approximation of a shape
//! family that has none.

use miette::Diagnostic;
use thiserror::Error;

use crate::element::ElementType;
use crate::types::NumericError;

/// Errors raised while turning element geometry into a queryable shape
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("shape not supported: {kind}")]
    #[diagnostic(
        code(arrowroute::shape::unsupported),
        help("bind to a rectangle, image, iframe, embeddable, diamond or ellipse")
    )]
    Unsupported { kind: ElementType },

    #[error("polygon needs at least {needed} vertices, got {got}")]
    #[diagnostic(code(arrowroute::shape::too_few_vertices))]
    TooFewVertices { needed: usize, got: usize },

    #[error("invalid {what}: {source}")]
    #[diagnostic(code(arrowroute::shape::invalid_numeric))]
    InvalidNumeric {
        what: &'static str,
        #[source]
        source: NumericError,
    },
}

impl ShapeError {
    pub(crate) fn numeric(what: &'static str) -> impl FnOnce(NumericError) -> ShapeError {
        move |source| ShapeError::InvalidNumeric { what, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn unsupported_names_the_family() {
        let err = ShapeError::Unsupported { kind: ElementType::Freedraw };
        assert_eq!(err.to_string(), "shape not supported: freedraw");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("arrowroute::shape::unsupported"));
    }

    #[test]
    fn numeric_wraps_source() {
        let err = ShapeError::numeric("half width")(NumericError::Negative);
        assert_eq!(err.to_string(), "invalid half width: value is negative");
        assert!(std::error::Error::source(&err).is_some());
    }
}
