use thiserror::Error;

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Rejected area-effect construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TraversalError {
    #[error("radius must not be negative, got {radius}")]
    NegativeRadius { radius: i32 },

    #[error("cone radius must be at least 1")]
    ZeroRadius,

    #[error("range must be at least 1")]
    ZeroRange,

    #[error("target {position} is the origin itself")]
    TargetIsOrigin { position: Position },

    #[error("a bolt needs a direction")]
    MissingDirection,
}

impl GameError for TraversalError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeRadius { .. } => "TRAVERSAL_NEGATIVE_RADIUS",
            Self::ZeroRadius => "TRAVERSAL_ZERO_RADIUS",
            Self::ZeroRange => "TRAVERSAL_ZERO_RANGE",
            Self::TargetIsOrigin { .. } => "TRAVERSAL_TARGET_IS_ORIGIN",
            Self::MissingDirection => "TRAVERSAL_MISSING_DIRECTION",
        }
    }
}
