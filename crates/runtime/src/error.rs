//! Errors surfaced by the turn loop.
//!
//! Gameplay failures are not errors; they come back as failed ticks. These
//! variants mean the loop itself cannot make progress.
use thiserror::Error;
use turn_core::{EntityId, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("provider returned an action for {provided:?} while polling {expected}")]
    ActorMismatch {
        expected: EntityId,
        provided: Option<EntityId>,
    },

    #[error("action {action} kept substituting alternates past the limit of {limit}")]
    AlternateLoop { action: &'static str, limit: usize },

    #[error("queue still busy after {ticks} ticks")]
    TickBudgetExhausted { ticks: usize },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorMismatch { .. } => ErrorSeverity::Validation,
            Self::AlternateLoop { .. } => ErrorSeverity::Internal,
            Self::TickBudgetExhausted { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorMismatch { .. } => "RUNTIME_ACTOR_MISMATCH",
            Self::AlternateLoop { .. } => "RUNTIME_ALTERNATE_LOOP",
            Self::TickBudgetExhausted { .. } => "RUNTIME_TICK_BUDGET_EXHAUSTED",
        }
    }
}
