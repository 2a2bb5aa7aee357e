//! Outcome of one processing step.

use bitflags::bitflags;

use super::Action;

bitflags! {
    /// Flag set carried by an [`ActionResult`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ResultFlags: u8 {
        /// The action will not be processed again.
        const DONE = 1 << 0;
        /// The loop should stop and let the player see what happened.
        const NEEDS_PAUSE = 1 << 1;
        /// The attempt was rejected. Always accompanied by `DONE`.
        const FAILED = 1 << 2;
        /// The loop may ask whether to abort a repeated behaviour.
        const NEEDS_CANCEL_CHECK = 1 << 3;
    }
}

/// Immutable outcome of one [`Action::process`] call.
///
/// Only the canonical constructors exist, so `FAILED` without `DONE` cannot
/// be built. A result carrying an alternate means "run this action instead,
/// without consuming a turn"; its flags are empty and must not be consulted.
#[derive(Debug)]
#[must_use]
pub struct ActionResult {
    flags: ResultFlags,
    alternate: Option<Action>,
}

impl ActionResult {
    const fn with_flags(flags: ResultFlags) -> Self {
        Self {
            flags,
            alternate: None,
        }
    }

    pub const fn done() -> Self {
        Self::with_flags(ResultFlags::DONE)
    }

    pub const fn done_and_pause() -> Self {
        Self::with_flags(ResultFlags::DONE.union(ResultFlags::NEEDS_PAUSE))
    }

    /// In-progress step of a multi-step action.
    pub const fn not_done() -> Self {
        Self::with_flags(ResultFlags::empty())
    }

    pub const fn fail() -> Self {
        Self::with_flags(ResultFlags::DONE.union(ResultFlags::FAILED))
    }

    pub const fn check_for_cancel() -> Self {
        Self::with_flags(ResultFlags::DONE.union(ResultFlags::NEEDS_CANCEL_CHECK))
    }

    /// Substitute `action` for the one that produced this result.
    pub fn alternate(action: impl Into<Action>) -> Self {
        Self {
            flags: ResultFlags::empty(),
            alternate: Some(action.into()),
        }
    }

    pub fn flags(&self) -> ResultFlags {
        self.flags
    }

    pub fn is_done(&self) -> bool {
        self.flags.contains(ResultFlags::DONE)
    }

    /// Done and not failed.
    pub fn succeeded(&self) -> bool {
        self.alternate.is_none() && self.is_done() && !self.is_failed()
    }

    pub fn is_failed(&self) -> bool {
        self.flags.contains(ResultFlags::FAILED)
    }

    pub fn needs_pause(&self) -> bool {
        self.flags.contains(ResultFlags::NEEDS_PAUSE)
    }

    pub fn needs_cancel_check(&self) -> bool {
        self.flags.contains(ResultFlags::NEEDS_CANCEL_CHECK)
    }

    pub fn has_alternate(&self) -> bool {
        self.alternate.is_some()
    }

    pub fn alternate_action(&self) -> Option<&Action> {
        self.alternate.as_ref()
    }

    /// Splits off the alternate, or hands the result back if there is none.
    pub fn into_alternate(self) -> Result<Action, Self> {
        match self.alternate {
            Some(action) => Ok(action),
            None => Err(self),
        }
    }
}
