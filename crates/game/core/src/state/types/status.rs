//! Timed conditions on actors.
//!
//! Conditions count down once per upkeep. A condition whose counter reaches
//! zero stays in the set, inert, until its completion action removes it; that
//! way the completion narration and the bonus reversal happen in one place
//! and an expired condition is reported exactly once.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Kinds of timed condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ConditionKind {
    /// Speed penalty from cold.
    Frozen,
    /// Speed bonus.
    Hasted,
    /// Damage each upkeep.
    Poisoned,
    /// Speed penalty.
    Slowed,
    /// Melee damage penalty.
    Diseased,
}

/// A single timed condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub kind: ConditionKind,
    /// Upkeeps remaining. Zero means expired and awaiting completion.
    pub turns_left: u32,
    /// Strength of the condition (speed steps, damage per upkeep, ...).
    pub magnitude: i32,
}

impl Condition {
    pub fn is_expired(&self) -> bool {
        self.turns_left == 0
    }
}

/// How an application changed the condition set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionChange {
    /// The condition was not active before.
    Started,
    /// The condition was active; duration and magnitude took the larger value.
    Extended,
    /// No free slot.
    Rejected,
}

/// Active conditions on an actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conditions {
    entries: ArrayVec<Condition, { GameConfig::MAX_CONDITIONS }>,
}

impl Conditions {
    pub fn empty() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    pub fn get(&self, kind: ConditionKind) -> Option<&Condition> {
        self.entries.iter().find(|c| c.kind == kind)
    }

    /// True while the condition is present and not yet expired.
    pub fn is_active(&self, kind: ConditionKind) -> bool {
        self.get(kind).is_some_and(|c| !c.is_expired())
    }

    /// Magnitude of an active condition, zero otherwise.
    pub fn magnitude(&self, kind: ConditionKind) -> i32 {
        self.get(kind)
            .filter(|c| !c.is_expired())
            .map_or(0, |c| c.magnitude)
    }

    /// Adds or strengthens a condition.
    ///
    /// If the condition already exists, duration and magnitude are raised to
    /// the larger of the old and new values.
    pub fn apply(&mut self, kind: ConditionKind, turns: u32, magnitude: i32) -> ConditionChange {
        if let Some(existing) = self.entries.iter_mut().find(|c| c.kind == kind) {
            let was_active = !existing.is_expired();
            existing.turns_left = existing.turns_left.max(turns);
            existing.magnitude = existing.magnitude.max(magnitude);
            return if was_active {
                ConditionChange::Extended
            } else {
                ConditionChange::Started
            };
        }

        match self.entries.try_push(Condition {
            kind,
            turns_left: turns,
            magnitude,
        }) {
            Ok(()) => ConditionChange::Started,
            Err(_) => ConditionChange::Rejected,
        }
    }

    /// Removes a condition, returning it if it was present.
    pub fn remove(&mut self, kind: ConditionKind) -> Option<Condition> {
        let index = self.entries.iter().position(|c| c.kind == kind)?;
        Some(self.entries.remove(index))
    }

    /// Counts every active condition down by one upkeep and returns the kinds
    /// that expired on this call.
    pub fn tick(&mut self) -> ArrayVec<ConditionKind, { GameConfig::MAX_CONDITIONS }> {
        let mut expired = ArrayVec::new();
        for condition in self.entries.iter_mut().filter(|c| !c.is_expired()) {
            condition.turns_left -= 1;
            if condition.is_expired() {
                expired.push(condition.kind);
            }
        }
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_then_extend_keeps_larger_values() {
        let mut conditions = Conditions::empty();
        assert_eq!(
            conditions.apply(ConditionKind::Hasted, 3, 2),
            ConditionChange::Started
        );
        assert_eq!(
            conditions.apply(ConditionKind::Hasted, 5, 1),
            ConditionChange::Extended
        );
        let haste = conditions.get(ConditionKind::Hasted).copied();
        assert_eq!(
            haste,
            Some(Condition {
                kind: ConditionKind::Hasted,
                turns_left: 5,
                magnitude: 2
            })
        );
    }

    #[test]
    fn tick_reports_expiry_once() {
        let mut conditions = Conditions::empty();
        conditions.apply(ConditionKind::Poisoned, 2, 1);

        assert!(conditions.tick().is_empty());
        assert_eq!(conditions.tick().as_slice(), &[ConditionKind::Poisoned]);
        assert!(conditions.tick().is_empty());

        assert!(!conditions.is_active(ConditionKind::Poisoned));
        assert_eq!(conditions.magnitude(ConditionKind::Poisoned), 0);
        assert!(conditions.remove(ConditionKind::Poisoned).is_some());
        assert!(conditions.is_empty());
    }

    #[test]
    fn reapplying_expired_condition_restarts_it() {
        let mut conditions = Conditions::empty();
        conditions.apply(ConditionKind::Slowed, 1, 1);
        conditions.tick();
        assert_eq!(
            conditions.apply(ConditionKind::Slowed, 4, 1),
            ConditionChange::Started
        );
        assert!(conditions.is_active(ConditionKind::Slowed));
    }

    #[test]
    fn full_set_rejects_new_kinds() {
        let mut conditions = Conditions::empty();
        for _ in 0..GameConfig::MAX_CONDITIONS {
            conditions.entries.push(Condition {
                kind: ConditionKind::Frozen,
                turns_left: 1,
                magnitude: 1,
            });
        }
        assert_eq!(
            conditions.apply(ConditionKind::Hasted, 1, 1),
            ConditionChange::Rejected
        );
    }
}
