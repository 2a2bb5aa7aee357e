use crate::state::EntityId;

/// Category of a narration line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LogKind {
    /// Neutral information.
    Message,
    /// Something good happened to the player.
    Good,
    /// Something bad happened to the player.
    Bad,
    /// An attempted action was rejected.
    Fail,
    /// An action ran but had no effect.
    DidNotWork,
    /// Rare, important events.
    Emphasize,
}

impl LogKind {
    /// The same event seen from the other side.
    pub const fn swapped(self) -> LogKind {
        match self {
            LogKind::Good => LogKind::Bad,
            LogKind::Bad => LogKind::Good,
            other => other,
        }
    }

    /// Failure chatter that only matters when it concerns the player.
    pub const fn is_informational_failure(self) -> bool {
        matches!(self, LogKind::Fail | LogKind::DidNotWork)
    }
}

/// Grammatical person of a noun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Person {
    /// "you"
    Second,
    /// "the goblin", "it"
    Third,
}

/// Something narration can talk about.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Noun {
    entity: Option<EntityId>,
    text: String,
    person: Person,
}

impl Noun {
    /// The player, addressed as "you".
    pub fn player(id: EntityId) -> Self {
        Self {
            entity: Some(id),
            text: "you".to_string(),
            person: Person::Second,
        }
    }

    /// A named entity, rendered with a definite article.
    pub fn entity(id: EntityId, name: &str) -> Self {
        Self {
            entity: Some(id),
            text: format!("the {name}"),
            person: Person::Third,
        }
    }

    /// A thing that is not an entity, rendered verbatim ("the door").
    pub fn thing(text: impl Into<String>) -> Self {
        Self {
            entity: None,
            text: text.into(),
            person: Person::Third,
        }
    }

    pub fn person(&self) -> Person {
        self.person
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_player(&self) -> bool {
        self.entity.is_some_and(EntityId::is_player)
    }

    /// "your" / "the goblin's"
    pub fn possessive(&self) -> String {
        match self.person {
            Person::Second => "your".to_string(),
            Person::Third => format!("{}'s", self.text),
        }
    }
}

/// Player-facing message sink.
pub trait Narrator {
    fn write(&mut self, kind: LogKind, text: String);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_good_and_bad_swap() {
        assert_eq!(LogKind::Good.swapped(), LogKind::Bad);
        assert_eq!(LogKind::Bad.swapped(), LogKind::Good);
        assert_eq!(LogKind::Fail.swapped(), LogKind::Fail);
    }

    #[test]
    fn nouns_render_by_person() {
        assert_eq!(Noun::player(EntityId::PLAYER).possessive(), "your");
        let goblin = Noun::entity(EntityId(3), "goblin");
        assert_eq!(goblin.text(), "the goblin");
        assert_eq!(goblin.possessive(), "the goblin's");
        assert!(!goblin.is_player());
    }
}
