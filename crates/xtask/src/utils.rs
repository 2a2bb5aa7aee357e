//! Utility functions for xtask commands

use std::path::Path;

use anyhow::{Context, Result};
use turn_core::{Actor, EntitiesState, EntityId, GameState, Position, TileMap};

/// Map used when no `--map` is given.
pub const DEMO_MAP: &str = "
############
#..........#
#.@....g...#
#.....###..#
#..g..#....#
#.....+..g.#
############
";

/// Loads an ASCII map and spawns the player on `@` and a goblin on every
/// letter.
pub fn load_state(path: Option<&Path>, seed: u64) -> Result<GameState> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read map file: {}", path.display()))?,
        None => DEMO_MAP.to_string(),
    };
    let parsed = TileMap::from_ascii(&text).context("Failed to parse map")?;

    let mut entities = EntitiesState::new();
    let mut next_id = 1;
    for (marker, position) in parsed.markers {
        if marker == '@' {
            entities.insert(Actor::new(EntityId::PLAYER, "you", position));
        } else {
            entities.insert(Actor::new(EntityId(next_id), "goblin", position));
            next_id += 1;
        }
    }

    Ok(GameState::new(parsed.map, entities).with_seed(seed))
}

/// Parses `x,y`.
pub fn parse_position(value: &str) -> Result<Position, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {value:?}"))?;
    let x = x.trim().parse().map_err(|_| format!("bad x coordinate in {value:?}"))?;
    let y = y.trim().parse().map_err(|_| format!("bad y coordinate in {value:?}"))?;
    Ok(Position::new(x, y))
}

pub fn player_position(state: &GameState) -> Result<Position> {
    state
        .entities
        .actor(EntityId::PLAYER)
        .map(|player| player.position)
        .context("Map has no '@' and no --origin was given")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_parse_with_spaces() {
        assert_eq!(parse_position("3, -2"), Ok(Position::new(3, -2)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,1").is_err());
    }

    #[test]
    fn demo_map_spawns_player_and_goblins() {
        let state = load_state(None, 0).expect("demo map parses");
        assert!(state.entities.actor(EntityId::PLAYER).is_some());
        assert_eq!(state.entities.iter().count(), 4);
    }
}
