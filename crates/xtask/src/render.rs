//! ASCII rendering of a map with effect overlays.

use std::collections::HashMap;

use console::Style;
use turn_core::{
    Direction, Dungeon, Effect, EffectKind, Element, EntityId, GameState, LogKind, Position,
    Roster,
};

/// Renders the map top row first. Effects are drawn over tiles; entities are
/// drawn over both.
pub fn render_map(state: &GameState, effects: &[Effect]) -> String {
    let overlay: HashMap<Position, &Effect> = effects.iter().map(|e| (e.position, e)).collect();
    let dims = state.map.dimensions();
    let mut out = String::new();

    for y in (0..dims.height as i32).rev() {
        for x in 0..dims.width as i32 {
            let position = Position::new(x, y);
            let cell = match (state.entities.entity_at(position), overlay.get(&position)) {
                (Some(id), _) => entity_style(id).apply_to(entity_glyph(id)).to_string(),
                (None, Some(effect)) => effect_style(effect)
                    .apply_to(effect_glyph(effect))
                    .to_string(),
                (None, None) => {
                    let glyph = state.map.tile(position).map_or(' ', |kind| kind.glyph());
                    let lit = state.map.get(position).is_some_and(|tile| tile.lit);
                    let style = if lit { Style::new().yellow() } else { Style::new().dim() };
                    style.apply_to(glyph).to_string()
                }
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

fn entity_glyph(id: EntityId) -> char {
    if id.is_player() { '@' } else { 'g' }
}

fn entity_style(id: EntityId) -> Style {
    if id.is_player() {
        Style::new().white().bold()
    } else {
        Style::new().green().bold()
    }
}

fn effect_glyph(effect: &Effect) -> char {
    match effect.kind {
        EffectKind::Bolt | EffectKind::Beam | EffectKind::Arrow => match effect.direction {
            Direction::East | Direction::West => '-',
            Direction::North | Direction::South => '|',
            Direction::NorthEast | Direction::SouthWest => '/',
            Direction::NorthWest | Direction::SouthEast => '\\',
            Direction::None => '*',
        },
        EffectKind::Ball | EffectKind::Cone => '*',
        EffectKind::BallTrail | EffectKind::ConeTrail => 'o',
        EffectKind::Light => ':',
        EffectKind::Teleport => '%',
        EffectKind::Hit | EffectKind::Stab | EffectKind::Slash | EffectKind::Knockback => 'x',
    }
}

fn effect_style(effect: &Effect) -> Style {
    let style = match effect.element {
        Element::Fire => Style::new().red(),
        Element::Cold | Element::Water => Style::new().cyan(),
        Element::Lightning | Element::Light => Style::new().yellow(),
        Element::Acid | Element::Poison | Element::Wood => Style::new().green(),
        Element::Dark => Style::new().blue(),
        _ => Style::new().magenta(),
    };
    match effect.kind {
        EffectKind::BallTrail | EffectKind::ConeTrail => style.dim(),
        _ => style.bold(),
    }
}

pub fn log_style(kind: LogKind) -> Style {
    match kind {
        LogKind::Good => Style::new().green(),
        LogKind::Bad => Style::new().red(),
        LogKind::Fail | LogKind::DidNotWork => Style::new().yellow(),
        LogKind::Emphasize => Style::new().white().bold(),
        LogKind::Message => Style::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::load_state;

    #[test]
    fn plain_render_matches_the_map() {
        console::set_colors_enabled(false);
        let state = load_state(None, 0).expect("demo map");
        let rendered = render_map(&state, &[]);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[2], "#.@....g...#");
        assert_eq!(rows[5], "#.....+..g.#");
    }

    #[test]
    fn bolt_glyph_follows_direction() {
        let effect = Effect::new(Position::new(0, 0), Direction::NorthEast, EffectKind::Bolt, Element::Fire);
        assert_eq!(effect_glyph(&effect), '/');
    }
}
