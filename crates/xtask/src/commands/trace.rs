//! Step an area effect over a map.
//!
//! Runs a ball, bolt, beam, cone or light through the turn loop one tick at a
//! time and prints the map with that tick's effects drawn over it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;
use turn_core::{Blast, Effect, Element, EntityId, Illuminate, Position};
use turn_runtime::{RuntimeConfig, TurnLoop};

use crate::render::{log_style, render_map};
use crate::utils::{load_state, parse_position, player_position};

/// Step an area effect over a map
#[derive(Parser)]
pub struct Trace {
    /// Shape to trace
    #[arg(value_enum)]
    shape: Shape,

    /// ASCII map file (defaults to a built-in demo map)
    #[arg(short, long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Origin as x,y (defaults to the player's position)
    #[arg(long, value_parser = parse_position)]
    origin: Option<Position>,

    /// Target as x,y. Required for bolt, beam and cone; centers a ball or light
    #[arg(short, long, value_parser = parse_position)]
    target: Option<Position>,

    /// Radius for ball, cone and light; range for beam
    #[arg(short, long, default_value_t = 3)]
    radius: i32,

    /// Element of the blast
    #[arg(short, long, default_value = "fire")]
    element: Element,

    /// Damage dealt to every entity hit
    #[arg(short, long, default_value_t = 3)]
    damage: u32,

    /// Print the effects of every step as JSON instead of drawing maps
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Shape {
    Ball,
    Bolt,
    Beam,
    Cone,
    Light,
}

#[derive(Serialize)]
struct StepDump<'a> {
    step: usize,
    done: bool,
    effects: &'a [Effect],
}

impl Trace {
    pub fn execute(self) -> Result<()> {
        let mut state = load_state(self.map.as_deref(), 0)?;
        let origin = match self.origin {
            Some(origin) => origin,
            None => player_position(&state)?,
        };
        let center = self.target.unwrap_or(origin);
        let target = || {
            self.target
                .context("--target is required for bolt, beam and cone")
        };

        let blast = Blast::new(
            Some(EntityId::PLAYER),
            format!("the {} {}", self.element, self.shape.noun()),
            self.damage,
            self.element,
        );
        let action = match self.shape {
            Shape::Ball => blast.ball(center, self.radius),
            Shape::Bolt => blast.bolt(origin, target()?),
            Shape::Beam => blast.beam(origin, target()?, self.radius.max(1) as u32),
            Shape::Cone => blast.cone(origin, target()?, self.radius),
            Shape::Light => Illuminate::action(EntityId::PLAYER, center, self.radius),
        }
        .context("Invalid area effect")?;

        let mut turns = TurnLoop::new(RuntimeConfig::from_env());
        turns.enqueue(action);

        let mut steps = Vec::new();
        while !turns.is_idle() {
            let report = turns.tick(&mut state.world())?;
            steps.push((report.done, report.effects));
        }

        if self.json {
            let dumps: Vec<_> = steps
                .iter()
                .enumerate()
                .map(|(step, (done, effects))| StepDump {
                    step,
                    done: *done,
                    effects,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&dumps)?);
            return Ok(());
        }

        for (step, (done, effects)) in steps.iter().enumerate() {
            let status = if *done { "done" } else { "not done" };
            println!(
                "{} {} ({}, {} effects)",
                style("Step").bold().cyan(),
                step,
                status,
                effects.len()
            );
            print!("{}", render_map(&state, effects));
            println!();
        }

        for entry in state.log.entries() {
            println!("{}", log_style(entry.kind).apply_to(&entry.text));
        }
        Ok(())
    }
}

impl Shape {
    fn noun(self) -> &'static str {
        match self {
            Shape::Ball => "ball",
            Shape::Bolt => "bolt",
            Shape::Beam => "beam",
            Shape::Cone => "cone",
            Shape::Light => "light",
        }
    }
}
