//! Run the turn loop with chasing monsters.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use turn_core::EntityId;
use turn_runtime::{ChaseProvider, RuntimeConfig, TurnLoop};

use crate::render::{log_style, render_map};
use crate::utils::load_state;

/// Run the turn loop with chasing monsters and print the narration
#[derive(Parser)]
pub struct Simulate {
    /// ASCII map file (defaults to a built-in demo map)
    #[arg(short, long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Game steps to run
    #[arg(short, long, default_value_t = 20)]
    steps: usize,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let mut state = load_state(self.map.as_deref(), self.seed)?;
        let config = RuntimeConfig::from_env();
        tracing::debug!(?config, "simulation config");

        let mut turns = TurnLoop::new(config);
        let mut provider = ChaseProvider;

        for step in 0..self.steps {
            let submitted = turns.advance(&mut state.world(), &mut provider)?;
            let report = turns.drain(&mut state.world())?;
            tracing::debug!(step, submitted, ticks = report.ticks, "step finished");

            for entry in state.log.drain() {
                println!(
                    "{} {}",
                    style(format!("[{step:>3}]")).dim(),
                    log_style(entry.kind).apply_to(entry.text)
                );
            }

            let player_alive = state
                .entities
                .actor(EntityId::PLAYER)
                .is_some_and(|player| player.is_alive());
            if !player_alive {
                println!("{}", style("The player has fallen.").red().bold());
                break;
            }
        }

        println!();
        print!("{}", render_map(&state, &[]));
        Ok(())
    }
}
