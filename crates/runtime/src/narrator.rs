//! Narration sink that writes to `tracing`.
use turn_core::{LogKind, Narrator};

/// Forwards every message as an `info` event under the `narration` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNarrator;

impl Narrator for TracingNarrator {
    fn write(&mut self, kind: LogKind, text: String) {
        tracing::info!(target: "narration", kind = %kind, "{text}");
    }
}
