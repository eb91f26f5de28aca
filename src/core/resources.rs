//! Core domain: shared resources for pausing gameplay.

use bevy::prelude::*;
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }

    /// Flip one source; returns whether gameplay is paused afterwards.
    pub fn toggle(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if !self.sources.remove(&source) {
            self.sources.insert(source);
        }
        self.is_paused()
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_until_every_source_releases() {
        let mut paused = GameplayPaused::default();
        assert!(!paused.is_paused());

        paused.pause("debug");
        paused.pause("menu");
        paused.unpause("debug");
        assert!(paused.is_paused());

        paused.unpause("menu");
        assert!(!paused.is_paused());
    }

    #[test]
    fn toggle_flips_a_single_source() {
        let mut paused = GameplayPaused::default();
        assert!(paused.toggle("debug"));
        assert!(!paused.toggle("debug"));
    }
}
