pub mod ui;

// Re-export core types so consumers (and the integration tests) don't need a
// direct d20_core dependency.
pub use d20_core::{
    roll_d20, ConfettiAnimation, ConfettiConfig, ConfettiService, ConfettiTrigger, D20Error,
    D20Result, DieRoll, Particle, Phase, RollStats, Sprite, SpriteId, Verdict,
};
