//! Core logic for the d20 mood-roll CLI: the d20 itself, the verdict keyed
//! to the roll, the confetti particle animation and the persistent roll
//! counter. Rendering lives in the `d20_cli` crate.

pub mod confetti;
pub mod dice;
pub mod error;
pub mod prelude;
pub mod sprites;
pub mod stats;
pub mod trigger;
pub mod utils;

pub use confetti::{ConfettiAnimation, ConfettiConfig, Particle, Phase};
pub use dice::{roll_d20, DieRoll, Verdict};
pub use error::{D20Error, D20Result};
pub use sprites::{Sprite, SpriteId};
pub use stats::RollStats;
pub use trigger::{ConfettiService, ConfettiTrigger};
