//! Convenient re-exports for consumers of the core crate.

pub use crate::confetti::{ConfettiAnimation, ConfettiConfig, Particle, Phase};
pub use crate::dice::{roll_d20, DieRoll, Verdict};
pub use crate::error::{D20Error, D20Result};
pub use crate::sprites::{Sprite, SpriteId};
pub use crate::stats::RollStats;
pub use crate::trigger::{ConfettiService, ConfettiTrigger};
