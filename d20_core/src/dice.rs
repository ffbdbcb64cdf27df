//! The d20 roll and the verdict keyed to its outcome.
//!
//! The thresholds and message texts come straight from the original app.
//! Order matters in `Verdict::for_value`: the critical bands win over the
//! broader low/high bands, which win over the mid bands.

use crate::sprites::SpriteId;

/// A settled die roll together with its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieRoll {
    pub value: u8,
    pub verdict: Verdict,
}

/// Roll a twenty-sided die.
pub fn roll_d20() -> DieRoll {
    DieRoll::from_value(fastrand::u8(1..=20))
}

impl DieRoll {
    pub fn from_value(value: u8) -> Self {
        Self {
            value,
            verdict: Verdict::for_value(value),
        }
    }
}

/// The motivational band a roll lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    CriticalFail,
    VeryUnmotivated,
    Unmotivated,
    Mid,
    GoodDay,
    VeryProductive,
    CriticalSuccess,
}

impl Verdict {
    pub fn for_value(value: u8) -> Self {
        if value <= 1 {
            Verdict::CriticalFail
        } else if value >= 20 {
            Verdict::CriticalSuccess
        } else if value <= 5 {
            Verdict::VeryUnmotivated
        } else if value >= 15 {
            Verdict::VeryProductive
        } else if (9..=11).contains(&value) {
            Verdict::Mid
        } else if value < 9 {
            Verdict::Unmotivated
        } else {
            Verdict::GoodDay
        }
    }

    /// Message shown under the settled die.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::CriticalFail => "Critical fail! Don't even try to work.",
            Verdict::CriticalSuccess => "Critical success! Carpe diem!",
            Verdict::VeryUnmotivated => "You're going to be very unmotivated today...",
            Verdict::VeryProductive => "You're gonna be very productive today!",
            Verdict::Mid => "Today is going to be mid.",
            Verdict::Unmotivated => "You're not going to be very productive today...",
            Verdict::GoodDay => "Today is a great day to get some work done!",
        }
    }

    /// Sprites for the confetti trigger; empty means no animation.
    pub fn sprites(&self) -> &'static [SpriteId] {
        match self {
            Verdict::CriticalFail | Verdict::VeryUnmotivated => &[SpriteId::CryingEmoji],
            Verdict::CriticalSuccess | Verdict::VeryProductive => &[SpriteId::Confetti],
            Verdict::Mid | Verdict::Unmotivated | Verdict::GoodDay => &[],
        }
    }
}
