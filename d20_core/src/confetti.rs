//! The confetti rain: a one-shot, time-stepped particle animation.
//!
//! A trigger seeds a fixed-size batch of particles above the viewport. Each
//! step advances them downward with a little spin, recycles anything that
//! falls off the bottom back to the top, and — once the rain duration is
//! over — fades the whole batch linearly to transparent before clearing it.
//!
//! The animation is deliberately renderer-agnostic: it works in abstract
//! cell coordinates and leaves drawing to the UI layer.

use std::time::Duration;

use crate::sprites::{Sprite, SpriteId};
use crate::trigger::ConfettiTrigger;

/// Tuning knobs for one confetti batch.
///
/// Speeds are cells per second, spins are degrees per second, sizes are the
/// randomized target size in cells before aspect correction.
#[derive(Debug, Clone)]
pub struct ConfettiConfig {
    /// Particles spawned per trigger.
    pub particle_count: usize,
    /// How long the rain falls at full opacity.
    pub rain: Duration,
    /// How long the linear fade to transparent takes afterwards.
    pub fade: Duration,
    pub min_size: f32,
    pub max_size: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_spin: f32,
    pub max_spin: f32,
    /// Rows above the viewport a recycled particle restarts at.
    pub wrap_margin: f32,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particle_count: 30,
            rain: Duration::from_millis(3000),
            fade: Duration::from_millis(1000),
            min_size: 2.0,
            max_size: 5.0,
            min_speed: 6.0,
            max_speed: 16.0,
            min_spin: 60.0,
            max_spin: 240.0,
            wrap_margin: 3.0,
        }
    }
}

/// One falling piece ("bill" in the original code).
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Fall speed in cells per second.
    pub speed: f32,
    /// Rotation angle in degrees, kept in `[0, 360)`.
    pub rotation: f32,
    /// Angular speed in degrees per second.
    pub rotation_speed: f32,
    pub sprite: SpriteId,
    /// Rendered width in cells, aspect-corrected from the target size.
    pub width: f32,
    /// Rendered height in cells, aspect-corrected from the target size.
    pub height: f32,
    /// Opacity in `[0, 1]`. 1 while raining, fading to 0 at the end.
    pub opacity: f32,
    /// Stable per-particle hue in degrees, for renderers that want color.
    pub hue: f32,
}

/// Where the animation currently is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No batch active, nothing to draw.
    Idle,
    /// Particles falling at full opacity.
    Raining,
    /// Rain time is up, opacity ramping down.
    Fading,
}

/// State machine driving one confetti batch from trigger to clear.
pub struct ConfettiAnimation {
    config: ConfettiConfig,
    particles: Vec<Particle>,
    elapsed: Duration,
    width: f32,
    height: f32,
}

impl ConfettiAnimation {
    pub fn new(config: ConfettiConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            elapsed: Duration::ZERO,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn config(&self) -> &ConfettiConfig {
        &self.config
    }

    /// Start (or extend) the rain for a trigger.
    ///
    /// Seeds `particle_count` particles with randomized position, speed,
    /// rotation and size; spawn positions are spread over one full viewport
    /// height above the top edge so the rain arrives staggered. A trigger
    /// with no sprites is ignored. If a batch is already falling, the new
    /// particles join it and the rain clock restarts, which also restores
    /// full opacity on a batch that had begun to fade.
    pub fn trigger(&mut self, trigger: &ConfettiTrigger, width: f32, height: f32) {
        if trigger.sprites.is_empty() {
            tracing::debug!("confetti trigger with no sprites ignored");
            return;
        }
        self.width = width;
        self.height = height;
        self.elapsed = Duration::ZERO;

        tracing::debug!(
            sprites = trigger.sprites.len(),
            count = self.config.particle_count,
            "seeding confetti batch"
        );

        for _ in 0..self.config.particle_count {
            let sprite_id = trigger.sprites[fastrand::usize(..trigger.sprites.len())];
            let sprite = Sprite::get(sprite_id);
            let size =
                self.config.min_size + fastrand::f32() * (self.config.max_size - self.config.min_size);

            // Preserve the sprite's aspect ratio: the target size caps the
            // longer side, the shorter side shrinks to match.
            let aspect = sprite.aspect();
            let (width_cells, height_cells) = if aspect > 1.0 {
                (size, size / aspect)
            } else {
                (size * aspect, size)
            };

            self.particles.push(Particle {
                x: fastrand::f32() * width,
                y: -(fastrand::f32() * height),
                speed: self.config.min_speed
                    + fastrand::f32() * (self.config.max_speed - self.config.min_speed),
                rotation: fastrand::f32() * 360.0,
                rotation_speed: self.config.min_spin
                    + fastrand::f32() * (self.config.max_spin - self.config.min_spin),
                sprite: sprite_id,
                width: width_cells,
                height: height_cells,
                opacity: 1.0,
                hue: fastrand::f32() * 360.0,
            });
        }
    }

    /// Advance the animation by `dt`. Call once per redraw.
    pub fn step(&mut self, dt: Duration) {
        if self.particles.is_empty() {
            return;
        }
        self.elapsed += dt;

        let fade_elapsed = self.elapsed.saturating_sub(self.config.rain);
        if fade_elapsed >= self.config.fade {
            // Fully faded: discard the batch and go back to idle.
            self.particles.clear();
            self.elapsed = Duration::ZERO;
            return;
        }
        let opacity = if fade_elapsed.is_zero() {
            1.0
        } else {
            (1.0 - fade_elapsed.as_secs_f32() / self.config.fade.as_secs_f32()).clamp(0.0, 1.0)
        };

        let dt_secs = dt.as_secs_f32();
        let (width, height, wrap_margin) = (self.width, self.height, self.config.wrap_margin);
        for particle in &mut self.particles {
            particle.y += particle.speed * dt_secs;
            particle.rotation = (particle.rotation + particle.rotation_speed * dt_secs).rem_euclid(360.0);
            if particle.y > height {
                particle.y = -wrap_margin;
                particle.x = fastrand::f32() * width;
            }
            particle.opacity = opacity;
        }
    }

    /// Update the viewport so recycled particles use the new width.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn phase(&self) -> Phase {
        if self.particles.is_empty() {
            Phase::Idle
        } else if self.elapsed < self.config.rain {
            Phase::Raining
        } else {
            Phase::Fading
        }
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }
}
