//! Renders the confetti batch into the ratatui buffer.
//!
//! Each particle's sprite art is sampled nearest-neighbor at the particle's
//! rendered width/height, centered on its position — the terminal version of
//! `drawImage(image, -w/2, -h/2, w, h)` on the canvas. Opacity becomes a
//! blend toward the black background.

use d20_core::{ConfettiAnimation, Particle, Sprite, SpriteId};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::ui::colors::{apply_opacity, hsv_to_rgb};

pub struct ConfettiLayer<'a> {
    animation: &'a ConfettiAnimation,
}

impl<'a> ConfettiLayer<'a> {
    pub fn new(animation: &'a ConfettiAnimation) -> Self {
        Self { animation }
    }
}

/// Base color for a particle before opacity is applied.
fn particle_color(particle: &Particle) -> (u8, u8, u8) {
    match particle.sprite {
        // Confetti pieces get a stable per-particle hue.
        SpriteId::Confetti => hsv_to_rgb(particle.hue, 0.85, 1.0),
        SpriteId::CryingEmoji => (110, 160, 255),
    }
}

impl Widget for ConfettiLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for particle in self.animation.particles() {
            let sprite = Sprite::get(particle.sprite);
            let cells_wide = particle.width.round().max(1.0) as i32;
            let cells_high = particle.height.round().max(1.0) as i32;
            let left = (particle.x - particle.width / 2.0).round() as i32;
            let top = (particle.y - particle.height / 2.0).round() as i32;

            let (r, g, b) = apply_opacity(particle_color(particle), particle.opacity);
            let style = Style::default().fg(Color::Rgb(r, g, b));

            for row in 0..cells_high {
                for col in 0..cells_wide {
                    let x = left + col;
                    let y = top + row;
                    if x < 0 || y < 0 || x >= area.width as i32 || y >= area.height as i32 {
                        continue;
                    }
                    let u = (col as f32 + 0.5) / cells_wide as f32;
                    let v = (row as f32 + 0.5) / cells_high as f32;
                    let Some(glyph) = sprite.sample(particle.rotation, u, v) else {
                        continue;
                    };
                    if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + y as u16)) {
                        cell.set_char(glyph);
                        cell.set_style(style);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use d20_core::{ConfettiConfig, ConfettiTrigger};
    use std::time::Duration;

    fn rendered_cells(buf: &Buffer) -> usize {
        buf.content().iter().filter(|c| c.symbol() != " ").count()
    }

    fn raining(width: f32, height: f32) -> ConfettiAnimation {
        let mut anim = ConfettiAnimation::new(ConfettiConfig {
            rain: Duration::from_secs(600),
            ..Default::default()
        });
        anim.trigger(
            &ConfettiTrigger {
                sprites: vec![SpriteId::Confetti],
            },
            width,
            height,
        );
        anim
    }

    #[test]
    fn test_nothing_rendered_while_idle() {
        let anim = ConfettiAnimation::new(ConfettiConfig::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
        ConfettiLayer::new(&anim).render(buf.area, &mut buf);
        assert_eq!(rendered_cells(&buf), 0);
    }

    #[test]
    fn test_particles_appear_once_they_fall_into_view() {
        fastrand::seed(11);
        let mut anim = raining(40.0, 12.0);

        // Particles spawn above the viewport; advance until some are inside.
        for _ in 0..120 {
            anim.step(Duration::from_millis(16));
        }
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));
        ConfettiLayer::new(&anim).render(buf.area, &mut buf);
        assert!(rendered_cells(&buf) > 0);
    }

    #[test]
    fn test_render_clips_to_area() {
        fastrand::seed(11);
        let mut anim = raining(200.0, 60.0);
        for _ in 0..120 {
            anim.step(Duration::from_millis(16));
        }
        // A buffer much smaller than the animation viewport must not panic
        // and must only touch its own cells.
        let mut buf = Buffer::empty(Rect::new(2, 1, 10, 4));
        ConfettiLayer::new(&anim).render(buf.area, &mut buf);
    }
}
