//! Color utilities for the confetti renderer.

/// Map hue (degrees, wraps), saturation and value (both `[0, 1]`) to
/// terminal RGB. Each confetti piece carries a random hue through this.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Apply an opacity in `[0, 1]` to a color by scaling it toward black.
///
/// The terminal has no alpha channel, so fading toward the (black)
/// background is how particle opacity becomes visible.
pub fn apply_opacity((r, g, b): (u8, u8, u8), opacity: f32) -> (u8, u8, u8) {
    let opacity = opacity.clamp(0.0, 1.0);
    (
        (r as f32 * opacity) as u8,
        (g as f32 * opacity) as u8,
        (b as f32 * opacity) as u8,
    )
}
