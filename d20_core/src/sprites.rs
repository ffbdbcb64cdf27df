//! Glyph-art sprites for the confetti rain.
//!
//! The browser version of this app rendered PNG images onto a canvas. In the
//! terminal each "image" is a small grid of glyphs; spaces are transparent.
//! Every sprite carries four rotation frames so a spinning particle has
//! something to show for its rotation angle.

use unicode_width::UnicodeWidthStr;

/// Identifier for a sprite, the terminal analogue of an image file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    /// A square piece of confetti.
    Confetti,
    /// A crying face, for the less fortunate rolls.
    CryingEmoji,
}

/// A sprite: four equally-sized glyph grids, one per quarter turn.
pub struct Sprite {
    id: SpriteId,
    /// Frames at 0°, 90°, 180° and 270°. All rows in all frames have the
    /// same display width.
    frames: [&'static [&'static str]; 4],
}

const CONFETTI_FRAMES: [&[&str]; 4] = [
    &["█▀", "▄█"],
    &["▀█", "█▄"],
    &["█▄", "▀█"],
    &["▄█", "█▀"],
];

// A face does not read well sideways, so all four frames are identical.
const CRYING_FRAMES: [&[&str]; 4] = [&["ToT"], &["ToT"], &["ToT"], &["ToT"]];

static CONFETTI: Sprite = Sprite {
    id: SpriteId::Confetti,
    frames: CONFETTI_FRAMES,
};

static CRYING_EMOJI: Sprite = Sprite {
    id: SpriteId::CryingEmoji,
    frames: CRYING_FRAMES,
};

impl Sprite {
    /// Look up the sprite for an identifier.
    pub fn get(id: SpriteId) -> &'static Sprite {
        match id {
            SpriteId::Confetti => &CONFETTI,
            SpriteId::CryingEmoji => &CRYING_EMOJI,
        }
    }

    pub fn id(&self) -> SpriteId {
        self.id
    }

    /// Display width of the art in cells.
    pub fn width(&self) -> usize {
        self.frames[0]
            .first()
            .map(|row| UnicodeWidthStr::width(*row))
            .unwrap_or(0)
    }

    /// Height of the art in rows.
    pub fn height(&self) -> usize {
        self.frames[0].len()
    }

    /// Width-over-height ratio, used to preserve proportions when a particle
    /// picks a randomized target size.
    pub fn aspect(&self) -> f32 {
        let h = self.height().max(1) as f32;
        self.width() as f32 / h
    }

    /// Frame for a rotation angle in degrees, one frame per quarter turn.
    pub fn frame_for_rotation(&self, degrees: f32) -> &'static [&'static str] {
        let quadrant = (degrees.rem_euclid(360.0) / 90.0) as usize % 4;
        self.frames[quadrant]
    }

    /// Sample the art at normalized coordinates `u`, `v` in `[0, 1)` for the
    /// given rotation. Returns `None` for transparent (space) cells or
    /// out-of-range coordinates.
    ///
    /// Nearest-neighbor sampling is what lets a 2x2 sprite fill a particle's
    /// rendered width/height without the renderer knowing the art size.
    pub fn sample(&self, degrees: f32, u: f32, v: f32) -> Option<char> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        let frame = self.frame_for_rotation(degrees);
        let row = frame.get((v * frame.len() as f32) as usize)?;
        let cols: Vec<char> = row.chars().collect();
        let ch = *cols.get((u * cols.len() as f32) as usize)?;
        if ch == ' ' {
            None
        } else {
            Some(ch)
        }
    }
}
