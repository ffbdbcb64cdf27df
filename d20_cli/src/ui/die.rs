//! The die face drawn in the middle of the screen.
//!
//! The browser app used a 3D dice physics library; the terminal stand-in is
//! a flat d20 outline plus a short tumble where the shown face cycles
//! through a scrambled sequence before the real value settles.

/// Faces flashed while the die is tumbling, advanced by the UI frame
/// counter. Scrambled on purpose so the cycle doesn't read as a count-up.
pub const TUMBLE_FACES: [u8; 12] = [7, 14, 3, 19, 11, 2, 16, 8, 20, 5, 12, 1];

/// Face to show for a given animation frame while tumbling.
pub fn tumble_face(frame: usize) -> u8 {
    TUMBLE_FACES[frame % TUMBLE_FACES.len()]
}

/// ASCII art of a d20 showing `value`. All lines have equal width so the
/// block centers cleanly.
pub fn die_art(value: u8) -> Vec<String> {
    vec![
        "   ╱╲   ".to_string(),
        "  ╱  ╲  ".to_string(),
        format!(" ╱ {:^2} ╲ ", value),
        " ╲    ╱ ".to_string(),
        "  ╲  ╱  ".to_string(),
        "   ╲╱   ".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_lines_share_width() {
        for value in [1, 9, 20] {
            let art = die_art(value);
            let width = art[0].chars().count();
            for line in &art {
                assert_eq!(line.chars().count(), width, "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_art_contains_value() {
        assert!(die_art(20).join("\n").contains("20"));
        assert!(die_art(1).join("\n").contains('1'));
    }

    #[test]
    fn test_tumble_faces_are_valid_and_cycle() {
        for frame in 0..40 {
            assert!((1..=20).contains(&tumble_face(frame)));
        }
        assert_eq!(tumble_face(0), tumble_face(TUMBLE_FACES.len()));
    }
}
