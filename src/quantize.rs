//! Nearest-color quantization into the xterm 256-color palette
//!
//! xterm provides a 6x6x6 color cube (indices 16-231) and 24 greys
//! (232-255). An arbitrary RGB color is mapped to the closest cube entry,
//! the closest grey is worked out as well, and the nearer of the two wins.
//!
//! The cube channels are not evenly spaced: xterm gives darker colors far
//! less resolution, so the six levels sit at 0, 95, 135, 175, 215 and 255.
//! The greys are evenly spaced (8, 18, 28 ... 238).

use crate::palette::index_to_16;

/// Canonical channel value for each of the six cube levels
const CUBE_VALUES: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Quantize an RGB color to the nearest xterm 256-color index
///
/// Colors that land exactly on a cube entry return its index directly.
/// Everything else is decided by squared Euclidean distance between the
/// cube candidate and the grey candidate; ties go to the cube. The result
/// is always in 16-255, never one of the 16 ANSI indices.
pub fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    // Map each channel onto the 6x6x6 cube.
    let qr = cube_level(r);
    let cr = CUBE_VALUES[qr as usize];
    let qg = cube_level(g);
    let cg = CUBE_VALUES[qg as usize];
    let qb = cube_level(b);
    let cb = CUBE_VALUES[qb as usize];

    let cube_index = 16 + 36 * qr + 6 * qg + qb;

    // Hit the cube exactly: nothing can be closer.
    if cr == r && cg == g && cb == b {
        return cube_index;
    }

    // Closest grey, from the channel average.
    let grey_avg = (r as i32 + g as i32 + b as i32) / 3;
    let grey_idx = if grey_avg > 238 {
        23
    } else {
        (grey_avg - 3) / 10
    };
    let grey = 8 + 10 * grey_idx;

    // Grey or cube, whichever is nearer; ties go to the cube.
    let (ri, gi, bi) = (r as i32, g as i32, b as i32);
    let grey_dist = dist_sq(grey, grey, grey, ri, gi, bi);
    let cube_dist = dist_sq(cr as i32, cg as i32, cb as i32, ri, gi, bi);
    if grey_dist < cube_dist {
        (232 + grey_idx) as u8
    } else {
        cube_index
    }
}

/// Quantize an RGB color all the way down to the 16-color ANSI palette
pub fn rgb_to_16(r: u8, g: u8, b: u8) -> u8 {
    index_to_16(rgb_to_256(r, g, b))
}

/// Map a channel value onto one of the six cube levels
///
/// The first two buckets are wide (everything below 48, then below 114)
/// to match the sparse dark end of the cube; the remaining levels are 40
/// apart, so `(v - 35) / 40` lands values up to 255 on levels 2-5.
fn cube_level(v: u8) -> u8 {
    if v < 48 {
        0
    } else if v < 114 {
        1
    } else {
        (v - 35) / 40
    }
}

/// Squared Euclidean distance between two colors
///
/// Comparing squared magnitudes is enough to rank candidates and keeps
/// the arithmetic in integers.
fn dist_sq(r1: i32, g1: i32, b1: i32, r2: i32, g2: i32, b2: i32) -> i32 {
    (r1 - r2) * (r1 - r2) + (g1 - g2) * (g1 - g2) + (b1 - b2) * (b1 - b2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_corners() {
        assert_eq!(rgb_to_256(0, 0, 0), 16); // Black
        assert_eq!(rgb_to_256(255, 255, 255), 231); // White
        assert_eq!(rgb_to_256(255, 0, 0), 196); // Red
        assert_eq!(rgb_to_256(0, 255, 0), 46); // Green
        assert_eq!(rgb_to_256(0, 0, 255), 21); // Blue
    }

    #[test]
    fn test_near_grey_clusters() {
        // Small perturbations land on the same grey step
        assert_eq!(rgb_to_256(200, 200, 200), 251);
        assert_eq!(rgb_to_256(201, 201, 201), 251);
    }

    #[test]
    fn test_exact_cube_match_beats_grey() {
        // 215 on all channels is both nearly grey and exactly cube level 4;
        // the exact match must win without a distance comparison
        assert_eq!(rgb_to_256(215, 215, 215), 188);
    }

    #[test]
    fn test_exact_match_never_returns_grey() {
        for (lr, &vr) in CUBE_VALUES.iter().enumerate() {
            let index = rgb_to_256(vr, vr, vr);
            assert_eq!(index, (16 + 36 * lr + 6 * lr + lr) as u8);
        }
    }

    #[test]
    fn test_near_white_uses_brightest_grey() {
        // Average above 238 clamps to grey step 23 (luminance 238), which
        // is far closer to 240,240,240 than cube level 5 is
        assert_eq!(rgb_to_256(240, 240, 240), 255);
    }

    #[test]
    fn test_grey_clamp_boundary_is_continuous() {
        // Average exactly 238 takes the unclamped branch and still
        // produces step 23, so behavior is continuous at the clamp
        assert_eq!(rgb_to_256(238, 238, 238), 255);
        assert_eq!(rgb_to_256(239, 239, 239), 255);
    }

    #[test]
    fn test_near_black_grey() {
        // Averages below 3 truncate to grey step 0 rather than underflow
        assert_eq!(rgb_to_256(1, 1, 1), 16);
        assert_eq!(rgb_to_256(5, 5, 5), 232);
    }

    #[test]
    fn test_cube_level_thresholds() {
        assert_eq!(cube_level(0), 0);
        assert_eq!(cube_level(47), 0);
        assert_eq!(cube_level(48), 1);
        assert_eq!(cube_level(113), 1);
        assert_eq!(cube_level(114), 1); // (114 - 35) / 40 == 1
        assert_eq!(cube_level(115), 2);
        assert_eq!(cube_level(155), 3);
        assert_eq!(cube_level(195), 4);
        assert_eq!(cube_level(235), 5);
        assert_eq!(cube_level(255), 5);
    }

    #[test]
    fn test_rgb_to_16() {
        assert_eq!(rgb_to_16(0, 0, 255), 12); // Bright blue
        assert_eq!(rgb_to_16(255, 0, 0), 9); // Bright red
        assert_eq!(rgb_to_16(255, 255, 255), 15); // Bright white
    }
}
