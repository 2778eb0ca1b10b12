//! Orientation angles and axis-alignment classification.

/// Maximum deviation from a multiple of 90° for a direction to count as
/// axis-aligned.
pub const AXIS_ALIGNMENT_EPSILON_DEGREES: f64 = 0.01;

/// Normalizes an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees % 360.0;
    if d < 0.0 { d + 360.0 } else { d }
}

/// Returns the direction angle of the vector `(dx, dy)` in degrees,
/// measured counter-clockwise from the +X axis, normalized to `[0, 360)`.
///
/// A zero vector yields `0.0`.
#[must_use]
pub fn orientation_degrees(dx: f64, dy: f64) -> f64 {
    normalize_degrees(dy.atan2(dx).to_degrees())
}

/// Returns the angular deviation (in degrees, always `>= 0`) of a direction
/// from the nearest multiple of 90°.
#[must_use]
pub fn off_axis_degrees(degrees: f64) -> f64 {
    let d = normalize_degrees(degrees) % 90.0;
    d.min(90.0 - d)
}

/// Whether a direction angle lies within [`AXIS_ALIGNMENT_EPSILON_DEGREES`]
/// of a multiple of 90°.
#[must_use]
pub fn is_axis_aligned(degrees: f64) -> bool {
    off_axis_degrees(degrees) <= AXIS_ALIGNMENT_EPSILON_DEGREES
}

/// Returns the sweep angle (radians, `[0, π]`) of the minor arc with the
/// given chord length and radius.
///
/// The chord is clamped to the diameter, so an over-long chord yields a
/// semicircle rather than NaN. Zero or negative radius yields `0.0`.
#[must_use]
pub fn minor_arc_sweep(chord_len: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    let half_ratio = (chord_len / (2.0 * radius)).clamp(-1.0, 1.0);
    2.0 * half_ratio.asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    #[test]
    fn normalize_wraps_negative() {
        let d = normalize_degrees(-90.0);
        assert!((d - 270.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn normalize_wraps_over_full_turn() {
        let d = normalize_degrees(450.0);
        assert!((d - 90.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn normalize_identity_in_range() {
        let d = normalize_degrees(359.5);
        assert!((d - 359.5).abs() < TOL, "d={d}");
    }

    #[test]
    fn orientation_cardinal_directions() {
        assert!(orientation_degrees(1.0, 0.0).abs() < TOL);
        assert!((orientation_degrees(0.0, 1.0) - 90.0).abs() < TOL);
        assert!((orientation_degrees(-1.0, 0.0) - 180.0).abs() < TOL);
        assert!((orientation_degrees(0.0, -1.0) - 270.0).abs() < TOL);
    }

    #[test]
    fn orientation_diagonal() {
        let d = orientation_degrees(1.0, 1.0);
        assert!((d - 45.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn off_axis_at_axes_is_zero() {
        assert!(off_axis_degrees(0.0).abs() < TOL);
        assert!(off_axis_degrees(90.0).abs() < TOL);
        assert!(off_axis_degrees(180.0).abs() < TOL);
        assert!(off_axis_degrees(270.0).abs() < TOL);
        assert!(off_axis_degrees(360.0).abs() < TOL);
    }

    #[test]
    fn off_axis_midway_is_45() {
        let d = off_axis_degrees(45.0);
        assert!((d - 45.0).abs() < TOL, "d={d}");
        let d = off_axis_degrees(135.0);
        assert!((d - 45.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn off_axis_near_axis() {
        let d = off_axis_degrees(89.995);
        assert!((d - 0.005).abs() < TOL, "d={d}");
    }

    #[test]
    fn axis_aligned_boundary() {
        // Exactly at the epsilon counts as aligned; just past it does not.
        assert!(is_axis_aligned(90.01));
        assert!(!is_axis_aligned(90.02));
        assert!(is_axis_aligned(179.99));
        assert!(!is_axis_aligned(182.0));
    }

    #[test]
    fn minor_arc_semicircle() {
        // Chord equal to the diameter: sweep = π.
        let sweep = minor_arc_sweep(2.0, 1.0);
        assert!((sweep - PI).abs() < TOL, "sweep={sweep}");
    }

    #[test]
    fn minor_arc_sixty_degrees() {
        // Chord equal to the radius subtends 60°.
        let sweep = minor_arc_sweep(1.0, 1.0);
        assert!((sweep - PI / 3.0).abs() < TOL, "sweep={sweep}");
    }

    #[test]
    fn minor_arc_overlong_chord_clamps() {
        let sweep = minor_arc_sweep(5.0, 1.0);
        assert!(sweep.is_finite());
        assert!((sweep - PI).abs() < TOL, "sweep={sweep}");
    }

    #[test]
    fn minor_arc_degenerate_radius() {
        assert!(minor_arc_sweep(1.0, 0.0).abs() < TOL);
        assert!(minor_arc_sweep(1.0, -2.0).abs() < TOL);
    }
}
