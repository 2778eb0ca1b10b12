/// Returns the minimum distance from point `(px, py)` to the line segment
/// from `(ax, ay)` to `(bx, by)`.
///
/// For points whose perpendicular foot lands inside the segment this
/// equals the distance to the segment's infinite supporting line; outside
/// the extent it is the distance to the nearer endpoint.
#[must_use]
pub fn point_to_segment_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((px - ax) * dx + (py - ay) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = ax + t * dx;
    let closest_y = ay + t * dy;

    ((px - closest_x).powi(2) + (py - closest_y).powi(2)).sqrt()
}

/// Returns the signed distance along the segment direction from `(ax, ay)`
/// to the perpendicular foot of `(px, py)`, in length units (not clamped).
///
/// Negative values mean the foot lies before the segment start; values
/// greater than the segment length mean it lies past the end. Zero for a
/// degenerate segment.
#[must_use]
pub fn projection_along(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 1e-10 {
        return 0.0;
    }

    ((px - ax) * dx + (py - ay) * dy) / len
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    // ── point_to_segment_dist tests ──

    #[test]
    fn segment_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = point_to_segment_dist(1.0, 1.0, 0.0, 0.0, 2.0, 0.0);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        // Point (-1, 0) to segment (0,0)→(2,0). Closest at (0,0), dist = 1.
        let d = point_to_segment_dist(-1.0, 0.0, 0.0, 0.0, 2.0, 0.0);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_on_segment() {
        // Point on the segment itself.
        let d = point_to_segment_dist(1.0, 0.0, 0.0, 0.0, 2.0, 0.0);
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        // Zero-length segment: distance is point-to-point.
        let d = point_to_segment_dist(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    // ── projection_along tests ──

    #[test]
    fn projection_inside_segment() {
        // Foot of (3, 5) on (0,0)→(10,0) is at x=3.
        let t = projection_along(3.0, 5.0, 0.0, 0.0, 10.0, 0.0);
        assert!((t - 3.0).abs() < TOL, "t={t}");
    }

    #[test]
    fn projection_before_start_is_negative() {
        let t = projection_along(-2.0, 1.0, 0.0, 0.0, 10.0, 0.0);
        assert!((t + 2.0).abs() < TOL, "t={t}");
    }

    #[test]
    fn projection_past_end_exceeds_length() {
        let t = projection_along(12.0, -1.0, 0.0, 0.0, 10.0, 0.0);
        assert!((t - 12.0).abs() < TOL, "t={t}");
    }

    #[test]
    fn projection_diagonal_segment() {
        // Segment (0,0)→(3,4), length 5. Projection of the endpoint is 5.
        let t = projection_along(3.0, 4.0, 0.0, 0.0, 3.0, 4.0);
        assert!((t - 5.0).abs() < TOL, "t={t}");
    }

    #[test]
    fn projection_degenerate_segment() {
        let t = projection_along(3.0, 4.0, 1.0, 1.0, 1.0, 1.0);
        assert!(t.abs() < TOL, "t={t}");
    }
}
