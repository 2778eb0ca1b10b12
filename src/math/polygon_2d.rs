use super::{Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the centroid of a polygon in the XY plane.
///
/// Uses the area-weighted formula for proper polygons and falls back to
/// the vertex average when the signed area is degenerate (collinear
/// input). The returned z coordinate is taken from the first vertex.
/// Returns `None` for empty input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid_2d(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }

    let area = signed_area_2d(points);
    if area.abs() > TOLERANCE {
        let n = points.len();
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let cross = points[i].x * points[j].y - points[j].x * points[i].y;
            cx += (points[i].x + points[j].x) * cross;
            cy += (points[i].y + points[j].y) * cross;
        }
        let scale = 1.0 / (6.0 * area);
        return Some(Point3::new(cx * scale, cy * scale, points[0].z));
    }

    let inv = 1.0 / points.len() as f64;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in points {
        cx += p.x;
        cy += p.y;
    }
    Some(Point3::new(cx * inv, cy * inv, points[0].z))
}

/// Computes the normalized direction from point `a` to point `b` in the
/// XY plane.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: &Point3, b: &Point3) -> Result<Vector3> {
    let d = b - a;
    let len = (d.x * d.x + d.y * d.y).sqrt();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(Vector3::new(d.x / len, d.y / len, 0.0))
}

/// Returns the left-pointing normal of a direction vector in the XY plane.
#[must_use]
pub fn left_normal(dir: Vector3) -> Vector3 {
    Vector3::new(-dir.y, dir.x, 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let area = signed_area_2d(&pts);
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point3::new(0.0, 0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_unit_square() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let c = centroid_2d(&pts).unwrap();
        assert!((c.x - 0.5).abs() < TOLERANCE);
        assert!((c.y - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_winding_independent() {
        let ccw = vec![
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(6.0, 1.0, 0.0),
            Point3::new(6.0, 4.0, 0.0),
            Point3::new(2.0, 4.0, 0.0),
        ];
        let cw: Vec<Point3> = ccw.iter().rev().copied().collect();
        let a = centroid_2d(&ccw).unwrap();
        let b = centroid_2d(&cw).unwrap();
        assert!((a.x - 4.0).abs() < TOLERANCE);
        assert!((a.y - 2.5).abs() < TOLERANCE);
        assert!((a.x - b.x).abs() < TOLERANCE);
        assert!((a.y - b.y).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_collinear_falls_back_to_average() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let c = centroid_2d(&pts).unwrap();
        assert!((c.x - 1.0).abs() < TOLERANCE);
        assert!(c.y.abs() < TOLERANCE);
    }

    #[test]
    fn centroid_empty_is_none() {
        assert!(centroid_2d(&[]).is_none());
    }

    #[test]
    fn segment_direction_basic() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        let dir = segment_direction(&a, &b).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        let a = Point3::new(1.0, 1.0, 0.0);
        let b = Point3::new(1.0, 1.0, 0.0);
        assert!(segment_direction(&a, &b).is_err());
    }

    #[test]
    fn left_normal_basic() {
        let dir = Vector3::new(1.0, 0.0, 0.0);
        let n = left_normal(dir);
        assert!((n.x).abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }
}
