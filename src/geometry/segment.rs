use crate::math::{Point3, Vector3};

use super::ElementId;

/// One analyzed edge of a room boundary.
///
/// Produced by boundary analysis; `normal` is unit length, perpendicular
/// to the chord, and points away from the room interior. `length` is the
/// chord length for straight segments and the arc length for curved ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSegment {
    /// Start of the segment chord.
    pub start: Point3,
    /// End of the segment chord.
    pub end: Point3,
    /// Unit outward normal of the chord.
    pub normal: Vector3,
    /// Direction angle of the chord in degrees, in `[0, 360)`.
    pub orientation_degrees: f64,
    /// Segment length in internal units (arc length when curved).
    pub length: f64,
    /// Whether the underlying edge is an arc.
    pub is_curved: bool,
    /// Arc radius when curved.
    pub curve_radius: Option<f64>,
    /// Whether the bounding element is a room separation line.
    pub is_room_separator: bool,
    /// Host element id of the bounding wall, if reported.
    pub element_id: Option<ElementId>,
}

impl WallSegment {
    /// Returns the unit direction of the chord from `start` to `end`.
    ///
    /// Analysis never produces a degenerate chord, so the norm is
    /// strictly positive.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        let d = self.end - self.start;
        d / d.norm()
    }

    /// Returns the chord midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        Point3::from((self.start.coords + self.end.coords) * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_segment() -> WallSegment {
        WallSegment {
            start: Point3::new(0.0, 0.0, 0.0),
            end: Point3::new(10.0, 0.0, 0.0),
            normal: Vector3::new(0.0, -1.0, 0.0),
            orientation_degrees: 0.0,
            length: 10.0,
            is_curved: false,
            curve_radius: None,
            is_room_separator: false,
            element_id: None,
        }
    }

    #[test]
    fn direction_is_unit() {
        let s = horizontal_segment();
        let d = s.direction();
        assert!((d.norm() - 1.0).abs() < 1e-12);
        assert!((d.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_of_horizontal_chord() {
        let s = horizontal_segment();
        assert_eq!(s.midpoint(), Point3::new(5.0, 0.0, 0.0));
    }
}
