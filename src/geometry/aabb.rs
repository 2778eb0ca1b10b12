use crate::math::{Point3, Vector3};

/// Default clearance margin between a candidate tag box and occupied
/// boxes, in internal units.
pub const DEFAULT_COLLISION_MARGIN: f64 = 0.1;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box from two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates a box centered on `center` with the given half-extents.
    ///
    /// Negative half-extents are treated as their absolute value.
    #[must_use]
    pub fn from_center_half_extents(center: Point3, half_x: f64, half_y: f64, half_z: f64) -> Self {
        let h = Vector3::new(half_x.abs(), half_y.abs(), half_z.abs());
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// Returns a copy grown by `margin` on every side.
    ///
    /// A negative margin shrinks the box; callers guard against
    /// inverting it.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        let m = Vector3::new(margin, margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Whether this box and `other` overlap.
    ///
    /// Boxes that exactly touch on a face, edge, or corner count as
    /// overlapping.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Whether this box overlaps `other` once grown by `margin`.
    ///
    /// This is the clearance test used during tag placement: a candidate
    /// passes only when it keeps at least `margin` of separation from
    /// every occupied box.
    #[must_use]
    pub fn intersects_with_margin(&self, other: &Self, margin: f64) -> bool {
        self.expanded(margin).intersects(other)
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Returns the half-extents along each axis.
    #[must_use]
    pub fn half_extents(&self) -> Vector3 {
        (self.max - self.min) * 0.5
    }

    /// Returns the larger of the two horizontal extents.
    ///
    /// Used as the element's footprint size when deciding whether an
    /// offset tag needs a leader line.
    #[must_use]
    pub fn characteristic_width(&self) -> f64 {
        (self.max.x - self.min.x).max(self.max.y - self.min.y)
    }
}
