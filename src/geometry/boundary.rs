//! Raw boundary input as supplied by the host query layer.
//!
//! These types carry no derived data. Analysis turns them into
//! [`WallSegment`](super::WallSegment)s and
//! [`Opening`](super::Opening)s.

use crate::math::Point3;

use super::{ElementId, opening::OpeningKind};

/// Geometry of one raw boundary edge.
///
/// Curvature is explicit in the variant; there is no sentinel radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CurveGeometry {
    /// A straight edge.
    Line { start: Point3, end: Point3 },
    /// A circular arc through `start` and `end` with the given center
    /// and radius. The minor arc is assumed.
    Arc {
        start: Point3,
        end: Point3,
        center: Point3,
        radius: f64,
    },
}

impl CurveGeometry {
    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point3 {
        match self {
            Self::Line { start, .. } | Self::Arc { start, .. } => *start,
        }
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point3 {
        match self {
            Self::Line { end, .. } | Self::Arc { end, .. } => *end,
        }
    }

    /// Returns the straight-line distance between the endpoints.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        (self.end() - self.start()).norm()
    }

    /// Whether this edge is an arc.
    #[must_use]
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc { .. })
    }
}

/// One edge of a room boundary, with its host-element metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryCurve {
    /// Edge geometry.
    pub geometry: CurveGeometry,
    /// The bounding element (usually a wall), if the host reported one.
    pub element_id: Option<ElementId>,
    /// Whether the bounding element is a room separation line rather
    /// than a physical wall.
    pub separator: bool,
}

impl BoundaryCurve {
    /// Creates a straight boundary edge with no element metadata.
    #[must_use]
    pub fn line(start: Point3, end: Point3) -> Self {
        Self {
            geometry: CurveGeometry::Line { start, end },
            element_id: None,
            separator: false,
        }
    }

    /// Creates an arc boundary edge with no element metadata.
    #[must_use]
    pub fn arc(start: Point3, end: Point3, center: Point3, radius: f64) -> Self {
        Self {
            geometry: CurveGeometry::Arc {
                start,
                end,
                center,
                radius,
            },
            element_id: None,
            separator: false,
        }
    }

    /// Attaches the bounding element's id.
    #[must_use]
    pub fn with_element_id(mut self, id: ElementId) -> Self {
        self.element_id = Some(id);
        self
    }

    /// Marks the edge as a room separation line.
    #[must_use]
    pub fn with_separator(mut self, separator: bool) -> Self {
        self.separator = separator;
        self
    }
}

/// A door or window reported by the host, before association with a
/// wall segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawOpening {
    /// Host element id of the door or window.
    pub element_id: ElementId,
    /// Door or window.
    pub kind: OpeningKind,
    /// Center of the opening in plan.
    pub center: Point3,
    /// Width along the host wall, in internal units.
    pub width: f64,
    /// Height, in internal units. Not used by planning; carried for
    /// the data contract.
    pub height: f64,
}

impl RawOpening {
    /// Creates a raw opening record.
    #[must_use]
    pub fn new(
        element_id: ElementId,
        kind: OpeningKind,
        center: Point3,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            element_id,
            kind,
            center,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_endpoints_and_chord() {
        let c = CurveGeometry::Line {
            start: Point3::new(0.0, 0.0, 0.0),
            end: Point3::new(3.0, 4.0, 0.0),
        };
        assert_eq!(c.start(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(c.end(), Point3::new(3.0, 4.0, 0.0));
        assert!((c.chord_length() - 5.0).abs() < 1e-12);
        assert!(!c.is_arc());
    }

    #[test]
    fn arc_reports_curvature() {
        let c = CurveGeometry::Arc {
            start: Point3::new(1.0, 0.0, 0.0),
            end: Point3::new(0.0, 1.0, 0.0),
            center: Point3::origin(),
            radius: 1.0,
        };
        assert!(c.is_arc());
        assert!((c.chord_length() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn builder_attaches_metadata() {
        let c = BoundaryCurve::line(Point3::origin(), Point3::new(1.0, 0.0, 0.0))
            .with_element_id(ElementId(42))
            .with_separator(true);
        assert_eq!(c.element_id, Some(ElementId(42)));
        assert!(c.separator);
    }
}
