use std::fmt;

use crate::math::Point3;

use super::{ElementId, Opening, WallSegment};

/// A data-quality anomaly recorded during boundary analysis.
///
/// Warnings never abort analysis; they describe input the engine
/// retained in degraded form or dropped entirely.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnalysisWarning {
    /// A curved segment was retained; dimensioning will skip it.
    CurvedSegment {
        segment_index: usize,
        element_id: Option<ElementId>,
    },
    /// A segment is not aligned with either plan axis.
    OffAxisSegment {
        segment_index: usize,
        orientation_degrees: f64,
    },
    /// A segment belongs to a room separation line, not a wall.
    SeparatorSegment { segment_index: usize },
    /// A boundary curve with a degenerate chord was dropped.
    DegenerateCurveDropped { element_id: Option<ElementId> },
    /// An opening with non-positive width or height was dropped.
    DegenerateOpeningDropped { element_id: ElementId },
    /// No straight wall segment lies within the association tolerance.
    UnassociatedOpening {
        element_id: ElementId,
        nearest_distance: Option<f64>,
    },
    /// The boundary centroid was degenerate; outward normals fall back
    /// to the left-hand side of each segment.
    DegenerateCentroid,
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurvedSegment {
                segment_index,
                element_id,
            } => match element_id {
                Some(id) => write!(f, "segment {segment_index} (element {id}) is curved"),
                None => write!(f, "segment {segment_index} is curved"),
            },
            Self::OffAxisSegment {
                segment_index,
                orientation_degrees,
            } => write!(
                f,
                "segment {segment_index} is off-axis at {orientation_degrees:.2}°"
            ),
            Self::SeparatorSegment { segment_index } => {
                write!(f, "segment {segment_index} is a room separation line")
            }
            Self::DegenerateCurveDropped { element_id } => match element_id {
                Some(id) => write!(f, "degenerate boundary curve dropped (element {id})"),
                None => write!(f, "degenerate boundary curve dropped"),
            },
            Self::DegenerateOpeningDropped { element_id } => {
                write!(f, "opening {element_id} has degenerate extents, dropped")
            }
            Self::UnassociatedOpening {
                element_id,
                nearest_distance,
            } => match nearest_distance {
                Some(d) => write!(
                    f,
                    "opening {element_id} has no wall within tolerance (nearest {d:.3})"
                ),
                None => write!(f, "opening {element_id} has no candidate wall"),
            },
            Self::DegenerateCentroid => {
                write!(f, "boundary centroid is degenerate, normals use the left side")
            }
        }
    }
}

/// Immutable product of boundary analysis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomBoundary {
    /// Wall segments in boundary order.
    pub segments: Vec<WallSegment>,
    /// Junction points between consecutive segments, including the
    /// closing junction when the loop closes.
    pub corners: Vec<Point3>,
    /// Openings associated with segments, in input order.
    pub openings: Vec<Opening>,
    /// Total boundary length (arc length for curved segments).
    pub perimeter: f64,
    /// Data-quality anomalies observed during analysis.
    pub warnings: Vec<AnalysisWarning>,
}

impl RoomBoundary {
    /// Returns an empty boundary with no segments and no warnings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
            corners: Vec::new(),
            openings: Vec::new(),
            perimeter: 0.0,
            warnings: Vec::new(),
        }
    }
}
