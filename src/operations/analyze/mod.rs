mod associate;

use crate::geometry::{
    AnalysisWarning, BoundaryCurve, CurveGeometry, Opening, RawOpening, RoomBoundary, WallSegment,
};
use crate::log::{debug, info, warn};
use crate::math::{Point3, TOLERANCE, angle, polygon_2d};

use associate::Association;

/// Default maximum plan distance between an opening center and its wall
/// segment, in internal units.
pub const OPENING_ASSOCIATION_TOLERANCE: f64 = 1.0;

/// Coincidence tolerance for junctions between consecutive segments.
const JUNCTION_TOLERANCE: f64 = 1e-6;

/// Decomposes a room's raw boundary into wall segments, corners, and
/// associated openings.
///
/// Analysis is tolerant by construction: degenerate curves and openings
/// are dropped, unmatchable openings are reported, curved and separator
/// segments are flagged, and every anomaly lands in the result's
/// warning list. The output feeds the dimension planner.
#[derive(Debug)]
pub struct BoundaryAnalysis {
    curves: Vec<BoundaryCurve>,
    openings: Vec<RawOpening>,
    association_tolerance: f64,
}

impl BoundaryAnalysis {
    /// Creates a new boundary analysis over raw host geometry.
    #[must_use]
    pub fn new(curves: Vec<BoundaryCurve>, openings: Vec<RawOpening>) -> Self {
        Self {
            curves,
            openings,
            association_tolerance: OPENING_ASSOCIATION_TOLERANCE,
        }
    }

    /// Overrides the opening association tolerance.
    #[must_use]
    pub fn with_association_tolerance(mut self, tolerance: f64) -> Self {
        self.association_tolerance = tolerance;
        self
    }

    /// Executes the analysis.
    ///
    /// Never fails: an empty curve list yields an empty boundary, and
    /// every data-quality anomaly is recorded as a warning instead of
    /// aborting.
    #[must_use]
    pub fn execute(&self) -> RoomBoundary {
        if self.curves.is_empty() {
            info!("boundary analysis: no curves, returning empty boundary");
            return RoomBoundary::empty();
        }

        info!(
            curves = self.curves.len(),
            openings = self.openings.len(),
            "boundary analysis start"
        );

        let mut warnings = Vec::new();
        let interior = self.interior_estimate(&mut warnings);
        let segments = self.build_segments(interior, &mut warnings);
        let corners = collect_corners(&segments);
        let perimeter: f64 = segments.iter().map(|s| s.length).sum();
        let openings = self.associate_openings(&segments, &mut warnings);

        info!(
            segments = segments.len(),
            corners = corners.len(),
            openings = openings.len(),
            warnings = warnings.len(),
            perimeter,
            "boundary analysis complete"
        );

        RoomBoundary {
            segments,
            corners,
            openings,
            perimeter,
            warnings,
        }
    }

    /// Estimates an interior point for outward-normal orientation.
    ///
    /// Uses the centroid of the loop's start vertices. A degenerate
    /// loop area means there is no usable interior; normals then fall
    /// back to the left side of each segment.
    fn interior_estimate(&self, warnings: &mut Vec<AnalysisWarning>) -> Option<Point3> {
        let vertices: Vec<Point3> = self.curves.iter().map(|c| c.geometry.start()).collect();
        let area = polygon_2d::signed_area_2d(&vertices);
        if area.abs() < TOLERANCE {
            warn!("boundary loop area is degenerate, normals fall back to the left side");
            warnings.push(AnalysisWarning::DegenerateCentroid);
            return None;
        }
        polygon_2d::centroid_2d(&vertices)
    }

    fn build_segments(
        &self,
        interior: Option<Point3>,
        warnings: &mut Vec<AnalysisWarning>,
    ) -> Vec<WallSegment> {
        let mut segments = Vec::new();

        for curve in &self.curves {
            let start = curve.geometry.start();
            let end = curve.geometry.end();

            let Ok(direction) = polygon_2d::segment_direction(&start, &end) else {
                debug!(element = ?curve.element_id, "dropping degenerate boundary curve");
                warnings.push(AnalysisWarning::DegenerateCurveDropped {
                    element_id: curve.element_id,
                });
                continue;
            };

            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let chord_len = (dx * dx + dy * dy).sqrt();

            let (is_curved, curve_radius, length) = match curve.geometry {
                CurveGeometry::Line { .. } => (false, None, chord_len),
                CurveGeometry::Arc { radius, .. } => {
                    let sweep = angle::minor_arc_sweep(chord_len, radius);
                    // Invalid radii degrade to the chord length.
                    let arc_len = (radius * sweep).max(chord_len);
                    (true, Some(radius), arc_len)
                }
            };

            let left = polygon_2d::left_normal(direction);
            let normal = match interior {
                Some(c) => {
                    let mid = Point3::from((start.coords + end.coords) * 0.5);
                    if left.dot(&(c - mid)) > 0.0 { -left } else { left }
                }
                None => left,
            };

            let orientation = angle::orientation_degrees(direction.x, direction.y);
            let index = segments.len();

            if is_curved {
                warn!(segment = index, "curved wall segment cannot be dimensioned");
                warnings.push(AnalysisWarning::CurvedSegment {
                    segment_index: index,
                    element_id: curve.element_id,
                });
            } else if !angle::is_axis_aligned(orientation) {
                debug!(segment = index, orientation, "segment is off-axis");
                warnings.push(AnalysisWarning::OffAxisSegment {
                    segment_index: index,
                    orientation_degrees: orientation,
                });
            }
            if curve.separator {
                debug!(segment = index, "segment is a room separation line");
                warnings.push(AnalysisWarning::SeparatorSegment {
                    segment_index: index,
                });
            }

            segments.push(WallSegment {
                start,
                end,
                normal,
                orientation_degrees: orientation,
                length,
                is_curved,
                curve_radius,
                is_room_separator: curve.separator,
                element_id: curve.element_id,
            });
        }

        segments
    }

    fn associate_openings(
        &self,
        segments: &[WallSegment],
        warnings: &mut Vec<AnalysisWarning>,
    ) -> Vec<Opening> {
        let mut openings = Vec::new();

        for raw in &self.openings {
            let degenerate = raw.width <= 0.0
                || raw.height <= 0.0
                || raw.width.is_nan()
                || raw.height.is_nan();
            if degenerate {
                debug!(element = %raw.element_id, "dropping opening with degenerate extents");
                warnings.push(AnalysisWarning::DegenerateOpeningDropped {
                    element_id: raw.element_id,
                });
                continue;
            }

            match associate::associate(segments, raw.center, self.association_tolerance) {
                Association::Associated {
                    segment_index,
                    distance,
                } => {
                    debug!(
                        element = %raw.element_id,
                        segment = segment_index,
                        distance,
                        "opening associated"
                    );
                    openings.push(Opening {
                        kind: raw.kind,
                        wall_segment_index: segment_index,
                        center_position: raw.center,
                        width: raw.width,
                        height: raw.height,
                        element_id: raw.element_id,
                    });
                }
                Association::NoCandidate => {
                    warn!(element = %raw.element_id, "opening has no candidate wall segment");
                    warnings.push(AnalysisWarning::UnassociatedOpening {
                        element_id: raw.element_id,
                        nearest_distance: None,
                    });
                }
                Association::OutOfTolerance { nearest } => {
                    warn!(
                        element = %raw.element_id,
                        nearest,
                        "opening lies outside the association tolerance"
                    );
                    warnings.push(AnalysisWarning::UnassociatedOpening {
                        element_id: raw.element_id,
                        nearest_distance: Some(nearest),
                    });
                }
            }
        }

        openings
    }
}

/// Collects junction points between consecutive segments, including the
/// closing junction when the loop closes.
///
/// A dropped curve leaves a gap; no corner is reported across it.
fn collect_corners(segments: &[WallSegment]) -> Vec<Point3> {
    if segments.len() < 2 {
        return Vec::new();
    }

    let mut corners = Vec::new();
    for pair in segments.windows(2) {
        if (pair[1].start - pair[0].end).norm() < JUNCTION_TOLERANCE {
            corners.push(pair[0].end);
        }
    }

    let first = &segments[0];
    let last = &segments[segments.len() - 1];
    if (first.start - last.end).norm() < JUNCTION_TOLERANCE {
        corners.push(last.end);
    }

    corners
}
