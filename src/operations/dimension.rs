use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::{Opening, RoomBoundary, WallSegment};
use crate::log::{debug, info, warn};
use crate::math::{Point3, Vector3, distance_2d};

use rustc_hash::FxHashMap;

/// Default minimum wall length worth dimensioning, in internal units.
pub const MIN_DIMENSIONABLE_LENGTH: f64 = 0.5;

/// Reference points closer than this along a chain collapse into one.
const POINT_MERGE_TOLERANCE: f64 = 1e-9;

/// Validated inputs for dimension chain planning.
#[derive(Debug, Clone)]
pub struct DimensionParameters {
    offset_distance: f64,
    style: String,
    min_segment_length: f64,
}

impl DimensionParameters {
    /// Creates planning parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset_distance` is not finite or not
    /// strictly positive.
    pub fn new(offset_distance: f64, style: impl Into<String>) -> Result<Self> {
        if !offset_distance.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: "offset_distance",
                value: offset_distance,
            }
            .into());
        }
        if offset_distance <= 0.0 {
            return Err(ParameterError::NonPositive {
                parameter: "offset_distance",
                value: offset_distance,
            }
            .into());
        }
        Ok(Self {
            offset_distance,
            style: style.into(),
            min_segment_length: MIN_DIMENSIONABLE_LENGTH,
        })
    }

    /// Overrides the minimum segment length below which no chain is
    /// planned.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is negative or not finite.
    pub fn with_min_segment_length(mut self, length: f64) -> Result<Self> {
        if !length.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: "min_segment_length",
                value: length,
            }
            .into());
        }
        if length < 0.0 {
            return Err(ParameterError::Negative {
                parameter: "min_segment_length",
                value: length,
            }
            .into());
        }
        self.min_segment_length = length;
        Ok(self)
    }

    /// Perpendicular distance from the wall to the dimension line.
    #[must_use]
    pub fn offset_distance(&self) -> f64 {
        self.offset_distance
    }

    /// Name of the host dimension style to apply.
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Minimum segment length worth dimensioning.
    #[must_use]
    pub fn min_segment_length(&self) -> f64 {
        self.min_segment_length
    }
}

/// One continuous dimension chain along a wall segment.
///
/// Reference points lie on the wall itself; the dimension line runs
/// parallel to it, displaced by `offset_vector` on the outward side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionChain {
    /// The wall segment this chain measures.
    pub segment: WallSegment,
    /// Measurement references in drawing order: segment start, opening
    /// edges, segment end. Monotone along the chain axis.
    pub reference_points: Vec<Point3>,
    /// Displacement from the wall to the dimension line.
    pub offset_vector: Vector3,
    /// `segment.start` displaced by `offset_vector`.
    pub line_start: Point3,
    /// `segment.end` displaced by `offset_vector`.
    pub line_end: Point3,
    /// Indices into `reference_points` that are opening edges.
    pub opening_indices: Vec<usize>,
    /// Name of the host dimension style to apply.
    pub style: String,
}

/// Plans dimension chains for every dimensionable segment of a boundary.
///
/// Curved segments, room separation lines, and segments shorter than the
/// configured minimum are skipped with a log entry; everything else
/// yields exactly one chain.
#[derive(Debug)]
pub struct DimensionPlan<'a> {
    boundary: &'a RoomBoundary,
    parameters: &'a DimensionParameters,
}

impl<'a> DimensionPlan<'a> {
    /// Creates a plan over an analyzed boundary.
    #[must_use]
    pub fn new(boundary: &'a RoomBoundary, parameters: &'a DimensionParameters) -> Self {
        Self {
            boundary,
            parameters,
        }
    }

    /// Executes the planning pass.
    ///
    /// Infallible: parameter contracts are enforced at construction and
    /// unplannable segments are skipped, never fatal.
    #[must_use]
    pub fn execute(&self) -> Vec<DimensionChain> {
        let mut by_segment: FxHashMap<usize, Vec<&Opening>> = FxHashMap::default();
        for opening in &self.boundary.openings {
            by_segment
                .entry(opening.wall_segment_index)
                .or_default()
                .push(opening);
        }

        let mut chains = Vec::new();
        for (index, segment) in self.boundary.segments.iter().enumerate() {
            if segment.is_curved {
                debug!(segment = index, "skipping curved segment");
                continue;
            }
            if segment.is_room_separator {
                debug!(segment = index, "skipping room separation line");
                continue;
            }
            if segment.length < self.parameters.min_segment_length {
                debug!(
                    segment = index,
                    length = segment.length,
                    "skipping segment below minimum length"
                );
                continue;
            }

            let openings = by_segment.get(&index).map_or(&[][..], |v| v.as_slice());
            chains.push(self.plan_chain(index, segment, openings));
        }

        info!(
            chains = chains.len(),
            segments = self.boundary.segments.len(),
            "dimension plan complete"
        );
        chains
    }

    fn plan_chain(
        &self,
        index: usize,
        segment: &WallSegment,
        openings: &[&Opening],
    ) -> DimensionChain {
        let direction = segment.direction();
        let intervals = opening_intervals(index, segment, openings);

        let mut reference_points = vec![segment.start];
        let mut opening_indices = Vec::new();
        for (lo, hi) in intervals {
            for t in [lo, hi] {
                let point = segment.start + direction * t;
                push_reference(&mut reference_points, &mut opening_indices, point);
            }
        }
        let coincides = reference_points
            .last()
            .is_some_and(|p| (segment.end - p).norm() < POINT_MERGE_TOLERANCE);
        if !coincides {
            reference_points.push(segment.end);
        }

        // Fixed reading order: ascending X for mostly-horizontal chains,
        // ascending Y otherwise.
        let mostly_horizontal = direction.x.abs() >= direction.y.abs();
        let descending = if mostly_horizontal {
            direction.x < 0.0
        } else {
            direction.y < 0.0
        };
        if descending {
            reference_points.reverse();
            let n = reference_points.len();
            for idx in &mut opening_indices {
                *idx = n - 1 - *idx;
            }
            opening_indices.reverse();
        }

        let offset_vector = segment.normal * self.parameters.offset_distance;
        debug!(
            segment = index,
            points = reference_points.len(),
            "planned dimension chain"
        );

        DimensionChain {
            segment: segment.clone(),
            reference_points,
            offset_vector,
            line_start: segment.start + offset_vector,
            line_end: segment.end + offset_vector,
            opening_indices,
            style: self.parameters.style.clone(),
        }
    }
}

/// Computes sorted, clamped, non-overlapping opening edge intervals as
/// parameters along the segment direction.
fn opening_intervals(
    index: usize,
    segment: &WallSegment,
    openings: &[&Opening],
) -> Vec<(f64, f64)> {
    let mut centers: Vec<(f64, f64)> = openings
        .iter()
        .map(|o| {
            let t = distance_2d::projection_along(
                o.center_position.x,
                o.center_position.y,
                segment.start.x,
                segment.start.y,
                segment.end.x,
                segment.end.y,
            );
            (t, o.width)
        })
        .collect();
    centers.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut intervals: Vec<(f64, f64)> = Vec::new();
    for (t, width) in centers {
        let half = width * 0.5;
        let lo = (t - half).clamp(0.0, segment.length);
        let hi = (t + half).clamp(0.0, segment.length);
        if lo > t - half || hi < t + half {
            debug!(segment = index, center = t, "opening overhangs the segment, edges clamped");
        }
        if let Some(&(_, prev_hi)) = intervals.last() {
            if lo < prev_hi {
                warn!(
                    segment = index,
                    center = t,
                    "opening overlaps the previous one, skipped"
                );
                continue;
            }
        }
        intervals.push((lo, hi));
    }
    intervals
}

/// Appends an opening edge point, collapsing it into the previous
/// reference when they coincide.
fn push_reference(points: &mut Vec<Point3>, opening_indices: &mut Vec<usize>, point: Point3) {
    if points
        .last()
        .is_some_and(|p| (point - p).norm() < POINT_MERGE_TOLERANCE)
    {
        let idx = points.len() - 1;
        if opening_indices.last() != Some(&idx) {
            opening_indices.push(idx);
        }
    } else {
        opening_indices.push(points.len());
        points.push(point);
    }
}
