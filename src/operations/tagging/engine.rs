use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::{Aabb, DEFAULT_COLLISION_MARGIN, ElementId};
use crate::log::{debug, info, warn};
use crate::math::{Point3, TOLERANCE, Vector3};

use super::strategy::CandidatePositions;

/// Upper bound on candidates tried per element.
///
/// Bounds worst-case batch latency; the candidate sequence is longer,
/// but everything past this count is never probed.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10;

/// Validated inputs for tag placement.
#[derive(Debug, Clone)]
pub struct TagPlacementParams {
    tag_width: f64,
    tag_height: f64,
    preferred_offset: Vector3,
    margin: f64,
}

impl TagPlacementParams {
    /// Creates placement parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if either tag extent is non-positive or not
    /// finite, or if the preferred offset is zero or not finite.
    pub fn new(tag_width: f64, tag_height: f64, preferred_offset: Vector3) -> Result<Self> {
        for (parameter, value) in [("tag_width", tag_width), ("tag_height", tag_height)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { parameter, value }.into());
            }
            if value <= 0.0 {
                return Err(ParameterError::NonPositive { parameter, value }.into());
            }
        }
        let norm = preferred_offset.norm();
        if !norm.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: "preferred_offset",
                value: norm,
            }
            .into());
        }
        if norm < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            tag_width,
            tag_height,
            preferred_offset,
            margin: DEFAULT_COLLISION_MARGIN,
        })
    }

    /// Overrides the collision clearance margin.
    ///
    /// # Errors
    ///
    /// Returns an error if `margin` is negative or not finite.
    pub fn with_margin(mut self, margin: f64) -> Result<Self> {
        if !margin.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: "margin",
                value: margin,
            }
            .into());
        }
        if margin < 0.0 {
            return Err(ParameterError::Negative {
                parameter: "margin",
                value: margin,
            }
            .into());
        }
        self.margin = margin;
        Ok(self)
    }

    /// Tag box width in internal units.
    #[must_use]
    pub fn tag_width(&self) -> f64 {
        self.tag_width
    }

    /// Tag box height in internal units.
    #[must_use]
    pub fn tag_height(&self) -> f64 {
        self.tag_height
    }

    /// Preferred displacement from the element center.
    #[must_use]
    pub fn preferred_offset(&self) -> Vector3 {
        self.preferred_offset
    }

    /// Collision clearance margin.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }
}

/// One element to be tagged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRef {
    /// Host element id.
    pub id: ElementId,
    /// Tagging anchor, usually the element's location point.
    pub center: Point3,
    /// Element extents, used for the leader decision.
    pub bounds: Aabb,
}

impl ElementRef {
    /// Creates an element reference with an explicit anchor.
    #[must_use]
    pub fn new(id: ElementId, center: Point3, bounds: Aabb) -> Self {
        Self { id, center, bounds }
    }

    /// Creates an element reference anchored at the bounds center.
    #[must_use]
    pub fn from_bounds(id: ElementId, bounds: Aabb) -> Self {
        Self {
            id,
            center: bounds.center(),
            bounds,
        }
    }
}

/// Outcome of placing one tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagPlacement {
    /// The tagged element.
    pub element_id: ElementId,
    /// Chosen tag head position; the preferred position when placement
    /// failed.
    pub location: Point3,
    /// Whether the tag needs a leader line.
    pub has_leader: bool,
    /// Candidates probed, including the successful one.
    pub attempt_count: u32,
    /// Whether a collision-free position was found.
    pub is_success: bool,
    /// Set only on failure.
    pub failure_reason: Option<String>,
}

/// Aggregate outcome of a placement batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchResult {
    /// Per-element outcomes, in input order.
    pub placements: Vec<TagPlacement>,
    /// Number of successful placements.
    pub success_count: usize,
    /// Number of elements whose candidates were exhausted.
    pub failed_count: usize,
}

impl BatchResult {
    /// Fraction of elements placed successfully; `1.0` for an empty
    /// batch.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        if self.placements.is_empty() {
            return 1.0;
        }
        self.success_count as f64 / self.placements.len() as f64
    }

    /// Whether every element was placed.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed_count == 0
    }
}

/// Places tags for a batch of elements, avoiding existing annotations
/// and each other.
///
/// Elements are processed in input order. Each one probes at most
/// [`MAX_PLACEMENT_ATTEMPTS`] candidates; the first whose tag box keeps
/// the clearance margin from every occupied box wins and immediately
/// joins the occupied set. Exhaustion is recorded per element and never
/// aborts the batch.
#[derive(Debug)]
pub struct TagPlacementBatch {
    elements: Vec<ElementRef>,
    existing_tags: Vec<Aabb>,
    params: TagPlacementParams,
}

impl TagPlacementBatch {
    /// Creates a placement batch.
    #[must_use]
    pub fn new(
        elements: Vec<ElementRef>,
        existing_tags: Vec<Aabb>,
        params: TagPlacementParams,
    ) -> Self {
        Self {
            elements,
            existing_tags,
            params,
        }
    }

    /// Executes the batch.
    #[must_use]
    pub fn execute(&self) -> BatchResult {
        info!(
            elements = self.elements.len(),
            existing = self.existing_tags.len(),
            "tag placement batch start"
        );

        let mut occupied = self.existing_tags.clone();
        let mut placements = Vec::with_capacity(self.elements.len());
        let mut success_count = 0;
        let mut failed_count = 0;

        let half_w = self.params.tag_width * 0.5;
        let half_h = self.params.tag_height * 0.5;

        for element in &self.elements {
            let candidates = CandidatePositions::new(
                element.center,
                self.params.preferred_offset,
                element.bounds.characteristic_width(),
            );

            let mut attempts: u32 = 0;
            let mut found = None;
            for candidate in candidates.take(MAX_PLACEMENT_ATTEMPTS) {
                attempts += 1;
                let tag_box =
                    Aabb::from_center_half_extents(candidate.position, half_w, half_h, 0.0);
                let blocked = occupied
                    .iter()
                    .any(|b| tag_box.intersects_with_margin(b, self.params.margin));
                if !blocked {
                    found = Some((candidate, tag_box));
                    break;
                }
            }

            match found {
                Some((candidate, tag_box)) => {
                    debug!(element = %element.id, attempts, "tag placed");
                    occupied.push(tag_box);
                    success_count += 1;
                    placements.push(TagPlacement {
                        element_id: element.id,
                        location: candidate.position,
                        has_leader: candidate.has_leader,
                        attempt_count: attempts,
                        is_success: true,
                        failure_reason: None,
                    });
                }
                None => {
                    warn!(element = %element.id, "placement candidates exhausted");
                    failed_count += 1;
                    placements.push(TagPlacement {
                        element_id: element.id,
                        location: element.center + self.params.preferred_offset,
                        has_leader: false,
                        attempt_count: attempts,
                        is_success: false,
                        failure_reason: Some(format!(
                            "No collision-free placement found after {MAX_PLACEMENT_ATTEMPTS} attempts"
                        )),
                    });
                }
            }
        }

        info!(
            succeeded = success_count,
            failed = failed_count,
            "tag placement batch complete"
        );

        BatchResult {
            placements,
            success_count,
            failed_count,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanmarkError;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn unit_element(id: i64, x: f64, y: f64) -> ElementRef {
        ElementRef::from_bounds(
            ElementId(id),
            Aabb::from_center_half_extents(p(x, y), 0.5, 0.5, 0.5),
        )
    }

    fn params() -> TagPlacementParams {
        TagPlacementParams::new(1.0, 0.5, Vector3::new(0.0, 1.5, 0.0)).unwrap()
    }

    #[test]
    fn rejects_bad_extents_and_offsets() {
        assert!(matches!(
            TagPlacementParams::new(0.0, 0.5, Vector3::new(0.0, 1.0, 0.0)),
            Err(PlanmarkError::Parameter(ParameterError::NonPositive { .. }))
        ));
        assert!(matches!(
            TagPlacementParams::new(1.0, f64::NAN, Vector3::new(0.0, 1.0, 0.0)),
            Err(PlanmarkError::Geometry(GeometryError::NonFinite { .. }))
        ));
        assert!(matches!(
            TagPlacementParams::new(1.0, 0.5, Vector3::zeros()),
            Err(PlanmarkError::Geometry(GeometryError::ZeroVector))
        ));
        assert!(params().with_margin(-0.1).is_err());
    }

    #[test]
    fn empty_batch_is_a_complete_success() {
        let result = TagPlacementBatch::new(Vec::new(), Vec::new(), params()).execute();
        assert!(result.placements.is_empty());
        assert!(result.is_complete_success());
        assert!((result.success_rate() - 1.0).abs() < TOL);
    }

    #[test]
    fn unobstructed_element_takes_the_preferred_position() {
        let result =
            TagPlacementBatch::new(vec![unit_element(1, 0.0, 0.0)], Vec::new(), params()).execute();
        assert_eq!(result.success_count, 1);
        let placement = &result.placements[0];
        assert!(placement.is_success);
        assert_eq!(placement.attempt_count, 1);
        assert!((placement.location.x).abs() < TOL);
        assert!((placement.location.y - 1.5).abs() < TOL);
        assert!(placement.failure_reason.is_none());
    }

    #[test]
    fn existing_tag_pushes_placement_to_the_next_candidate() {
        let existing = vec![Aabb::from_center_half_extents(p(0.0, 1.5), 0.6, 0.4, 0.5)];
        let result =
            TagPlacementBatch::new(vec![unit_element(1, 0.0, 0.0)], existing, params()).execute();
        let placement = &result.placements[0];
        assert!(placement.is_success);
        assert_eq!(placement.attempt_count, 2);
        // Second candidate: east at the base distance.
        assert!((placement.location.x - 1.5).abs() < TOL);
        assert!(placement.location.y.abs() < TOL);
    }

    #[test]
    fn placed_tags_occupy_space_for_later_elements() {
        // Two coincident elements: the second must dodge the first's tag.
        let elements = vec![unit_element(1, 0.0, 0.0), unit_element(2, 0.0, 0.0)];
        let result = TagPlacementBatch::new(elements, Vec::new(), params()).execute();
        assert_eq!(result.success_count, 2);
        assert_eq!(result.placements[0].attempt_count, 1);
        assert_eq!(result.placements[1].attempt_count, 2);
    }

    #[test]
    fn successful_placements_keep_mutual_clearance() {
        // Five coincident elements force the later ones around the
        // compass; every placed box must still respect the margin.
        let elements: Vec<ElementRef> = (0..5).map(|i| unit_element(i, 0.0, 0.0)).collect();
        let params = params();
        let margin = params.margin();
        let result = TagPlacementBatch::new(elements, Vec::new(), params).execute();
        assert!(result.is_complete_success());

        let boxes: Vec<Aabb> = result
            .placements
            .iter()
            .map(|p| Aabb::from_center_half_extents(p.location, 0.5, 0.25, 0.0))
            .collect();
        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                assert!(!a.intersects_with_margin(b, margin), "{a:?} crowds {b:?}");
            }
        }
    }

    #[test]
    fn grid_of_elements_places_cleanly() {
        // 24 elements on an 8-unit grid.
        let mut elements = Vec::new();
        for row in 0..4_i64 {
            for col in 0..6_i64 {
                #[allow(clippy::cast_precision_loss)]
                let (x, y) = (col as f64 * 8.0, row as f64 * 8.0);
                elements.push(unit_element(row * 6 + col, x, y));
            }
        }
        let params = TagPlacementParams::new(2.0, 0.9, Vector3::new(0.0, 1.5, 0.0)).unwrap();
        let result = TagPlacementBatch::new(elements, Vec::new(), params).execute();

        assert_eq!(result.placements.len(), 24);
        assert!(
            result.success_rate() >= 0.95,
            "success rate {}",
            result.success_rate()
        );
        assert!(result.is_complete_success());
    }

    #[test]
    fn crowded_element_lands_on_the_eighth_candidate_with_a_leader() {
        // Small element, wide preferred offset. Blockers cover the
        // preferred position and every compass stop before south.
        let blockers = vec![
            // Everything at or above y = -0.1, generously wide.
            Aabb::from_corners(Point3::new(-4.0, -0.1, -1.0), Point3::new(4.0, 4.0, 1.0)),
            // The south-west diagonal stop.
            Aabb::from_center_half_extents(
                Point3::new(-1.414_213_562, -1.414_213_562, 0.0),
                0.3,
                0.3,
                1.0,
            ),
        ];
        let params = TagPlacementParams::new(1.0, 0.5, Vector3::new(0.0, 2.0, 0.0)).unwrap();
        let result =
            TagPlacementBatch::new(vec![unit_element(9, 0.0, 0.0)], blockers, params).execute();

        let placement = &result.placements[0];
        assert!(placement.is_success);
        assert_eq!(placement.attempt_count, 8);
        assert!(placement.has_leader);
        // Eighth candidate: due south at the base distance.
        assert!(placement.location.x.abs() < 1e-9);
        assert!((placement.location.y + 2.0).abs() < 1e-9);
    }

    #[test]
    fn exhaustion_is_recorded_and_the_batch_continues() {
        // First element is buried under a huge blocker; the second is
        // far away and unobstructed.
        let blockers = vec![Aabb::from_corners(
            Point3::new(-6.0, -6.0, -1.0),
            Point3::new(6.0, 6.0, 1.0),
        )];
        let elements = vec![unit_element(1, 0.0, 0.0), unit_element(2, 100.0, 0.0)];
        let result = TagPlacementBatch::new(elements, blockers, params()).execute();

        assert_eq!(result.success_count, 1);
        assert_eq!(result.failed_count, 1);
        assert!(!result.is_complete_success());
        assert!((result.success_rate() - 0.5).abs() < TOL);

        let failed = &result.placements[0];
        assert!(!failed.is_success);
        assert_eq!(failed.attempt_count, 10);
        assert_eq!(
            failed.failure_reason.as_deref(),
            Some("No collision-free placement found after 10 attempts")
        );
        // Failure still reports the would-be preferred location.
        assert!((failed.location.y - 1.5).abs() < TOL);

        assert!(result.placements[1].is_success);
    }
}
