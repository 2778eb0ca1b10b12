use crate::math::{Point3, Vector3};

/// Number of compass directions probed per ring.
const COMPASS_DIRECTIONS: usize = 8;

/// Distance multipliers for the successive compass rings.
const RING_SCALES: [f64; 3] = [1.0, 1.5, 2.0];

/// One placement candidate produced by the search strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagCandidate {
    /// Proposed tag head position.
    pub position: Point3,
    /// Whether the tag needs a leader line back to the element.
    pub has_leader: bool,
}

/// Lazy generator of tag positions around an element.
///
/// Yields the preferred position first, then eight compass directions
/// (45° steps from +X) at the preferred distance, then the same eight
/// at 1.5× and 2× — 25 candidates in total. A candidate carries a
/// leader whenever its offset distance exceeds half the element's
/// characteristic width.
#[derive(Debug, Clone)]
pub struct CandidatePositions {
    center: Point3,
    preferred_offset: Vector3,
    base_distance: f64,
    characteristic_width: f64,
    index: usize,
}

impl CandidatePositions {
    /// Creates the candidate sequence for one element.
    #[must_use]
    pub fn new(center: Point3, preferred_offset: Vector3, characteristic_width: f64) -> Self {
        Self {
            center,
            preferred_offset,
            base_distance: preferred_offset.norm(),
            characteristic_width,
            index: 0,
        }
    }

    fn needs_leader(&self, offset_distance: f64) -> bool {
        offset_distance > 0.5 * self.characteristic_width
    }
}

impl Iterator for CandidatePositions {
    type Item = TagCandidate;

    fn next(&mut self) -> Option<TagCandidate> {
        let index = self.index;
        if index > COMPASS_DIRECTIONS * RING_SCALES.len() {
            return None;
        }
        self.index += 1;

        if index == 0 {
            return Some(TagCandidate {
                position: self.center + self.preferred_offset,
                has_leader: self.needs_leader(self.base_distance),
            });
        }

        let ring = (index - 1) / COMPASS_DIRECTIONS;
        let step = (index - 1) % COMPASS_DIRECTIONS;
        #[allow(clippy::cast_precision_loss)]
        let angle = (step as f64) * std::f64::consts::FRAC_PI_4;
        let distance = self.base_distance * RING_SCALES[ring];
        let offset = Vector3::new(angle.cos() * distance, angle.sin() * distance, 0.0);

        Some(TagCandidate {
            position: self.center + offset,
            has_leader: self.needs_leader(distance),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = 1 + COMPASS_DIRECTIONS * RING_SCALES.len();
        let remaining = total.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CandidatePositions {}
