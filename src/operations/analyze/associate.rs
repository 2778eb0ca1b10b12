use crate::geometry::WallSegment;
use crate::math::Point3;
use crate::math::distance_2d::point_to_segment_dist;

/// Outcome of matching one opening against the boundary's segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Association {
    /// Nearest candidate segment within tolerance.
    Associated {
        segment_index: usize,
        distance: f64,
    },
    /// The boundary has no straight, non-separator segment at all.
    NoCandidate,
    /// Every candidate is farther away than the tolerance.
    OutOfTolerance { nearest: f64 },
}

/// Finds the wall segment an opening belongs to.
///
/// Candidates are straight, non-separator segments; distance is measured
/// from the opening center to the finite segment in plan. The nearest
/// candidate wins when it lies within `tolerance` of the center.
pub fn associate(segments: &[WallSegment], center: Point3, tolerance: f64) -> Association {
    let mut nearest: Option<(usize, f64)> = None;

    for (index, segment) in segments.iter().enumerate() {
        if segment.is_curved || segment.is_room_separator {
            continue;
        }
        let d = point_to_segment_dist(
            center.x,
            center.y,
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
        );
        match nearest {
            Some((_, best)) if d >= best => {}
            _ => nearest = Some((index, d)),
        }
    }

    match nearest {
        None => Association::NoCandidate,
        Some((segment_index, distance)) if distance <= tolerance => Association::Associated {
            segment_index,
            distance,
        },
        Some((_, distance)) => Association::OutOfTolerance { nearest: distance },
    }
}
