pub mod aabb;
pub mod boundary;
pub mod opening;
pub mod room;
pub mod segment;

pub use aabb::{Aabb, DEFAULT_COLLISION_MARGIN};
pub use boundary::{BoundaryCurve, CurveGeometry, RawOpening};
pub use opening::{Opening, OpeningKind};
pub use room::{AnalysisWarning, RoomBoundary};
pub use segment::WallSegment;

use std::fmt;

/// Identifier of an element in the host model.
///
/// The engine never interprets the value; it is carried through analysis
/// and placement so results can be mapped back to host entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ElementId(pub i64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_display() {
        assert_eq!(ElementId(316_224).to_string(), "316224");
        assert_eq!(ElementId(-1).to_string(), "-1");
    }
}
