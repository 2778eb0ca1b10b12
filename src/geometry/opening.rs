use std::fmt;

use crate::math::Point3;

use super::ElementId;

/// Category of a wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OpeningKind {
    Door,
    Window,
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => write!(f, "door"),
            Self::Window => write!(f, "window"),
        }
    }
}

/// An opening associated with a wall segment of an analyzed boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opening {
    /// Door or window.
    pub kind: OpeningKind,
    /// Index of the owning segment in the boundary's segment list.
    pub wall_segment_index: usize,
    /// Center of the opening in plan.
    pub center_position: Point3,
    /// Width along the wall, in internal units.
    pub width: f64,
    /// Height, in internal units.
    pub height: f64,
    /// Host element id of the door or window.
    pub element_id: ElementId,
}
