//! Splines of a curve object: Bezier, polyline, or an unsupported kind.

use crate::data::point::Point;
use serde::Deserialize;

/// A Bezier knot with its two tangent handles
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ControlPoint {
    /// The knot itself
    pub co: Point,
    /// Handle on the incoming side of the knot
    pub handle_left: Point,
    /// Handle on the outgoing side of the knot
    pub handle_right: Point,
}

impl ControlPoint {
    pub fn new(co: Point, handle_left: Point, handle_right: Point) -> Self {
        Self {
            co,
            handle_left,
            handle_right,
        }
    }
}

/// One spline of a curve object.
///
/// Any spline type other than `bezier` or `poly` (NURBS for example)
/// deserializes as [`Spline::Unsupported`] and is skipped on export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Spline {
    Bezier {
        #[serde(default)]
        points: Vec<ControlPoint>,
        #[serde(default)]
        cyclic: bool,
    },
    Poly {
        #[serde(default)]
        points: Vec<Point>,
        #[serde(default)]
        cyclic: bool,
    },
    #[serde(other)]
    Unsupported,
}

impl Spline {
    pub fn bezier(points: Vec<ControlPoint>, cyclic: bool) -> Self {
        Self::Bezier { points, cyclic }
    }

    pub fn poly(points: Vec<Point>, cyclic: bool) -> Self {
        Self::Poly { points, cyclic }
    }

    /// Whether the last point connects back to the first
    pub fn is_cyclic(&self) -> bool {
        match self {
            Self::Bezier { cyclic, .. } | Self::Poly { cyclic, .. } => *cyclic,
            Self::Unsupported => false,
        }
    }
}
