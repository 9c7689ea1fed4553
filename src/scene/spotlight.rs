use kurbo::{Circle, Point, Shape};
use serde::{Deserialize, Serialize};

use crate::foundation::math::non_negative;

/// Circular reveal region, in the coordinate space of the rendered surface.
///
/// Owned and updated by the caller (usually from pointer movement). Rendering only reads it.
/// The default has radius 0, which hides the inverted layer entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotlightGeometry {
    pub radius: f64,
    #[serde(alias = "centerX")]
    pub center_x: f64,
    #[serde(alias = "centerY")]
    pub center_y: f64,
}

impl SpotlightGeometry {
    pub fn new(radius: f64, center: Point) -> Self {
        Self {
            radius,
            center_x: center.x,
            center_y: center.y,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Copy with non-finite or negative components replaced by zero.
    pub fn sanitized(&self) -> Self {
        Self {
            radius: non_negative(self.radius),
            center_x: if self.center_x.is_finite() {
                self.center_x
            } else {
                0.0
            },
            center_y: if self.center_y.is_finite() {
                self.center_y
            } else {
                0.0
            },
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.sanitized().radius == 0.0
    }

    pub fn circle(&self) -> Circle {
        let s = self.sanitized();
        Circle::new(s.center(), s.radius)
    }

    /// Whether the inverted layer is visible at `p`.
    pub fn reveals(&self, p: Point) -> bool {
        !self.is_hidden() && self.circle().contains(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/spotlight.rs"]
mod tests;
