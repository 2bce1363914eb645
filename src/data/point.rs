//! A 2D point. Only X and Y of scene coordinates are exported.

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Formats as a TikZ coordinate with signed, fixed 4-decimal components.
///
/// ```
/// use curve_tikz::Point;
///
/// assert_eq!(Point::new(1.234, -0.5).to_string(), "(+1.2340,-0.5000)");
/// assert_eq!(Point::new(-0.0, 0.0).to_string(), "(+0.0000,+0.0000)");
/// ```
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", signed(self.x), signed(self.y))
    }
}

/// Signed fixed 4-decimal number; anything that rounds to zero prints as `+0.0000`
fn signed(value: f64) -> String {
    let value = if value.abs() < 0.00005 { 0.0 } else { value };
    format!("{:+.4}", value)
}
