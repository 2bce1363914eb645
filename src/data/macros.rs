//! This module provides convenient macros for creating points and splines.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a Bezier control point from knot, left and right handle
#[macro_export]
macro_rules! knot {
    ($co:expr, $left:expr, $right:expr) => {
        $crate::data::ControlPoint::new(
            $crate::pt!($co.0, $co.1),
            $crate::pt!($left.0, $left.1),
            $crate::pt!($right.0, $right.1),
        )
    };
}

/// Macro for creating a Bezier spline from control points
#[macro_export]
macro_rules! bezier {
    ([$($point:expr),*]) => {
        $crate::data::Spline::bezier(vec![$($point),*], false)
    };
    (cyclic [$($point:expr),*]) => {
        $crate::data::Spline::bezier(vec![$($point),*], true)
    };
}

/// Macro for creating a polyline spline from coordinate pairs
#[macro_export]
macro_rules! poly {
    ([$(($x:expr, $y:expr)),*]) => {
        $crate::data::Spline::poly(vec![$($crate::pt!($x, $y)),*], false)
    };
    (cyclic [$(($x:expr, $y:expr)),*]) => {
        $crate::data::Spline::poly(vec![$($crate::pt!($x, $y)),*], true)
    };
}
