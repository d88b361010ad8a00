//! Mathematical utilities and type definitions.
//!
//! This module provides the fundamental types used throughout the workspace
//! and the small vector helpers the axis classifiers are built on.

use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 2D point with [`Real`] coordinates (image pixel space).
pub type Pt2 = Point2<Real>;
/// 3D point with [`Real`] coordinates (world space).
pub type Pt3 = Point3<Real>;

/// Length below which a direction is treated as undefined.
pub const DIRECTION_EPS: Real = 1e-12;

/// Unit direction from `start` to `end`.
///
/// Returns `None` when the two points coincide (or are closer than
/// [`DIRECTION_EPS`]), since such a segment carries no direction.
pub fn unit_direction(start: &Pt3, end: &Pt3) -> Option<Vec3> {
    (*end - *start).try_normalize(DIRECTION_EPS)
}

/// Absolute cosine between two directions, `|a · b|`.
///
/// Both inputs are expected to be unit length; the value is not renormalised,
/// so a non-unit input shows up as a cosine above one.
pub fn abs_cosine(a: &Vec3, b: &Vec3) -> Real {
    a.dot(b).abs()
}
