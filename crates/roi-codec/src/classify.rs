//! Axis classification.
//!
//! The report stores an ellipse as `[major, minor]` axes; the renderer stores
//! it as `[top, bottom, left, right]`. Two independent rules decide which axis
//! is which:
//!
//! - decoding works in world space and asks which axis is parallel to the
//!   image column direction ([`classify_world_axes`]);
//! - encoding works in pixel space and asks whether `top/bottom` or
//!   `left/right` spans the larger extent ([`classify_image_extents`]).
//!
//! The two rules agree for axis-aligned ellipses on views with square pixels.
//! They are not equivalent in general (anisotropic pixel spacing is the
//! simplest counterexample), and both are kept as they are.

use std::fmt;

use roi_core::{abs_cosine, Pt2, Real, Vec3};
use serde::{Deserialize, Serialize};

/// Options controlling world-space axis classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOptions {
    /// An axis counts as column-aligned when `| |cos| - 1 | < parallel_tolerance`.
    pub parallel_tolerance: Real,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            parallel_tolerance: 1e-4,
        }
    }
}

/// Report axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Major,
    Minor,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Major => f.write_str("major"),
            Axis::Minor => f.write_str("minor"),
        }
    }
}

/// Absolute cosines between each axis and the image column direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnAlignment {
    pub major_dot: Real,
    pub minor_dot: Real,
}

impl ColumnAlignment {
    pub fn new(column_direction: &Vec3, major_axis: &Vec3, minor_axis: &Vec3) -> Self {
        Self {
            major_dot: abs_cosine(column_direction, major_axis),
            minor_dot: abs_cosine(column_direction, minor_axis),
        }
    }
}

fn is_parallel(abs_dot: Real, tolerance: Real) -> bool {
    (abs_dot - 1.0).abs() < tolerance
}

/// Which report axis occupies the renderer's `top/bottom` slots.
///
/// Returns `None` when neither axis is column-aligned (oblique ellipse). If
/// both are, the major axis wins.
pub fn classify_world_axes(alignment: &ColumnAlignment, opts: &ClassifierOptions) -> Option<Axis> {
    if is_parallel(alignment.major_dot, opts.parallel_tolerance) {
        Some(Axis::Major)
    } else if is_parallel(alignment.minor_dot, opts.parallel_tolerance) {
        Some(Axis::Minor)
    } else {
        None
    }
}

/// Pixel extents of the renderer's point pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageExtents {
    /// `|top.y - bottom.y|`
    pub vertical: Real,
    /// `|left.x - right.x|`
    pub horizontal: Real,
}

/// Which renderer point pair is reported as the major axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorPair {
    TopBottom,
    LeftRight,
}

/// Classify `[top, bottom, left, right]` pixel points by extent.
///
/// `top/bottom` is the major axis only when its vertical extent is strictly
/// larger; ties go to `left/right`.
pub fn classify_image_extents(points: &[Pt2; 4]) -> (MajorPair, ImageExtents) {
    let [top, bottom, left, right] = points;
    let extents = ImageExtents {
        vertical: (top.y - bottom.y).abs(),
        horizontal: (left.x - right.x).abs(),
    };
    let pair = if extents.vertical > extents.horizontal {
        MajorPair::TopBottom
    } else {
        MajorPair::LeftRight
    };
    (pair, extents)
}
