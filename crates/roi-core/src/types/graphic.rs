//! Report-side ellipse geometry.

use crate::{Pt2, Real};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building [`GraphicData`] from raw report scalars.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("ellipse graphic data needs {expected} scalars, got {got}")]
pub struct GraphicDataError {
    pub expected: usize,
    pub got: usize,
}

/// Ellipse axes as stored in a structured report.
///
/// The report carries 8 scalars: the `(x, y)` pixel coordinates of
/// `[major_start, major_end, minor_start, minor_end]`. The order is fixed by
/// the report format and is preserved here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Real>", into = "Vec<Real>")]
pub struct GraphicData {
    points: [Pt2; 4],
}

impl GraphicData {
    /// Number of scalars an ellipse occupies in the report.
    pub const LEN: usize = 8;

    /// Build from the axis endpoints directly.
    pub fn from_axes(major_start: Pt2, major_end: Pt2, minor_start: Pt2, minor_end: Pt2) -> Self {
        Self {
            points: [major_start, major_end, minor_start, minor_end],
        }
    }

    /// Reshape a flat report sequence into four points.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicDataError`] unless `values` has exactly [`Self::LEN`] entries.
    pub fn from_slice(values: &[Real]) -> Result<Self, GraphicDataError> {
        if values.len() != Self::LEN {
            return Err(GraphicDataError {
                expected: Self::LEN,
                got: values.len(),
            });
        }
        let p = |i: usize| Pt2::new(values[2 * i], values[2 * i + 1]);
        Ok(Self {
            points: [p(0), p(1), p(2), p(3)],
        })
    }

    /// Points in report order `[major_start, major_end, minor_start, minor_end]`.
    pub fn points(&self) -> &[Pt2; 4] {
        &self.points
    }

    pub fn major_axis(&self) -> (Pt2, Pt2) {
        (self.points[0], self.points[1])
    }

    pub fn minor_axis(&self) -> (Pt2, Pt2) {
        (self.points[2], self.points[3])
    }

    /// Flatten back into the 8-scalar report sequence.
    pub fn to_vec(&self) -> Vec<Real> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

impl TryFrom<Vec<Real>> for GraphicData {
    type Error = GraphicDataError;

    fn try_from(values: Vec<Real>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl From<GraphicData> for Vec<Real> {
    fn from(data: GraphicData) -> Self {
        data.to_vec()
    }
}
