use super::Code;
use crate::{Pt2, Real};
use serde::{Deserialize, Serialize};

/// Arguments handed to the TID300 ellipse template builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tid300Arguments {
    /// Pixel points as `[major_start, major_end, minor_start, minor_end]`.
    pub points: [Pt2; 4],
    pub area: Real,
    pub tracking_identifier_text_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finding: Option<Code>,
    #[serde(default)]
    pub finding_sites: Vec<Code>,
}

impl Tid300Arguments {
    pub fn major_axis(&self) -> (Pt2, Pt2) {
        (self.points[0], self.points[1])
    }

    pub fn minor_axis(&self) -> (Pt2, Pt2) {
        (self.points[2], self.points[3])
    }
}
