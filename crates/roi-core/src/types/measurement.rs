//! Measurement records produced by the report front end.

use super::{Code, GraphicData, ImageId};
use crate::Real;
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// One ellipse measurement extracted from a structured report.
///
/// The front end pulls the tracking identifier, the referenced image, the
/// graphic data of the image region and the measured area out of the report
/// content tree; codecs only ever see this flattened record.
///
/// # Example
///
/// ```
/// use roi_core::{ImageId, SrMeasurement};
///
/// let m = SrMeasurement::new(
///     "Cornerstone3DTools@^0.1.0:EllipticalROI",
///     ImageId::new("img-1"),
///     &[0.0, 10.0, 0.0, -10.0, -5.0, 0.0, 5.0, 0.0],
///     157.08,
/// )
/// .unwrap();
/// assert_eq!(m.area, 157.08);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrMeasurement {
    pub tracking_identifier: String,
    pub referenced_image_id: ImageId,
    pub graphic_data: GraphicData,
    /// Numeric value of the measured-value group (area).
    pub area: Real,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finding: Option<Code>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finding_sites: Option<Vec<Code>>,
}

impl SrMeasurement {
    /// Construct a measurement without finding codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracking identifier is empty or the graphic
    /// data is not exactly 8 scalars.
    pub fn new(
        tracking_identifier: impl Into<String>,
        referenced_image_id: ImageId,
        graphic_data: &[Real],
        area: Real,
    ) -> Result<Self> {
        let tracking_identifier = tracking_identifier.into();
        ensure!(
            !tracking_identifier.is_empty(),
            "measurement has an empty tracking identifier"
        );
        let graphic_data = GraphicData::from_slice(graphic_data)?;
        Ok(Self {
            tracking_identifier,
            referenced_image_id,
            graphic_data,
            area,
            finding: None,
            finding_sites: None,
        })
    }

    pub fn with_finding(mut self, finding: Code) -> Self {
        self.finding = Some(finding);
        self
    }

    pub fn with_finding_sites(mut self, sites: Vec<Code>) -> Self {
        self.finding_sites = Some(sites);
        self
    }
}
