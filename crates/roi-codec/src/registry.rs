//! Codec registry.
//!
//! Maps tool types to codecs. A registry is built once by the host and passed
//! to whatever reads or writes reports; there is no process-wide table.
//!
//! ```
//! use roi_codec::{CodecRegistry, ELLIPTICAL_ROI_TRACKING_IDENTIFIER};
//!
//! let registry = CodecRegistry::with_default_codecs();
//! let codec = registry
//!     .codec_for_tracking_identifier(ELLIPTICAL_ROI_TRACKING_IDENTIFIER)
//!     .unwrap();
//! assert_eq!(codec.tool_type(), "EllipticalROI");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{anyhow, Context, Result};
use roi_core::{
    EllipseState, ImageToWorld, PlaneMetadata, SrMeasurement, Tid300Arguments, WorldToImage,
};
use serde::{Deserialize, Serialize};

use crate::ellipse::EllipseCodec;
use crate::tracking::{self, ELLIPTICAL_ROI};
use crate::CodecError;

/// Renderer state of an annotation, tagged by tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "state")]
#[non_exhaustive]
pub enum ToolAnnotation {
    #[serde(rename = "EllipticalROI")]
    EllipticalRoi(EllipseState),
}

impl ToolAnnotation {
    pub fn tool_type(&self) -> &'static str {
        match self {
            ToolAnnotation::EllipticalRoi(_) => ELLIPTICAL_ROI,
        }
    }
}

/// A report codec for one annotation tool.
pub trait MeasurementCodec: Send + Sync {
    /// Tool type this codec handles (the tracking identifier suffix).
    fn tool_type(&self) -> &'static str;

    /// Tracking identifier written into encoded measurements.
    fn tracking_identifier(&self) -> String {
        tracking::tracking_identifier(self.tool_type())
    }

    /// Whether this codec can decode measurements tagged `tracking_identifier`.
    fn is_valid_tracking_identifier(&self, tracking_identifier: &str) -> bool {
        tracking::is_valid_tracking_identifier(tracking_identifier, self.tool_type())
    }

    fn decode(
        &self,
        measurement: &SrMeasurement,
        to_world: &dyn ImageToWorld,
        planes: &dyn PlaneMetadata,
    ) -> Result<ToolAnnotation, CodecError>;

    fn encode(
        &self,
        annotation: &ToolAnnotation,
        to_image: &dyn WorldToImage,
    ) -> Result<Tid300Arguments, CodecError>;
}

impl MeasurementCodec for EllipseCodec {
    fn tool_type(&self) -> &'static str {
        ELLIPTICAL_ROI
    }

    fn decode(
        &self,
        measurement: &SrMeasurement,
        to_world: &dyn ImageToWorld,
        planes: &dyn PlaneMetadata,
    ) -> Result<ToolAnnotation, CodecError> {
        EllipseCodec::decode(self, measurement, to_world, planes).map(ToolAnnotation::EllipticalRoi)
    }

    fn encode(
        &self,
        annotation: &ToolAnnotation,
        to_image: &dyn WorldToImage,
    ) -> Result<Tid300Arguments, CodecError> {
        let ToolAnnotation::EllipticalRoi(state) = annotation;
        EllipseCodec::encode(self, state, to_image)
    }
}

/// Tool type → codec table.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: BTreeMap<&'static str, Box<dyn MeasurementCodec>>,
}

impl CodecRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every codec shipped with this crate.
    pub fn with_default_codecs() -> Self {
        let mut registry = Self::new();
        registry.register(EllipseCodec::default());
        registry
    }

    /// Register `codec` under its tool type, returning the codec it replaces.
    pub fn register<C>(&mut self, codec: C) -> Option<Box<dyn MeasurementCodec>>
    where
        C: MeasurementCodec + 'static,
    {
        self.codecs.insert(codec.tool_type(), Box::new(codec))
    }

    pub fn get(&self, tool_type: &str) -> Option<&dyn MeasurementCodec> {
        self.codecs.get(tool_type).map(|c| &**c)
    }

    /// Registered tool types, sorted.
    pub fn tool_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codecs.keys().copied()
    }

    /// Codec able to decode measurements tagged `tracking_identifier`.
    pub fn codec_for_tracking_identifier(
        &self,
        tracking_identifier: &str,
    ) -> Option<&dyn MeasurementCodec> {
        let (_, tool_type) = tracking::split_tracking_identifier(tracking_identifier)?;
        self.get(tool_type)
            .filter(|codec| codec.is_valid_tracking_identifier(tracking_identifier))
    }

    /// Decode `measurement` with the codec named by its tracking identifier.
    pub fn decode_measurement(
        &self,
        measurement: &SrMeasurement,
        to_world: &dyn ImageToWorld,
        planes: &dyn PlaneMetadata,
    ) -> Result<ToolAnnotation> {
        let tracking_identifier = measurement.tracking_identifier.as_str();
        let codec = self
            .codec_for_tracking_identifier(tracking_identifier)
            .ok_or_else(|| anyhow!("no codec registered for {tracking_identifier:?}"))?;
        codec
            .decode(measurement, to_world, planes)
            .with_context(|| {
                format!(
                    "decoding {} measurement on image {}",
                    codec.tool_type(),
                    measurement.referenced_image_id
                )
            })
    }

    /// Encode `annotation` with the codec registered for its tool type.
    pub fn encode_annotation(
        &self,
        annotation: &ToolAnnotation,
        to_image: &dyn WorldToImage,
    ) -> Result<Tid300Arguments> {
        let tool_type = annotation.tool_type();
        let codec = self
            .get(tool_type)
            .ok_or_else(|| anyhow!("no codec registered for tool {tool_type}"))?;
        codec
            .encode(annotation, to_image)
            .with_context(|| format!("encoding {tool_type} annotation"))
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("tool_types", &self.codecs.keys().collect::<Vec<_>>())
            .finish()
    }
}
