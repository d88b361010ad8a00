//! Elliptical ROI codec.
//!
//! Converts between the report form of an ellipse (major and minor axis
//! endpoints in pixel space) and the renderer form (`top`, `bottom`, `left`,
//! `right` extremities in world space).

use std::collections::BTreeMap;

use log::debug;
use roi_core::{
    unit_direction, AnnotationMetadata, EllipseHandles, EllipsePoints, EllipseState,
    EllipseStats, GraphicData, ImageId, ImageToWorld, PlaneMetadata, Pt2, Pt3, Real,
    SrMeasurement, Tid300Arguments, WorldToImage,
};

use crate::classify::{
    classify_image_extents, classify_world_axes, Axis, ClassifierOptions, ColumnAlignment,
    MajorPair,
};
use crate::tracking::{ELLIPTICAL_ROI, ELLIPTICAL_ROI_TRACKING_IDENTIFIER};
use crate::CodecError;

/// Codec for the elliptical ROI tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipseCodec {
    pub options: ClassifierOptions,
}

impl EllipseCodec {
    pub fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }

    /// Map report axes to world extremities ordered `[top, bottom, left, right]`.
    ///
    /// The axis parallel to the image column direction becomes `top/bottom`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::DegenerateAxis`] if an axis has zero length in world space;
    /// - [`CodecError::MissingMetadata`] if `planes` knows nothing about `image_id`;
    /// - [`CodecError::UnsupportedGeometry`] if neither axis is column-aligned.
    pub fn decode_points(
        &self,
        graphic_data: &GraphicData,
        image_id: &ImageId,
        to_world: &dyn ImageToWorld,
        planes: &dyn PlaneMetadata,
    ) -> Result<EllipsePoints, CodecError> {
        let report_points = *graphic_data.points();
        let [major_start, major_end, minor_start, minor_end]: [Pt3; 4] =
            report_points.map(|p| to_world.image_to_world(image_id, p));

        let major_axis = unit_direction(&major_start, &major_end)
            .ok_or(CodecError::DegenerateAxis { axis: Axis::Major })?;
        let minor_axis = unit_direction(&minor_start, &minor_end)
            .ok_or(CodecError::DegenerateAxis { axis: Axis::Minor })?;

        let plane = planes
            .plane_descriptor(image_id)
            .ok_or_else(|| CodecError::MissingMetadata {
                image_id: image_id.clone(),
            })?;

        let alignment = ColumnAlignment::new(&plane.column_direction, &major_axis, &minor_axis);
        debug!(
            "ellipse on {}: |col·major|={:.6} |col·minor|={:.6}",
            image_id, alignment.major_dot, alignment.minor_dot
        );
        let points = match classify_world_axes(&alignment, &self.options) {
            Some(Axis::Major) => [major_start, major_end, minor_start, minor_end],
            Some(Axis::Minor) => [minor_start, minor_end, major_start, major_end],
            None => {
                return Err(CodecError::UnsupportedGeometry {
                    image_id: image_id.clone(),
                    major_dot: alignment.major_dot,
                    minor_dot: alignment.minor_dot,
                })
            }
        };

        Ok(EllipsePoints::from(points))
    }

    /// Decode a report measurement into renderer state.
    ///
    /// The measured area is cached verbatim under the referenced image.
    pub fn decode(
        &self,
        measurement: &SrMeasurement,
        to_world: &dyn ImageToWorld,
        planes: &dyn PlaneMetadata,
    ) -> Result<EllipseState, CodecError> {
        let image_id = &measurement.referenced_image_id;
        let points = self.decode_points(&measurement.graphic_data, image_id, to_world, planes)?;

        let mut cached_stats = BTreeMap::new();
        cached_stats.insert(
            image_id.clone(),
            EllipseStats {
                area: measurement.area,
            },
        );

        let mut metadata = AnnotationMetadata::new(ELLIPTICAL_ROI);
        metadata.referenced_image_id = Some(image_id.clone());
        metadata.finding = measurement.finding.clone();
        metadata.finding_sites = measurement.finding_sites.clone();

        Ok(EllipseState {
            metadata,
            handles: EllipseHandles::new(points),
            cached_stats,
        })
    }

    /// Encode renderer state into TID300 template arguments.
    ///
    /// The pair with the larger pixel extent is reported as the major axis.
    ///
    /// # Errors
    ///
    /// - [`CodecError::MissingReferenceImage`] if the state references no image;
    /// - [`CodecError::InconsistentCache`] if no area is cached for that image.
    pub fn encode(
        &self,
        state: &EllipseState,
        to_image: &dyn WorldToImage,
    ) -> Result<Tid300Arguments, CodecError> {
        let image_id = state
            .metadata
            .referenced_image_id
            .as_ref()
            .ok_or(CodecError::MissingReferenceImage)?;

        let pixels: [Pt2; 4] = state
            .handles
            .points
            .to_array()
            .map(|p| to_image.world_to_image(image_id, &p));
        let [top, bottom, left, right] = pixels;

        let (major, extents) = classify_image_extents(&pixels);
        debug!(
            "ellipse on {}: vertical={:.3} horizontal={:.3} major={:?}",
            image_id, extents.vertical, extents.horizontal, major
        );
        let points = match major {
            MajorPair::TopBottom => [top, bottom, left, right],
            MajorPair::LeftRight => [left, right, top, bottom],
        };

        let area: Real = state
            .stats_for(image_id)
            .map(|s| s.area)
            .ok_or_else(|| CodecError::InconsistentCache {
                image_id: image_id.clone(),
            })?;

        Ok(Tid300Arguments {
            points,
            area,
            tracking_identifier_text_value: ELLIPTICAL_ROI_TRACKING_IDENTIFIER.to_string(),
            finding: state.metadata.finding.clone(),
            finding_sites: state.metadata.finding_sites.clone().unwrap_or_default(),
        })
    }
}
