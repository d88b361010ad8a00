use roi_core::{GraphicDataError, ImageId, Real};
use thiserror::Error;

use crate::classify::Axis;

/// Errors that can occur while decoding or encoding an ellipse annotation.
///
/// A failed call never yields partial state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    /// No plane descriptor is available for the image being decoded.
    #[error("missing plane metadata for image {image_id}")]
    MissingMetadata { image_id: ImageId },
    /// The annotation does not reference an image.
    #[error("annotation has no referenced image id")]
    MissingReferenceImage,
    /// Neither axis is parallel to the image column direction.
    #[error(
        "oblique ellipse on image {image_id}: |column·major| = {major_dot:.6}, \
         |column·minor| = {minor_dot:.6}; only row/column aligned axes are supported"
    )]
    UnsupportedGeometry {
        image_id: ImageId,
        major_dot: Real,
        minor_dot: Real,
    },
    /// No cached statistics exist for the referenced image.
    #[error("no cached stats for image {image_id}")]
    InconsistentCache { image_id: ImageId },
    /// The report graphic data does not describe two axes.
    #[error(transparent)]
    InvalidGraphicData(#[from] GraphicDataError),
    /// An axis has coincident endpoints in world space.
    #[error("{axis} axis endpoints coincide; axis direction is undefined")]
    DegenerateAxis { axis: Axis },
}
