//! Structured-report codec for elliptical ROI annotations.
//!
//! Decoding turns the report's `[major, minor]` axis endpoints (pixel space)
//! into the renderer's `[top, bottom, left, right]` extremities (world space);
//! encoding goes the other way and produces TID300 template arguments.
//!
//! All coordinate conversions are injected through the services defined in
//! `roi-core`, so the codecs hold no image state:
//!
//! ```
//! use roi_codec::{EllipseCodec, ELLIPTICAL_ROI_TRACKING_IDENTIFIER};
//! use roi_core::{ImageId, ImagePlane, Pt3, SrMeasurement};
//!
//! let plane = ImagePlane::axial(Pt3::origin(), [1.0, 1.0]).unwrap();
//! let measurement = SrMeasurement::new(
//!     ELLIPTICAL_ROI_TRACKING_IDENTIFIER,
//!     ImageId::new("img-1"),
//!     &[0.0, 10.0, 0.0, -10.0, -5.0, 0.0, 5.0, 0.0],
//!     157.08,
//! )
//! .unwrap();
//!
//! let codec = EllipseCodec::default();
//! let state = codec.decode(&measurement, &plane, &plane).unwrap();
//! let args = codec.encode(&state, &plane).unwrap();
//! assert_eq!(args.area, 157.08);
//! ```

/// World- and image-space axis classification.
pub mod classify;
/// Elliptical ROI decoder and encoder.
pub mod ellipse;
mod error;
/// Explicit tool type → codec registry.
pub mod registry;
/// Tracking identifier constants and validation.
pub mod tracking;

pub use classify::{Axis, ClassifierOptions};
pub use ellipse::EllipseCodec;
pub use error::CodecError;
pub use registry::{CodecRegistry, MeasurementCodec, ToolAnnotation};
pub use tracking::{
    is_valid_tracking_identifier, ELLIPTICAL_ROI, ELLIPTICAL_ROI_TRACKING_IDENTIFIER, SOURCE_TAG,
};
