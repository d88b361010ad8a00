//! Core geometry and data model for elliptical ROI report codecs.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec3`, `Pt2`, `Pt3`, ...),
//! - the report-side and renderer-side records of an elliptical annotation
//!   ([`GraphicData`], [`EllipseState`], [`Tid300Arguments`], [`SrMeasurement`]),
//! - the coordinate-service traits a codec is driven through
//!   ([`ImageToWorld`], [`WorldToImage`], [`PlaneMetadata`]),
//! - a DICOM-style image plane ([`ImagePlane`]) implementing those services.
//!
//! Image plane mapping:
//! `world = position + x * column_spacing * row_direction + y * row_spacing * column_direction`

/// Linear algebra type aliases and helpers.
pub mod math;
/// Image plane geometry and per-image plane catalog.
pub mod plane;
/// Injected coordinate and metadata services.
pub mod services;
/// Report-side and renderer-side annotation records.
pub mod types;

pub use math::*;
pub use plane::*;
pub use services::*;
pub use types::*;
