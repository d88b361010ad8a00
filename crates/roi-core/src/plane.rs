//! Image plane geometry.
//!
//! An [`ImagePlane`] describes where a 2D image sits in world space: the
//! position of the first pixel, the direction cosines of its rows and columns
//! and the pixel spacing. It provides the affine pixel/world mapping used by
//! the codecs through the [`ImageToWorld`], [`WorldToImage`] and
//! [`PlaneMetadata`] services.

use std::collections::HashMap;

use crate::{ImageId, ImageToWorld, PlaneMetadata, Pt2, Pt3, Real, Vec3, WorldToImage};
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

const UNIT_TOL: Real = 1e-6;

/// Geometric plane metadata consumed by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneDescriptor {
    /// World direction of increasing row index (down the image columns).
    /// Expected to be unit length.
    pub column_direction: Vec3,
}

impl PlaneDescriptor {
    pub fn new(column_direction: Vec3) -> Self {
        Self { column_direction }
    }
}

/// Placement of one image in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePlane {
    /// World position of the center of pixel `(0, 0)`.
    pub image_position: Pt3,
    /// World direction of increasing column index (along a row).
    pub row_direction: Vec3,
    /// World direction of increasing row index (along a column).
    pub column_direction: Vec3,
    /// `[row_spacing, column_spacing]`: distance between rows, then between columns.
    pub pixel_spacing: [Real; 2],
}

impl ImagePlane {
    /// Construct a plane from raw orientation data.
    ///
    /// # Errors
    ///
    /// Returns an error if a direction is not unit length, the directions are
    /// not orthogonal, or a spacing is not strictly positive.
    pub fn new(
        image_position: Pt3,
        row_direction: Vec3,
        column_direction: Vec3,
        pixel_spacing: [Real; 2],
    ) -> Result<Self> {
        ensure!(
            (row_direction.norm() - 1.0).abs() < UNIT_TOL,
            "row direction must be unit length, got norm {}",
            row_direction.norm()
        );
        ensure!(
            (column_direction.norm() - 1.0).abs() < UNIT_TOL,
            "column direction must be unit length, got norm {}",
            column_direction.norm()
        );
        ensure!(
            row_direction.dot(&column_direction).abs() < UNIT_TOL,
            "row and column directions must be orthogonal"
        );
        ensure!(
            pixel_spacing.iter().all(|s| *s > 0.0),
            "pixel spacing must be positive, got {:?}",
            pixel_spacing
        );
        Ok(Self {
            image_position,
            row_direction,
            column_direction,
            pixel_spacing,
        })
    }

    /// Axial plane at `image_position`: rows along +X, columns along +Y.
    pub fn axial(image_position: Pt3, pixel_spacing: [Real; 2]) -> Result<Self> {
        Self::new(image_position, Vec3::x(), Vec3::y(), pixel_spacing)
    }

    /// Plane normal (`row × column`).
    pub fn normal(&self) -> Vec3 {
        self.row_direction.cross(&self.column_direction)
    }

    /// `world = position + x * column_spacing * row_dir + y * row_spacing * column_dir`.
    pub fn pixel_to_world(&self, pixel: Pt2) -> Pt3 {
        let [row_spacing, column_spacing] = self.pixel_spacing;
        self.image_position
            + self.row_direction * (pixel.x * column_spacing)
            + self.column_direction * (pixel.y * row_spacing)
    }

    /// Inverse of [`Self::pixel_to_world`].
    ///
    /// Points off the plane are projected onto it along the normal.
    pub fn world_to_pixel(&self, world: &Pt3) -> Pt2 {
        let [row_spacing, column_spacing] = self.pixel_spacing;
        let d = *world - self.image_position;
        Pt2::new(
            d.dot(&self.row_direction) / column_spacing,
            d.dot(&self.column_direction) / row_spacing,
        )
    }

    pub fn descriptor(&self) -> PlaneDescriptor {
        PlaneDescriptor::new(self.column_direction)
    }
}

// A single plane answers for whatever image id it is asked about.
impl ImageToWorld for ImagePlane {
    fn image_to_world(&self, _image_id: &ImageId, point: Pt2) -> Pt3 {
        self.pixel_to_world(point)
    }
}

impl WorldToImage for ImagePlane {
    fn world_to_image(&self, _image_id: &ImageId, point: &Pt3) -> Pt2 {
        self.world_to_pixel(point)
    }
}

impl PlaneMetadata for ImagePlane {
    fn plane_descriptor(&self, _image_id: &ImageId) -> Option<PlaneDescriptor> {
        Some(self.descriptor())
    }
}

/// Image planes keyed by image id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaneCatalog {
    planes: HashMap<ImageId, ImagePlane>,
}

impl PlaneCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the plane of `image_id`.
    pub fn insert(&mut self, image_id: ImageId, plane: ImagePlane) -> Option<ImagePlane> {
        self.planes.insert(image_id, plane)
    }

    pub fn plane(&self, image_id: &ImageId) -> Option<&ImagePlane> {
        self.planes.get(image_id)
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

impl PlaneMetadata for PlaneCatalog {
    fn plane_descriptor(&self, image_id: &ImageId) -> Option<PlaneDescriptor> {
        self.plane(image_id).map(ImagePlane::descriptor)
    }
}
