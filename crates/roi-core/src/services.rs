//! Coordinate and metadata services injected into the codecs.
//!
//! The codecs never own an image geometry; every conversion between pixel and
//! world space goes through these traits. Closures implement them directly,
//! which keeps unit tests free of any image subsystem:
//!
//! ```
//! use roi_core::{ImageId, ImageToWorld, Pt2, Pt3};
//!
//! let mapper = |_: &ImageId, p: Pt2| Pt3::new(p.x, p.y, 0.0);
//! let w = mapper.image_to_world(&ImageId::new("img"), Pt2::new(1.0, 2.0));
//! assert_eq!(w, Pt3::new(1.0, 2.0, 0.0));
//! ```

use crate::{ImageId, PlaneDescriptor, Pt2, Pt3};

/// Map an image pixel to world coordinates.
///
/// Must be deterministic for a fixed `(image_id, point)` pair.
pub trait ImageToWorld {
    fn image_to_world(&self, image_id: &ImageId, point: Pt2) -> Pt3;
}

/// Map a world point back to image pixel coordinates.
///
/// Must be the inverse of the [`ImageToWorld`] used for the same image.
pub trait WorldToImage {
    fn world_to_image(&self, image_id: &ImageId, point: &Pt3) -> Pt2;
}

/// Per-image plane metadata lookup.
pub trait PlaneMetadata {
    /// Plane descriptor of `image_id`, or `None` if the image is unknown.
    fn plane_descriptor(&self, image_id: &ImageId) -> Option<PlaneDescriptor>;
}

impl<F> ImageToWorld for F
where
    F: Fn(&ImageId, Pt2) -> Pt3,
{
    fn image_to_world(&self, image_id: &ImageId, point: Pt2) -> Pt3 {
        self(image_id, point)
    }
}

impl<F> WorldToImage for F
where
    F: Fn(&ImageId, &Pt3) -> Pt2,
{
    fn world_to_image(&self, image_id: &ImageId, point: &Pt3) -> Pt2 {
        self(image_id, point)
    }
}

impl<F> PlaneMetadata for F
where
    F: Fn(&ImageId) -> Option<PlaneDescriptor>,
{
    fn plane_descriptor(&self, image_id: &ImageId) -> Option<PlaneDescriptor> {
        self(image_id)
    }
}
