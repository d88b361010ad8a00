//! Renderer-side ellipse annotation state.

use std::collections::BTreeMap;

use super::{Code, ImageId};
use crate::{Pt3, Real};
use serde::{Deserialize, Serialize};

/// Ellipse extremities in world coordinates, in renderer order.
///
/// `top`/`bottom` span the axis aligned with the image column direction,
/// `left`/`right` span the other one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsePoints {
    pub top: Pt3,
    pub bottom: Pt3,
    pub left: Pt3,
    pub right: Pt3,
}

impl EllipsePoints {
    /// Points as `[top, bottom, left, right]`.
    pub fn to_array(&self) -> [Pt3; 4] {
        [self.top, self.bottom, self.left, self.right]
    }
}

impl From<[Pt3; 4]> for EllipsePoints {
    fn from([top, bottom, left, right]: [Pt3; 4]) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBox {
    pub has_moved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseHandles {
    pub points: EllipsePoints,
    /// Handle currently grabbed by the user; decoding resets it to 0.
    pub active_handle_index: usize,
    pub text_box: TextBox,
}

impl EllipseHandles {
    pub fn new(points: EllipsePoints) -> Self {
        Self {
            points,
            active_handle_index: 0,
            text_box: TextBox::default(),
        }
    }
}

/// Derived statistics cached per image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseStats {
    /// Area as measured by the report producer, never recomputed here.
    pub area: Real,
}

/// Tool metadata the renderer keeps alongside the geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMetadata {
    pub tool_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_image_id: Option<ImageId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finding: Option<Code>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finding_sites: Option<Vec<Code>>,
}

impl AnnotationMetadata {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            referenced_image_id: None,
            finding: None,
            finding_sites: None,
        }
    }
}

/// Internal state of one elliptical ROI annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseState {
    pub metadata: AnnotationMetadata,
    pub handles: EllipseHandles,
    pub cached_stats: BTreeMap<ImageId, EllipseStats>,
}

impl EllipseState {
    /// Cached statistics for `image_id`, if any were recorded.
    pub fn stats_for(&self, image_id: &ImageId) -> Option<&EllipseStats> {
        self.cached_stats.get(image_id)
    }
}
