//! Annotation records exchanged between the report layer and the renderer.

mod annotation;
mod code;
mod graphic;
mod measurement;
mod tid300;

pub use annotation::*;
pub use code::*;
pub use graphic::*;
pub use measurement::*;
pub use tid300::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single image (typically an image URI or SOP instance id).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
