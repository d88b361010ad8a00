//! Tracking identifiers.
//!
//! Every measurement written by this codec family is tagged with
//! `"<source tag>:<tool type>"`, where the source tag is
//! `"<name>@^<version>"`. Readers use the tag to pick the codec that can
//! decode a measurement.

/// Name part of the source tag.
pub const SOURCE_TAG_NAME: &str = "Cornerstone3DTools";
/// Version part of the source tag.
pub const SOURCE_TAG_VERSION: &str = "0.1.0";
/// Source tag, `"<name>@^<version>"`.
pub const SOURCE_TAG: &str = "Cornerstone3DTools@^0.1.0";
/// Separator between the source tag and the tool type.
pub const SEPARATOR: char = ':';

/// Tool type of the elliptical ROI.
pub const ELLIPTICAL_ROI: &str = "EllipticalROI";
/// Full tracking identifier of the elliptical ROI.
pub const ELLIPTICAL_ROI_TRACKING_IDENTIFIER: &str = "Cornerstone3DTools@^0.1.0:EllipticalROI";

/// Tracking identifier for `tool_type`.
pub fn tracking_identifier(tool_type: &str) -> String {
    format!("{SOURCE_TAG}{SEPARATOR}{tool_type}")
}

/// Split into `(source_tag, tool_type)`.
///
/// Returns `None` unless the identifier contains exactly one separator.
pub fn split_tracking_identifier(tracking_identifier: &str) -> Option<(&str, &str)> {
    let (prefix, suffix) = tracking_identifier.split_once(SEPARATOR)?;
    if suffix.contains(SEPARATOR) {
        return None;
    }
    Some((prefix, suffix))
}

/// True only for `"<SOURCE_TAG>:<tool_type>"`.
pub fn is_valid_tracking_identifier(tracking_identifier: &str, tool_type: &str) -> bool {
    match split_tracking_identifier(tracking_identifier) {
        Some((prefix, suffix)) => prefix == SOURCE_TAG && suffix == tool_type,
        None => false,
    }
}
