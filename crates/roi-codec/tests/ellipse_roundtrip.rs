//! End-to-end decode/encode tests through real image plane geometry.

use roi_codec::{
    CodecError, CodecRegistry, EllipseCodec, ToolAnnotation, ELLIPTICAL_ROI_TRACKING_IDENTIFIER,
};
use roi_core::{Code, ImageId, ImagePlane, PlaneCatalog, Pt2, Pt3, SrMeasurement, Vec3};

fn axial_unit_plane() -> ImagePlane {
    ImagePlane::axial(Pt3::origin(), [1.0, 1.0]).unwrap()
}

fn measurement(image: &str, graphic: &[f64], area: f64) -> SrMeasurement {
    SrMeasurement::new(
        ELLIPTICAL_ROI_TRACKING_IDENTIFIER,
        ImageId::new(image),
        graphic,
        area,
    )
    .unwrap()
}

fn assert_pt2_close(a: Pt2, b: Pt2) {
    assert!((a - b).norm() < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn vertical_major_axis_roundtrip() {
    let plane = axial_unit_plane();
    let codec = EllipseCodec::default();
    let graphic = [0.0, 10.0, 0.0, -10.0, -5.0, 0.0, 5.0, 0.0];
    let m = measurement("img-1", &graphic, 157.08);

    let state = codec.decode(&m, &plane, &plane).unwrap();

    let pts = state.handles.points;
    assert_eq!(pts.top, Pt3::new(0.0, 10.0, 0.0));
    assert_eq!(pts.bottom, Pt3::new(0.0, -10.0, 0.0));
    assert_eq!(pts.left, Pt3::new(-5.0, 0.0, 0.0));
    assert_eq!(pts.right, Pt3::new(5.0, 0.0, 0.0));

    let args = codec.encode(&state, &plane).unwrap();

    assert_eq!(args.major_axis(), (Pt2::new(0.0, 10.0), Pt2::new(0.0, -10.0)));
    assert_eq!(args.minor_axis(), (Pt2::new(-5.0, 0.0), Pt2::new(5.0, 0.0)));
    let flat: Vec<f64> = args.points.iter().flat_map(|p| [p.x, p.y]).collect();
    assert_eq!(flat, graphic.to_vec());
}

#[test]
fn horizontal_major_axis_roundtrip() {
    let plane = axial_unit_plane();
    let codec = EllipseCodec::default();
    let graphic = [-10.0, 0.0, 10.0, 0.0, 0.0, 4.0, 0.0, -4.0];
    let m = measurement("img-1", &graphic, 125.66);

    let state = codec.decode(&m, &plane, &plane).unwrap();

    // Minor axis is column-aligned, so it lands in top/bottom.
    assert_eq!(state.handles.points.top, Pt3::new(0.0, 4.0, 0.0));
    assert_eq!(state.handles.points.left, Pt3::new(-10.0, 0.0, 0.0));

    let args = codec.encode(&state, &plane).unwrap();
    assert_eq!(args.major_axis(), (Pt2::new(-10.0, 0.0), Pt2::new(10.0, 0.0)));
    assert_eq!(args.minor_axis(), (Pt2::new(0.0, 4.0), Pt2::new(0.0, -4.0)));
}

#[test]
fn sagittal_plane_roundtrip() {
    let plane = ImagePlane::new(
        Pt3::new(12.0, -100.0, 80.0),
        Vec3::y(),
        -Vec3::z(),
        [0.5, 0.75],
    )
    .unwrap();
    let codec = EllipseCodec::default();
    let graphic = [100.0, 50.0, 100.0, 90.0, 90.0, 70.0, 110.0, 70.0];
    let m = measurement("sag-7", &graphic, 235.62);

    let state = codec.decode(&m, &plane, &plane).unwrap();

    // Top/bottom run along the column direction (-Z in world).
    let pts = state.handles.points;
    let dir = (pts.bottom - pts.top).normalize();
    assert!((dir - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-12, "dir={dir:?}");

    let args = codec.encode(&state, &plane).unwrap();
    for (got, want) in args.points.iter().zip(m.graphic_data.points()) {
        assert_pt2_close(*got, *want);
    }
}

#[test]
fn area_passes_through_unchanged() {
    let plane = axial_unit_plane();
    let codec = EllipseCodec::default();
    // Deliberately unrelated to the axis lengths.
    let area = 0.1 + 0.2;
    let m = measurement("img-1", &[0.0, 10.0, 0.0, -10.0, -5.0, 0.0, 5.0, 0.0], area);

    let state = codec.decode(&m, &plane, &plane).unwrap();
    let args = codec.encode(&state, &plane).unwrap();

    assert_eq!(args.area.to_bits(), area.to_bits());
}

#[test]
fn finding_codes_are_carried_through() {
    let plane = axial_unit_plane();
    let codec = EllipseCodec::default();
    let finding = Code::new("52988006", "SCT", "Lesion");
    let site = Code::new("10200004", "SCT", "Liver");
    let m = measurement("img-1", &[0.0, 10.0, 0.0, -10.0, -5.0, 0.0, 5.0, 0.0], 1.0)
        .with_finding(finding.clone())
        .with_finding_sites(vec![site.clone()]);

    let state = codec.decode(&m, &plane, &plane).unwrap();
    let args = codec.encode(&state, &plane).unwrap();

    assert_eq!(args.finding, Some(finding));
    assert_eq!(args.finding_sites, vec![site]);
}

#[test]
fn unknown_image_fails_with_missing_metadata() {
    let plane = axial_unit_plane();
    let mut catalog = PlaneCatalog::new();
    catalog.insert(ImageId::new("other"), plane);
    let codec = EllipseCodec::default();
    let m = measurement("img-1", &[0.0, 10.0, 0.0, -10.0, -5.0, 0.0, 5.0, 0.0], 1.0);

    let err = codec.decode(&m, &plane, &catalog).unwrap_err();

    assert_eq!(
        err,
        CodecError::MissingMetadata {
            image_id: ImageId::new("img-1")
        }
    );
}

#[test]
fn registry_dispatches_json_measurement() {
    let registry = CodecRegistry::with_default_codecs();
    let plane = axial_unit_plane();
    let mut catalog = PlaneCatalog::new();
    catalog.insert(ImageId::new("img-1"), plane);

    let json = r#"{
        "tracking_identifier": "Cornerstone3DTools@^0.1.0:EllipticalROI",
        "referenced_image_id": "img-1",
        "graphic_data": [0.0, 10.0, 0.0, -10.0, -5.0, 0.0, 5.0, 0.0],
        "area": 157.08
    }"#;
    let m: SrMeasurement = serde_json::from_str(json).unwrap();

    let annotation = registry.decode_measurement(&m, &plane, &catalog).unwrap();
    assert_eq!(annotation.tool_type(), "EllipticalROI");

    // Renderer state survives a JSON hop before being written back.
    let stored = serde_json::to_string(&annotation).unwrap();
    let restored: ToolAnnotation = serde_json::from_str(&stored).unwrap();
    assert_eq!(restored, annotation);

    let args = registry.encode_annotation(&restored, &plane).unwrap();
    assert_eq!(args.area, 157.08);
    assert_eq!(args.tracking_identifier_text_value, m.tracking_identifier);
}

#[test]
fn registry_rejects_foreign_tracking_identifier() {
    let registry = CodecRegistry::with_default_codecs();
    let plane = axial_unit_plane();
    let m = SrMeasurement::new(
        "SomeViewer@^3.0.0:EllipticalROI",
        ImageId::new("img-1"),
        &[0.0, 10.0, 0.0, -10.0, -5.0, 0.0, 5.0, 0.0],
        1.0,
    )
    .unwrap();

    let err = registry.decode_measurement(&m, &plane, &plane).unwrap_err();

    assert!(err.to_string().contains("no codec registered"), "{err}");
}

#[test]
fn registry_keeps_typed_codec_errors() {
    let registry = CodecRegistry::with_default_codecs();
    let plane = axial_unit_plane();
    let empty = PlaneCatalog::new();
    let m = measurement("img-1", &[0.0, 10.0, 0.0, -10.0, -5.0, 0.0, 5.0, 0.0], 1.0);

    let err = registry.decode_measurement(&m, &plane, &empty).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CodecError>(),
        Some(CodecError::MissingMetadata { .. })
    ));
}
