//! Integration tests for the coordinate services exposed by `roi-core`.

use roi_core::{
    ImageId, ImagePlane, ImageToWorld, PlaneCatalog, PlaneDescriptor, PlaneMetadata, Pt2, Pt3,
    Vec3, WorldToImage,
};

#[test]
fn closures_act_as_services() {
    let shift = Vec3::new(1.0, 2.0, 3.0);
    let to_world = move |_: &ImageId, p: Pt2| Pt3::new(p.x, p.y, 0.0) + shift;
    let to_image = move |_: &ImageId, p: &Pt3| {
        let q = *p - shift;
        Pt2::new(q.x, q.y)
    };
    let planes = |id: &ImageId| (id.as_str() == "known").then(|| PlaneDescriptor::new(Vec3::y()));

    let services: (&dyn ImageToWorld, &dyn WorldToImage, &dyn PlaneMetadata) =
        (&to_world, &to_image, &planes);

    let id = ImageId::new("known");
    let w = services.0.image_to_world(&id, Pt2::new(4.0, 5.0));
    assert_eq!(w, Pt3::new(5.0, 7.0, 3.0));
    assert_eq!(services.1.world_to_image(&id, &w), Pt2::new(4.0, 5.0));
    assert!(services.2.plane_descriptor(&id).is_some());
    assert!(services.2.plane_descriptor(&ImageId::new("unknown")).is_none());
}

#[test]
fn image_plane_services_are_mutual_inverses() {
    let s = 0.5_f64.sqrt();
    // Oblique plane tilted 45° about X.
    let plane = ImagePlane::new(
        Pt3::new(-120.0, 35.0, 10.0),
        Vec3::x(),
        Vec3::new(0.0, s, -s),
        [0.8, 0.6],
    )
    .unwrap();
    let id = ImageId::new("oblique");

    for pixel in [Pt2::new(0.0, 0.0), Pt2::new(255.5, 12.0), Pt2::new(-3.0, 511.0)] {
        let world = plane.image_to_world(&id, pixel);
        let back = plane.world_to_image(&id, &world);
        assert!((back - pixel).norm() < 1e-9, "pixel={pixel:?} back={back:?}");
    }
}

#[test]
fn catalog_serde_roundtrip() {
    let mut catalog = PlaneCatalog::new();
    catalog.insert(
        ImageId::new("ax-1"),
        ImagePlane::axial(Pt3::new(0.0, 0.0, -50.0), [0.7, 0.7]).unwrap(),
    );

    let json = serde_json::to_string(&catalog).unwrap();
    let restored: PlaneCatalog = serde_json::from_str(&json).unwrap();

    assert_eq!(
        restored.plane_descriptor(&ImageId::new("ax-1")),
        catalog.plane_descriptor(&ImageId::new("ax-1"))
    );
}
