use plotframe::core::Size;
use plotframe::render::{BackendKind, Renderer as _, create_renderer};
use plotframe::PlotError;

#[test]
fn built_in_backends_report_their_names() {
    for (kind, name) in [
        (BackendKind::Null, "null"),
        (BackendKind::Recording, "recording"),
        (BackendKind::Svg, "svg"),
    ] {
        let renderer = create_renderer(kind, 640.0, 480.0).expect("backend");
        assert_eq!(renderer.backend_name(), name);
        assert_eq!(kind.name(), name);
        assert_eq!(renderer.surface_size(), Size::new(640.0, 480.0));
        assert!(kind.is_available());
    }
}

#[test]
fn invalid_surface_size_is_rejected() {
    for (width, height) in [(0.0, 480.0), (640.0, -1.0), (f64::NAN, 480.0)] {
        let err = create_renderer(BackendKind::Null, width, height).err().expect("invalid size");
        assert!(matches!(err, PlotError::InvalidFrame { .. }));
    }
}

#[cfg(not(feature = "cairo-backend"))]
#[test]
fn cairo_is_unsupported_without_the_feature() {
    assert!(!BackendKind::Cairo.is_available());
    let err = create_renderer(BackendKind::Cairo, 640.0, 480.0).err().expect("not compiled in");
    assert!(matches!(err, PlotError::BackendUnsupported("cairo")));
}

#[cfg(feature = "cairo-backend")]
#[test]
fn cairo_is_available_with_the_feature() {
    let renderer = create_renderer(BackendKind::Cairo, 640.0, 480.0).expect("cairo");
    assert_eq!(renderer.backend_name(), "cairo");
}

#[test]
fn backend_kind_round_trips_through_json() {
    let json = serde_json::to_string(&BackendKind::Svg).expect("serialize");
    assert_eq!(json, "\"Svg\"");
    let kind: BackendKind = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(kind, BackendKind::Svg);
}
