use plotframe::PlotError;
use plotframe::core::{EdgeComponents, Point, Rect, RectEdge, Size};

#[test]
fn size_swapping_exchanges_components() {
    let size = Size::new(40.0, 12.0);
    assert_eq!(size.swapping_components(), Size::new(12.0, 40.0));
    assert_eq!(size.swapping_components().swapping_components(), size);
}

#[test]
fn rect_edge_orientation() {
    assert!(RectEdge::Top.is_horizontal());
    assert!(RectEdge::Bottom.is_horizontal());
    assert!(RectEdge::Left.is_vertical());
    assert!(RectEdge::Right.is_vertical());
}

#[test]
fn inset_moves_origin_by_left_and_bottom() {
    let rect = Rect::from_xywh(0.0, 0.0, 100.0, 50.0);
    let insets = EdgeComponents::new(10.0, 5.0, 20.0, 15.0);
    assert_eq!(rect.inset(&insets), Rect::from_xywh(10.0, 15.0, 70.0, 30.0));
}

#[test]
fn inset_is_exact_and_checked_inset_reports_underflow() {
    let rect = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
    let insets = EdgeComponents::all(8.0);

    let inset = rect.inset(&insets);
    assert_eq!(inset.size, Size::new(-6.0, -6.0));

    let err = rect.checked_inset(&insets).expect_err("negative size must fail");
    assert!(matches!(
        err,
        PlotError::GeometryUnderflow { width, height } if width == -6.0 && height == -6.0
    ));
}

#[test]
fn outset_grows_every_edge() {
    let rect = Rect::from_xywh(10.0, 10.0, 20.0, 20.0).outset(2.0);
    assert_eq!(rect, Rect::from_xywh(8.0, 8.0, 24.0, 24.0));
}

#[test]
fn rect_queries_handle_negative_sizes() {
    let rect = Rect::from_xywh(10.0, 50.0, 20.0, -30.0);
    assert_eq!(rect.min_y(), 20.0);
    assert_eq!(rect.max_y(), 50.0);
    assert!(rect.contains(Point::new(15.0, 30.0)));
    assert!(!rect.contains(Point::new(15.0, 60.0)));
    assert_eq!(rect.center(), Point::new(20.0, 35.0));
}

#[test]
fn edge_components_index_by_edge() {
    let mut components = EdgeComponents::new(1, 2, 3, 4);
    assert_eq!(components[RectEdge::Left], 1);
    assert_eq!(components[RectEdge::Bottom], 4);

    components[RectEdge::Top] = 20;
    assert_eq!(components.top, 20);

    let pairs: Vec<_> = components.iter().map(|(edge, value)| (edge, *value)).collect();
    assert_eq!(
        pairs,
        vec![
            (RectEdge::Left, 1),
            (RectEdge::Top, 20),
            (RectEdge::Right, 3),
            (RectEdge::Bottom, 4),
        ]
    );
}

#[test]
fn edge_components_empty_and_map() {
    let empty: EdgeComponents<Vec<u8>> = EdgeComponents::empty();
    assert!(empty.left.is_empty() && empty.bottom.is_empty());

    let doubled = EdgeComponents::new(1.0, 2.0, 3.0, 4.0).map(|value| value * 2.0);
    assert_eq!(doubled, EdgeComponents::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(doubled.horizontal_sum(), 8.0);
    assert_eq!(doubled.vertical_sum(), 12.0);
}

#[test]
fn point_arithmetic() {
    let mut point = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
    assert_eq!(point, Point::new(4.0, 6.0));
    point -= Point::new(1.0, 1.0);
    assert_eq!(point, Point::new(3.0, 5.0));
    assert_eq!(-point, Point::new(-3.0, -5.0));
    assert!(!Point::new(f64::NAN, 0.0).is_finite());
}
