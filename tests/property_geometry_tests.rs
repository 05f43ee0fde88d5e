use approx::assert_relative_eq;
use plotframe::core::{EdgeComponents, PlotDimensions, Rect, RectEdge, Size};
use proptest::prelude::*;

proptest! {
    #[test]
    fn inset_subtracts_edge_sums(
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        width in 0.0f64..2_000.0,
        height in 0.0f64..2_000.0,
        left in 0.0f64..500.0,
        top in 0.0f64..500.0,
        right in 0.0f64..500.0,
        bottom in 0.0f64..500.0
    ) {
        let insets = EdgeComponents::new(left, top, right, bottom);
        let rect = Rect::from_xywh(x, y, width, height).inset(&insets);

        assert_relative_eq!(rect.origin.x, x + left, epsilon = 1e-9);
        assert_relative_eq!(rect.origin.y, y + bottom, epsilon = 1e-9);
        assert_relative_eq!(rect.size.width, width - left - right, epsilon = 1e-9);
        assert_relative_eq!(rect.size.height, height - top - bottom, epsilon = 1e-9);
    }

    #[test]
    fn checked_inset_fails_exactly_when_size_goes_negative(
        width in 0.0f64..500.0,
        height in 0.0f64..500.0,
        amount in 0.0f64..300.0
    ) {
        let rect = Rect::from_xywh(0.0, 0.0, width, height);
        let insets = EdgeComponents::all(amount);
        let underflows = width - 2.0 * amount < 0.0 || height - 2.0 * amount < 0.0;
        prop_assert_eq!(rect.checked_inset(&insets).is_err(), underflows);
    }

    #[test]
    fn outset_undoes_inset(
        width in 0.0f64..500.0,
        height in 0.0f64..500.0,
        amount in -100.0f64..100.0
    ) {
        let rect = Rect::from_xywh(5.0, 7.0, width, height);
        let restored = rect.outset(amount).outset(-amount);
        assert_relative_eq!(restored.origin.x, rect.origin.x, epsilon = 1e-9);
        assert_relative_eq!(restored.size.height, rect.size.height, epsilon = 1e-9);
    }

    #[test]
    fn zero_inset_is_identity(
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        width in -500.0f64..2_000.0,
        height in -500.0f64..2_000.0
    ) {
        let rect = Rect::from_xywh(x, y, width, height);
        prop_assert_eq!(rect.inset(&EdgeComponents::ZERO), rect);
    }

    #[test]
    fn swapping_twice_is_identity(width in -1e6f64..1e6, height in -1e6f64..1e6) {
        let size = Size::new(width, height);
        prop_assert_eq!(size.swapping_components().swapping_components(), size);
    }

    #[test]
    fn edge_components_subscript_round_trips(value in -1e6f64..1e6, index in 0usize..4) {
        let edge = RectEdge::ALL[index];
        let mut components = EdgeComponents::ZERO;
        components[edge] = value;
        prop_assert_eq!(components[edge], value);
        for other in RectEdge::ALL.into_iter().filter(|other| *other != edge) {
            prop_assert_eq!(components[other], 0.0);
        }
        for edge in RectEdge::ALL {
            prop_assert_eq!(EdgeComponents::all(value)[edge], value);
        }
    }

    #[test]
    fn graph_area_tracks_every_frame_mutation(
        width in 1.0f64..10_000.0,
        height in 1.0f64..10_000.0,
        new_width in 1.0f64..10_000.0
    ) {
        let mut dimensions = PlotDimensions::new(width, height);
        prop_assert_eq!(dimensions.graph_width(), 0.8 * width);
        prop_assert_eq!(dimensions.graph_height(), 0.8 * height);

        dimensions.set_frame_width(new_width);
        prop_assert_eq!(dimensions.graph_width(), 0.8 * new_width);
        prop_assert_eq!(dimensions.graph_height(), 0.8 * height);
    }
}
