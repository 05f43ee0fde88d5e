use approx::assert_relative_eq;
use plotframe::core::Size;
use plotframe::plot::{Plot, StackPattern, SubPlot};
use plotframe::render::DrawContext;
use plotframe::PlotResult;
use proptest::prelude::*;

#[derive(Debug)]
struct Blank;

impl Plot for Blank {
    fn draw_graph(&mut self, _ctx: &mut DrawContext<'_>) -> PlotResult<()> {
        Ok(())
    }
}

fn subplot(pattern: StackPattern, count: usize) -> SubPlot {
    let mut subplot = SubPlot::new(pattern);
    for _ in 0..count {
        subplot.push(Blank);
    }
    subplot
}

proptest! {
    #[test]
    fn grid_slots_tile_the_area_without_overlap(
        rows in 1usize..6,
        columns in 1usize..6,
        fill in 0.0f64..1.0,
        width in 10.0f64..4_000.0,
        height in 10.0f64..4_000.0
    ) {
        let cells = rows * columns;
        let count = 1 + ((cells - 1) as f64 * fill) as usize;
        let slots = subplot(StackPattern::Grid { rows, columns }, count)
            .plan_slots(Size::new(width, height))
            .expect("count fits the grid");

        prop_assert_eq!(slots.len(), count);
        for (index, slot) in slots.iter().enumerate() {
            prop_assert_eq!(slot.index, index);
            prop_assert_eq!(slot.row, index / columns);
            prop_assert_eq!(slot.column, index % columns);
            assert_relative_eq!(slot.size.width * columns as f64, width, max_relative = 1e-12);
            assert_relative_eq!(slot.size.height * rows as f64, height, max_relative = 1e-12);
            prop_assert!(slot.offset.x + slot.size.width <= width * (1.0 + 1e-12));
            prop_assert!(slot.offset.y + slot.size.height <= height * (1.0 + 1e-12));
        }
        for (a, b) in slots.iter().zip(slots.iter().skip(1)) {
            prop_assert!((a.row, a.column) != (b.row, b.column));
        }
    }

    #[test]
    fn vertical_stack_offsets_are_multiples_of_slot_height(
        count in 1usize..12,
        width in 10.0f64..4_000.0,
        height in 10.0f64..4_000.0
    ) {
        let slots = subplot(StackPattern::Vertical, count)
            .plan_slots(Size::new(width, height))
            .expect("vertical stack");

        for (index, slot) in slots.iter().enumerate() {
            prop_assert_eq!(slot.offset.x, 0.0);
            assert_relative_eq!(slot.offset.y, index as f64 * height / count as f64, max_relative = 1e-12);
            prop_assert_eq!(slot.size.width, width);
        }
    }

    #[test]
    fn grids_smaller_than_the_child_count_are_rejected(
        rows in 1usize..5,
        columns in 1usize..5,
        extra in 1usize..4
    ) {
        let result = subplot(StackPattern::Grid { rows, columns }, rows * columns + extra)
            .plan_slots(Size::new(1000.0, 660.0));
        prop_assert!(result.is_err());
    }
}
