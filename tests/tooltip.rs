use mimic_insight::tooltip::{Point, PointerSample, TooltipState};

#[derive(Debug, Clone, PartialEq)]
struct Hovered {
    name: &'static str,
    value: f64,
}

fn sample(over_drawable: bool, inside_container: bool) -> PointerSample {
    PointerSample {
        at: Point { x: 1.0, y: 2.0 },
        over_drawable,
        inside_container,
    }
}

#[test]
fn show_then_hide() {
    let mut tooltip = TooltipState::new();
    assert!(!tooltip.is_visible());
    assert_eq!(tooltip.overlay_position(), None);

    tooltip.show(Hovered { name: "x", value: 10.0 }, 100.0, 50.0);
    assert_eq!(tooltip.active().map(|h| h.name), Some("x"));
    assert_eq!(tooltip.overlay_position(), Some(Point { x: 110.0, y: 40.0 }));

    tooltip.hide();
    assert!(tooltip.active().is_none());
    assert_eq!(tooltip.overlay_position(), None);
}

#[test]
fn last_show_wins() {
    let mut tooltip = TooltipState::new();
    tooltip.show(Hovered { name: "a", value: 1.0 }, 0.0, 0.0);
    tooltip.show(Hovered { name: "b", value: 2.0 }, 5.0, 6.0);
    assert_eq!(tooltip.active(), Some(&Hovered { name: "b", value: 2.0 }));
    assert_eq!(tooltip.anchor(), Point { x: 5.0, y: 6.0 });
}

#[test]
fn moving_keeps_the_datum() {
    let mut tooltip = TooltipState::new();
    tooltip.show(Hovered { name: "a", value: 1.0 }, 0.0, 0.0);
    tooltip.update_position(30.0, 40.0);
    assert_eq!(tooltip.active().map(|h| h.name), Some("a"));
    assert_eq!(tooltip.anchor(), Point { x: 30.0, y: 40.0 });
}

#[test]
fn pointer_samples_are_ignored_without_auto_hide() {
    let mut tooltip = TooltipState::new();
    tooltip.show("cell", 0.0, 0.0);
    tooltip.observe_pointer(sample(false, true));
    assert!(tooltip.is_visible());
}

#[test]
fn auto_hide_clears_off_shape_inside_container() {
    let mut tooltip = TooltipState::with_auto_hide();
    assert!(tooltip.auto_hide());
    tooltip.show("cell", 0.0, 0.0);

    tooltip.observe_pointer(sample(true, true));
    assert!(tooltip.is_visible());

    tooltip.observe_pointer(sample(false, true));
    assert!(!tooltip.is_visible());
}

#[test]
fn auto_hide_clears_when_pointer_leaves_the_container() {
    let mut tooltip = TooltipState::with_auto_hide();
    tooltip.show("arc", 0.0, 0.0);
    tooltip.observe_pointer(sample(false, false));
    assert!(!tooltip.is_visible());

    // over a shape that belongs to another chart
    tooltip.show("arc", 0.0, 0.0);
    tooltip.observe_pointer(sample(true, false));
    assert!(!tooltip.is_visible());
    assert_eq!(tooltip.overlay_position(), None);
}
