// Open-circle gap splitting and boundary serialization shapes

use numberline_wasm::api::types::{LayoutInfo, RenderState};
use numberline_wasm::geometry::visible_segments;
use numberline_wasm::models::core::{Action, Point};
use numberline_wasm::{DrawnState, GraphConfig, GraphController, NumberLineLayout};

fn make_layout() -> NumberLineLayout {
    NumberLineLayout::new(GraphConfig {
        min: -10,
        max: 10,
        width: 700.0,
        height: 120.0,
    })
    .unwrap()
}

fn segment_between(layout: &NumberLineLayout, a: i32, b: i32) -> Action {
    let y = layout.baseline_y();
    Action::Segment {
        from: Point::new(layout.value_to_pixel(a as f64), y),
        to: Point::new(layout.value_to_pixel(b as f64), y),
    }
}

#[test]
fn test_segment_split_by_open_circle_at_zero() {
    let layout = make_layout();
    let state = DrawnState::from_actions(&[
        segment_between(&layout, -5, 5),
        Action::EmptyCircle { tick: 0 },
    ]);

    let segments = visible_segments(&state, &layout);
    assert_eq!(segments.len(), 2);

    let center = layout.value_to_pixel(0.0);
    let radius = layout.circle_radius();
    let left = &segments[0];
    let right = &segments[1];
    assert!((left.x1 - layout.value_to_pixel(-5.0)).abs() < 1e-9);
    assert!((left.x2 - (center - radius)).abs() < 1e-9);
    assert!((right.x1 - (center + radius)).abs() < 1e-9);
    assert!((right.x2 - layout.value_to_pixel(5.0)).abs() < 1e-9);
}

#[test]
fn test_undoing_circle_heals_the_segment() {
    let mut controller = GraphController::new(GraphConfig {
        min: -10,
        max: 10,
        width: 700.0,
        height: 120.0,
    })
    .unwrap();
    let layout = *controller.layout();

    // Segment across the middle
    controller.on_stroke_start(layout.value_to_pixel(-5.0), 60.0);
    controller.on_stroke_move(layout.value_to_pixel(5.0), 60.0);
    controller.on_stroke_end();

    // Open circle at 0 splits it
    let cx = layout.value_to_pixel(0.0);
    controller.on_stroke_start(cx + 7.0, 60.0);
    for i in 1..8 {
        let angle = i as f64 * std::f64::consts::TAU / 8.0;
        controller.on_stroke_move(cx + 7.0 * angle.cos(), 60.0 + 7.0 * angle.sin());
    }
    let split = controller.on_stroke_end();
    assert_eq!(split.segments.len(), 2);
    assert_eq!(split.empty_ticks, vec![0]);

    let healed = controller.undo();
    assert_eq!(healed.segments.len(), 1);
    assert!(healed.empty_ticks.is_empty());
}

#[test]
fn test_render_state_json_shape() {
    let layout = make_layout();
    let state = DrawnState::from_actions(&[
        segment_between(&layout, -11, 2),
        Action::EmptyCircle { tick: -3 },
        Action::FilledCircle { tick: 2 },
    ]);
    let render = RenderState {
        segments: visible_segments(&state, &layout),
        empty_ticks: state.empty_ticks.iter().copied().collect(),
        filled_ticks: state.filled_ticks.iter().copied().collect(),
        in_progress: None,
        can_undo: true,
        can_redo: false,
        can_reset: true,
    };

    let json: serde_json::Value = serde_json::to_value(&render).unwrap();
    assert!(json["segments"].is_array());
    assert_eq!(json["segments"][0]["arrow_left"], true);
    assert_eq!(json["empty_ticks"], serde_json::json!([-3]));
    assert_eq!(json["filled_ticks"], serde_json::json!([2]));
    assert_eq!(json["can_undo"], true);
    assert!(json["in_progress"].is_null());
}

#[test]
fn test_layout_info_json_shape() {
    let layout = make_layout();
    let info = LayoutInfo::from_layout(&layout);

    let json: serde_json::Value = serde_json::to_value(&info).unwrap();
    assert_eq!(json["ticks"].as_array().unwrap().len(), 21);
    assert_eq!(json["tick_spacing"], serde_json::json!(30.0));
    assert_eq!(json["circle_radius"], serde_json::json!(8.0));
    assert_eq!(json["width"], serde_json::json!(700.0));
}

#[test]
fn test_action_json_round_trip() {
    let layout = make_layout();
    let actions = [
        segment_between(&layout, 0, 11),
        Action::EmptyCircle { tick: -2 },
        Action::FilledCircle { tick: 9 },
    ];
    for action in &actions {
        let json = serde_json::to_string(action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(*action, back);
    }
}
