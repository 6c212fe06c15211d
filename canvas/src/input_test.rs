use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_draw() {
    assert_eq!(Tool::default(), Tool::Draw);
}

#[test]
fn tool_maps_to_operation_kind() {
    assert_eq!(Tool::Draw.kind(), OpKind::Draw);
    assert_eq!(Tool::Erase.kind(), OpKind::Erase);
}

// =============================================================
// CaptureState
// =============================================================

#[test]
fn capture_state_default_is_idle() {
    assert_eq!(CaptureState::default(), CaptureState::Idle);
    assert!(!CaptureState::Idle.is_capturing());
}

#[test]
fn capturing_reports_active_gesture() {
    let state = CaptureState::Capturing { points: vec![Point::new(1.0, 1.0)] };
    assert!(state.is_capturing());
}
