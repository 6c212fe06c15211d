use super::*;
use crate::state::test_helpers;
use canvas::geometry::Point;

#[test]
fn directory_error_to_status_maps_not_found() {
    let err = DirectoryError::NotFound(Uuid::nil());
    assert_eq!(directory_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn directory_error_to_status_maps_empty_title() {
    assert_eq!(directory_error_to_status(DirectoryError::EmptyTitle), StatusCode::BAD_REQUEST);
}

#[test]
fn persistence_error_to_status_maps_canvas_missing() {
    let err = PersistenceError::CanvasMissing(Uuid::nil());
    assert_eq!(persistence_error_to_status(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_canvas_rejects_empty_title_before_touching_the_store() {
    // connect_lazy test state would fail any query; a 400 here proves the
    // title check runs first.
    let state = test_helpers::test_app_state();
    let body = CreateCanvasBody { title: "  ".into() };

    let result = create_canvas(State(state), Json(body)).await;
    assert!(matches!(result, Err(StatusCode::BAD_REQUEST)));
}

#[tokio::test]
async fn create_operation_rejects_single_point_path_before_touching_the_store() {
    let state = test_helpers::test_app_state();
    let body = CreateOperationBody {
        operation_type: OpKind::Draw,
        path_data: PathData { points: vec![Point::new(5.0, 5.0)], timestamp: 1 },
    };

    let result = create_operation(State(state), Path(Uuid::new_v4()), Json(body)).await;
    assert!(matches!(result, Err(StatusCode::UNPROCESSABLE_ENTITY)));
}

#[tokio::test]
async fn create_operation_rejects_empty_path() {
    let state = test_helpers::test_app_state();
    let body = CreateOperationBody {
        operation_type: OpKind::Erase,
        path_data: PathData { points: vec![], timestamp: 1 },
    };

    let result = create_operation(State(state), Path(Uuid::new_v4()), Json(body)).await;
    assert!(matches!(result, Err(StatusCode::UNPROCESSABLE_ENTITY)));
}

#[test]
fn create_operation_body_parses_the_wire_shape() {
    let json = r#"{
        "operation_type": "erase",
        "path_data": {
            "points": [{"x": 1.0, "y": 2.0}, {"x": 3.0, "y": 4.0}],
            "timestamp": 1700000000000
        }
    }"#;

    let body: CreateOperationBody = serde_json::from_str(json).expect("body should parse");
    assert_eq!(body.operation_type, OpKind::Erase);
    assert_eq!(body.path_data.points.len(), 2);
    assert_eq!(body.path_data.points[1], Point::new(3.0, 4.0));
    assert_eq!(body.path_data.timestamp, 1_700_000_000_000);
}

#[test]
fn create_operation_body_rejects_unknown_kind() {
    let json = r#"{
        "operation_type": "smudge",
        "path_data": {"points": [], "timestamp": 0}
    }"#;
    assert!(serde_json::from_str::<CreateOperationBody>(json).is_err());
}
