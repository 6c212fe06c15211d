use super::*;

#[test]
fn share_url_appends_query_parameter() {
    let id = Uuid::new_v4();
    let url = share_url("https://ink.example/", id);
    assert_eq!(url, format!("https://ink.example/?canvas={id}"));
}

#[test]
fn share_url_extends_an_existing_query() {
    let id = Uuid::new_v4();
    let url = share_url("https://ink.example/?theme=dark", id);
    assert_eq!(url, format!("https://ink.example/?theme=dark&canvas={id}"));
}

#[test]
fn round_trip_through_query_parsing() {
    let id = Uuid::new_v4();
    let url = share_url("https://ink.example/", id);
    let query = url.split_once('?').map(|(_, q)| q).unwrap();
    assert_eq!(shared_canvas_param(query), Some(id));
}

#[test]
fn parses_with_leading_question_mark() {
    let id = Uuid::new_v4();
    assert_eq!(shared_canvas_param(&format!("?canvas={id}")), Some(id));
}

#[test]
fn ignores_other_parameters() {
    assert_eq!(shared_canvas_param("theme=dark&lang=en"), None);
    assert_eq!(shared_canvas_param(""), None);
}

#[test]
fn rejects_malformed_ids() {
    assert_eq!(shared_canvas_param("canvas=not-a-uuid"), None);
}
