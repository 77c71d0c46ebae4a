use axum::Json;

pub(super) async fn get() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
