use axum::Json;
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is up")
    )
)]
pub async fn root() -> Json<Value> {
    Json(json!({ "mensagem": "Teste de servidor para o sistema BibliOn" }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "biblion",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
