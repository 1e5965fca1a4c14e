//! Engines API handlers.
//!
//! The engines resource serves synthesized sample records: the backing store
//! is wired but never read or written, so list/get output is independent of
//! any prior create or delete call.

use actix_web::{HttpResponse, delete, get, post, web};
use pagination::Page;

use crate::domain::Engine;

/// List the sample engine catalogue.
#[utoipa::path(
    get,
    path = "/api/engines",
    responses((status = 200, description = "Three sample engines in one page")),
    tags = ["engines"],
    operation_id = "listEngines"
)]
#[get("/engines")]
pub async fn list_engines() -> web::Json<Page<Engine>> {
    let items = (1..=3).map(|n| Engine::sample(n.to_string(), n)).collect();
    web::Json(Page::single(items))
}

/// Echo the submitted engine record.
#[utoipa::path(
    post,
    path = "/api/engines",
    request_body = Engine,
    responses((status = 200, description = "The submitted record, unchanged", body = Engine)),
    tags = ["engines"],
    operation_id = "createEngine"
)]
#[post("/engines")]
pub async fn create_engine(payload: web::Json<Engine>) -> web::Json<Engine> {
    // Returned as-is; nothing is written to the store.
    payload
}

/// Fetch the sample record for the requested id.
#[utoipa::path(
    get,
    path = "/api/engines/{engineId}",
    params(("engineId" = String, Path, description = "Engine identifier")),
    responses((status = 200, description = "Sample engine with the requested id", body = Engine)),
    tags = ["engines"],
    operation_id = "getEngine"
)]
#[get("/engines/{engine_id}")]
pub async fn get_engine(path: web::Path<String>) -> web::Json<Engine> {
    web::Json(Engine::sample(path.into_inner(), 1))
}

/// Delete an engine: always succeeds, nothing is stored to remove.
#[utoipa::path(
    delete,
    path = "/api/engines/{engineId}",
    params(("engineId" = String, Path, description = "Engine identifier")),
    responses((status = 204, description = "No content")),
    tags = ["engines"],
    operation_id = "deleteEngine"
)]
#[delete("/engines/{engine_id}")]
pub async fn delete_engine(_path: web::Path<String>) -> HttpResponse {
    HttpResponse::NoContent().finish()
}
