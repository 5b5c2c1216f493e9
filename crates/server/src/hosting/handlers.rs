use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use flippy_auth::MaybeAuth;
use flippy_core::ID;
use flippy_engine::Difficulty;
use flippy_gameroom::Table;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Opens a table. Signed-in players get their completed games saved.
pub async fn start(
    lobby: web::Data<Lobby>,
    auth: MaybeAuth,
    req: Option<web::Json<StartRequest>>,
) -> impl Responder {
    let difficulty = req.map(|r| r.difficulty).unwrap_or_default();
    let id = lobby.into_inner().start(difficulty, auth.user()).await;
    HttpResponse::Ok().json(serde_json::json!({ "table_id": id.to_string() }))
}

pub async fn leave(lobby: web::Data<Lobby>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match lobby.close(ID::from(path.into_inner())).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "left" })),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}

pub async fn enter(
    lobby: web::Data<Lobby>,
    path: web::Path<uuid::Uuid>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    let id: ID<Table> = ID::from(path.into_inner());
    log::info!("player entering table {}", id);
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => match lobby.bridge(id, session, stream).await {
            Ok(()) => response.map_into_left_body(),
            Err(e) => HttpResponse::NotFound()
                .body(e.to_string())
                .map_into_right_body(),
        },
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
