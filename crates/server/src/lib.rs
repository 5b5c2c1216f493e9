//! Flippy backend server.
//!
//! Serves accounts, score history, and live tables from one actix-web app.
//!
//! ## Submodules
//!
//! - [`game`]: score submission, leaderboard, and statistics
//! - [`hosting`]: WebSocket hosting of live tables

pub mod game;
pub mod hosting;

pub use hosting::Lobby;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use flippy_records::ScoreStore;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Creates every table the server touches.
pub async fn migrate(client: &Client) -> Result<(), flippy_database::PgErr> {
    flippy_database::migrate::<flippy_auth::Member>(client).await?;
    flippy_database::migrate::<flippy_auth::Session>(client).await?;
    flippy_database::migrate::<flippy_records::Score>(client).await?;
    Ok(())
}

/// Mounts the `/game` routes.
pub fn game_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/game")
            .route("/score", web::post().to(game::save))
            .route("/leaderboard", web::get().to(game::leaderboard))
            .route("/mine", web::get().to(game::mine))
            .route("/stats", web::get().to(game::stats)),
    );
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let crypto = flippy_auth::Crypto::from_env()
        .map(web::Data::new)
        .map_err(|e| std::io::Error::other(format!("JWT_SECRET: {}", e)))?;
    let client = flippy_database::db().await;
    migrate(&client).await.map_err(std::io::Error::other)?;
    let store: Arc<dyn ScoreStore> = Arc::new(client.clone());
    let lobby = web::Data::new(Lobby::new(store.clone()));
    let scores = web::Data::from(store);
    let client = web::Data::new(client);
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8888"));
    log::info!("starting server on {}", addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(lobby.clone())
            .app_data(crypto.clone())
            .app_data(scores.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(flippy_auth::register))
                    .route("/login", web::post().to(flippy_auth::login))
                    .route("/logout", web::post().to(flippy_auth::logout))
                    .route("/verify", web::get().to(flippy_auth::verify))
                    .route("/profile", web::put().to(flippy_auth::update_profile))
                    .route("/password", web::put().to(flippy_auth::change_password)),
            )
            .configure(game_routes)
            .service(
                web::scope("/table")
                    .route("/start", web::post().to(hosting::handlers::start))
                    .route("/enter/{table_id}", web::get().to(hosting::handlers::enter))
                    .route("/leave/{table_id}", web::post().to(hosting::handlers::leave)),
            )
    })
    .workers(4)
    .bind(addr)?
    .run()
    .await
}
