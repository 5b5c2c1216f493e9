use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use flippy_auth::Auth;
use flippy_core::*;
use flippy_engine::Difficulty;
use flippy_records::Score;
use flippy_records::ScoreStore;
use serde::Deserialize;

/// Result reported by a client. Any score the client computed is ignored.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub moves: Moves,
    pub time: Seconds,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl ScoreRequest {
    /// A cleared board needs every card flipped at least once.
    pub fn validate(&self) -> Result<(), String> {
        let fewest = self.difficulty.fewest() as Moves;
        if self.moves < fewest {
            Err(format!(
                "{} needs at least {} moves, got {}",
                self.difficulty, fewest, self.moves
            ))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}

impl LeaderboardQuery {
    /// Requested row count, defaulted and clamped to `1..=LEADERBOARD_MAX`.
    pub fn limit(&self) -> usize {
        self.limit
            .unwrap_or(LEADERBOARD_SIZE)
            .clamp(1, LEADERBOARD_MAX) as usize
    }
}

pub async fn save(
    store: web::Data<dyn ScoreStore>,
    auth: Auth,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().body(e);
    }
    let score = Score::new(auth.user(), req.difficulty, req.moves, req.time);
    match store.save(&score).await {
        Ok(()) => {
            log::info!("[game] {} scored {}", auth.claims().username(), score.score());
            HttpResponse::Created().json(&score)
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn leaderboard(
    store: web::Data<dyn ScoreStore>,
    query: web::Query<LeaderboardQuery>,
) -> impl Responder {
    match store.list_top(query.limit()).await {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn mine(store: web::Data<dyn ScoreStore>, auth: Auth) -> impl Responder {
    match store.list_mine(auth.user()).await {
        Ok(scores) => HttpResponse::Ok().json(scores),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn stats(store: web::Data<dyn ScoreStore>, auth: Auth) -> impl Responder {
    match store.summary(auth.user()).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
