use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use flippy_core::ID;
use flippy_core::Unique;
use std::sync::Arc;
use tokio_postgres::Client;

/// Opens a session for `member` and signs its token.
async fn grant(db: &Arc<Client>, tokens: &Crypto, member: &Member) -> Result<String, String> {
    let id = ID::<Session>::default();
    let session = Session::new(id, member.id(), Crypto::hash(&id.to_string()));
    db.signin(&session).await.map_err(|e| e.to_string())?;
    let claims = Claims::new(member.id(), session.id(), member.username().to_string());
    tokens.encode(&claims).map_err(|e| e.to_string())
}

pub async fn register(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().body(e);
    }
    match db.exists(&req.username, &req.email).await {
        Ok(false) => {}
        Ok(true) => return HttpResponse::Conflict().body("username or email already exists"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    }
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    let member = Member::new(ID::default(), req.username.clone(), req.email.clone());
    if let Err(e) = db.create(&member, &hashword).await {
        return HttpResponse::InternalServerError().body(e.to_string());
    }
    log::info!("[auth] registered {}", member.username());
    match grant(&db, &tokens, &member).await {
        Ok(token) => HttpResponse::Created().json(AuthResponse {
            token,
            user: UserInfo::from(&member),
        }),
        Err(e) => HttpResponse::InternalServerError().body(e),
    }
}

pub async fn login(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().body(e);
    }
    let (member, hashword) = match db.lookup(req.identifier.trim()).await {
        Ok(Some(row)) => row,
        Ok(None) => return HttpResponse::Unauthorized().body("invalid credentials"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    if !password::verify(&req.password, &hashword) {
        return HttpResponse::Unauthorized().body("invalid credentials");
    }
    match grant(&db, &tokens, &member).await {
        Ok(token) => HttpResponse::Ok().json(AuthResponse {
            token,
            user: UserInfo::from(&member),
        }),
        Err(e) => HttpResponse::InternalServerError().body(e),
    }
}

pub async fn logout(db: web::Data<Arc<Client>>, auth: Auth) -> impl Responder {
    match db.revoke(auth.claims().session()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({"status": "logged_out"})),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Current member, read fresh from the database.
pub async fn verify(db: web::Data<Arc<Client>>, auth: Auth) -> impl Responder {
    match db.member(auth.user()).await {
        Ok(Some(member)) => HttpResponse::Ok().json(UserInfo::from(&member)),
        Ok(None) => HttpResponse::Unauthorized().body("member not found"),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn update_profile(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    req: web::Json<ProfileRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().body(e);
    }
    match db.taken(&req.username, &req.email, auth.user()).await {
        Ok(false) => {}
        Ok(true) => return HttpResponse::Conflict().body("username or email already in use"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    }
    let member = match db.member(auth.user()).await {
        Ok(Some(member)) => member.renamed(req.username.clone(), req.email.clone()),
        Ok(None) => return HttpResponse::Unauthorized().body("member not found"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    match db.update(&member).await {
        Ok(()) => HttpResponse::Ok().json(UserInfo::from(&member)),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn change_password(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    req: web::Json<PasswordRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().body(e);
    }
    let current = match db.hashword(auth.user()).await {
        Ok(Some(hashword)) => hashword,
        Ok(None) => return HttpResponse::Unauthorized().body("member not found"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    if !password::verify(&req.current, &current) {
        return HttpResponse::BadRequest().body("current password is incorrect");
    }
    let hashword = match password::hash(&req.replacement) {
        Ok(h) => h,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    match db.rekey(auth.user(), &hashword).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({"status": "password_changed"})),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
