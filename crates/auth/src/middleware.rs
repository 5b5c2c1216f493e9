use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use flippy_core::ID;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio_postgres::Client;

/// Extractor for authenticated requests.
/// Validates the bearer JWT and checks the session is still active.
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn user(&self) -> ID<Member> {
        self.0.user()
    }
}

/// Token from `Authorization: Bearer <token>`.
fn bearer(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.trim().to_owned())
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let crypto = req.app_data::<web::Data<Crypto>>().cloned();
        let db = req.app_data::<web::Data<Arc<Client>>>().cloned();
        let token = bearer(req);
        Box::pin(async move {
            let token = token.ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("missing bearer token")
            })?;
            let crypto = crypto.ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("token service not configured")
            })?;
            let claims = crypto
                .decode(&token)
                .map_err(|_| actix_web::error::ErrorUnauthorized("invalid token"))?;
            if claims.expired() {
                return Err(actix_web::error::ErrorUnauthorized("token expired"));
            }
            let db = db.ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("database not configured")
            })?;
            match db.active(claims.session(), claims.user()).await {
                Ok(true) => Ok(Auth(claims)),
                Ok(false) => Err(actix_web::error::ErrorUnauthorized("session revoked")),
                Err(e) => {
                    log::error!("[auth] session lookup failed: {}", e);
                    Err(actix_web::error::ErrorInternalServerError("database error"))
                }
            }
        })
    }
}

/// Optional authentication extractor. Never fails; anonymous requests
/// yield `None`.
pub struct MaybeAuth(pub Option<Claims>);

impl MaybeAuth {
    pub fn claims(&self) -> Option<&Claims> {
        self.0.as_ref()
    }
    pub fn user(&self) -> Option<ID<Member>> {
        self.0.as_ref().map(|c| c.user())
    }
}

impl FromRequest for MaybeAuth {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth = Auth::from_request(req, payload);
        Box::pin(async move {
            match auth.await {
                Ok(Auth(claims)) => Ok(MaybeAuth(Some(claims))),
                Err(_) => Ok(MaybeAuth(None)),
            }
        })
    }
}
