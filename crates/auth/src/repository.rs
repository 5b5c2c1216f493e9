use super::*;
use flippy_core::ID;
use flippy_core::Unique;
use flippy_database::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;

/// Repository trait for authentication database operations.
/// Abstracts SQL from domain modules.
#[allow(async_fn_in_trait)]
pub trait AuthRepository {
    async fn signin(&self, session: &Session) -> Result<(), PgErr>;
    async fn revoke(&self, session: ID<Session>) -> Result<(), PgErr>;
    /// Whether `user` owns the session and it is neither revoked nor expired.
    async fn active(&self, session: ID<Session>, user: ID<Member>) -> Result<bool, PgErr>;
    async fn exists(&self, username: &str, email: &str) -> Result<bool, PgErr>;
    /// Whether a member other than `except` holds the username or email.
    async fn taken(&self, username: &str, email: &str, except: ID<Member>) -> Result<bool, PgErr>;
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), PgErr>;
    /// Finds a member by username or email, with their password hash.
    async fn lookup(&self, identifier: &str) -> Result<Option<(Member, String)>, PgErr>;
    async fn member(&self, id: ID<Member>) -> Result<Option<Member>, PgErr>;
    async fn hashword(&self, id: ID<Member>) -> Result<Option<String>, PgErr>;
    async fn update(&self, member: &Member) -> Result<(), PgErr>;
    async fn rekey(&self, id: ID<Member>, hashword: &str) -> Result<(), PgErr>;
}

fn hydrate(row: &Row) -> Member {
    Member::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
    )
}

impl AuthRepository for Arc<Client> {
    async fn exists(&self, username: &str, email: &str) -> Result<bool, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT 1 FROM ",
                USERS,
                " WHERE username = $1 OR email = $2"
            ),
            &[&username, &email],
        )
        .await
        .map(|opt| opt.is_some())
    }

    async fn taken(&self, username: &str, email: &str, except: ID<Member>) -> Result<bool, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT 1 FROM ",
                USERS,
                " WHERE (username = $1 OR email = $2) AND id <> $3"
            ),
            &[&username, &email, &except.inner()],
        )
        .await
        .map(|opt| opt.is_some())
    }

    async fn create(&self, member: &Member, hashword: &str) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (id, username, email, hashword) VALUES ($1, $2, $3, $4)"
            ),
            &[
                &member.id().inner(),
                &member.username(),
                &member.email(),
                &hashword,
            ],
        )
        .await
        .map(|_| ())
    }

    async fn lookup(&self, identifier: &str) -> Result<Option<(Member, String)>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, username, email, hashword FROM ",
                USERS,
                " WHERE username = $1 OR email = $1 LIMIT 1"
            ),
            &[&identifier],
        )
        .await
        .map(|opt| opt.map(|row| (hydrate(&row), row.get::<_, String>(3))))
    }

    async fn member(&self, id: ID<Member>) -> Result<Option<Member>, PgErr> {
        self.query_opt(
            const_format::concatcp!("SELECT id, username, email FROM ", USERS, " WHERE id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|opt| opt.as_ref().map(hydrate))
    }

    async fn hashword(&self, id: ID<Member>) -> Result<Option<String>, PgErr> {
        self.query_opt(
            const_format::concatcp!("SELECT hashword FROM ", USERS, " WHERE id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|opt| opt.map(|row| row.get::<_, String>(0)))
    }

    async fn update(&self, member: &Member) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                USERS,
                " SET username = $2, email = $3 WHERE id = $1"
            ),
            &[&member.id().inner(), &member.username(), &member.email()],
        )
        .await
        .map(|_| ())
    }

    async fn rekey(&self, id: ID<Member>, hashword: &str) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!("UPDATE ", USERS, " SET hashword = $2 WHERE id = $1"),
            &[&id.inner(), &hashword],
        )
        .await
        .map(|_| ())
    }

    async fn signin(&self, session: &Session) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                SESSIONS,
                " (id, user_id, token_hash, expires_at) VALUES ($1, $2, $3, $4)"
            ),
            &[
                &session.id().inner(),
                &session.user().inner(),
                &session.hash(),
                &session.expires_at(),
            ],
        )
        .await
        .map(|_| ())
    }

    async fn revoke(&self, session: ID<Session>) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!("UPDATE ", SESSIONS, " SET revoked = TRUE WHERE id = $1"),
            &[&session.inner()],
        )
        .await
        .map(|_| ())
    }

    async fn active(&self, session: ID<Session>, user: ID<Member>) -> Result<bool, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT 1 FROM ",
                SESSIONS,
                " WHERE id = $1 AND user_id = $2 AND NOT revoked AND expires_at > now()"
            ),
            &[&session.inner(), &user.inner()],
        )
        .await
        .map(|opt| opt.is_some())
    }
}
