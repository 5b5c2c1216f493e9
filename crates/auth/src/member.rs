use flippy_core::ID;
use flippy_core::Unique;

/// Registered user. The password hash lives only in the database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    id: ID<Self>,
    username: String,
    email: String,
}

impl Member {
    pub fn new(id: ID<Self>, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    /// Same member under new contact details.
    pub fn renamed(self, username: String, email: String) -> Self {
        Self {
            username,
            email,
            ..self
        }
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use flippy_database::*;

    impl Schema for Member {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          UUID PRIMARY KEY,
                    username    VARCHAR(32) UNIQUE NOT NULL,
                    email       VARCHAR(255) UNIQUE NOT NULL,
                    hashword    TEXT NOT NULL,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_username ON ",
                USERS,
                " (username);
                 CREATE INDEX IF NOT EXISTS idx_users_email ON ",
                USERS,
                " (email);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn rename_keeps_identity() {
        let member = Member::new(ID::default(), "ann".into(), "ann@a.io".into());
        let id = member.id();
        let member = member.renamed("anne".into(), "anne@a.io".into());
        assert_eq!(member.id(), id);
        assert_eq!(member.username(), "anne");
        assert_eq!(member.email(), "anne@a.io");
    }
}
