use super::*;

const ACCESS_TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(15 * 60);

/// HS256 signing keys.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
        }
    }
    /// Keys from `JWT_SECRET`. Missing or blank secrets are refused.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        std::env::var("JWT_SECRET").and_then(|s| Self::from_secret(&s))
    }
    pub fn from_secret(secret: &str) -> Result<Self, std::env::VarError> {
        match secret.trim().is_empty() {
            true => Err(std::env::VarError::NotPresent),
            false => Ok(Self::new(secret.as_bytes())),
        }
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &jsonwebtoken::Validation::default())
            .map(|data| data.claims)
    }
    pub fn hash(token: &str) -> Vec<u8> {
        use sha2::Digest;
        sha2::Sha256::digest(token.as_bytes()).to_vec()
    }
    pub const fn duration() -> std::time::Duration {
        ACCESS_TOKEN_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flippy_core::ID;
    #[test]
    fn tokens_round_trip() {
        let crypto = Crypto::new(b"secret");
        let claims = Claims::new(ID::default(), ID::default(), "bob".into());
        let token = crypto.encode(&claims).unwrap();
        assert_eq!(crypto.decode(&token).unwrap(), claims);
    }
    #[test]
    fn foreign_tokens_are_rejected() {
        let claims = Claims::new(ID::default(), ID::default(), "bob".into());
        let token = Crypto::new(b"theirs").encode(&claims).unwrap();
        assert!(Crypto::new(b"ours").decode(&token).is_err());
    }
    #[test]
    fn blank_secrets_are_refused() {
        assert!(Crypto::from_secret("").is_err());
        assert!(Crypto::from_secret("   ").is_err());
        assert!(Crypto::from_secret("s3cret").is_ok());
    }
    #[test]
    fn empty_key_tokens_are_rejected() {
        let victim = Claims::new(ID::default(), ID::default(), "victim".into());
        let forged = Crypto::new(b"").encode(&victim).unwrap();
        let crypto = Crypto::from_secret("s3cret").unwrap();
        assert!(crypto.decode(&forged).is_err());
    }
    #[test]
    fn hashes_are_sha256() {
        assert_eq!(Crypto::hash("token").len(), 32);
        assert_eq!(Crypto::hash("a"), Crypto::hash("a"));
        assert_ne!(Crypto::hash("a"), Crypto::hash("b"));
    }
}
