use super::*;
use flippy_core::*;
use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// `identifier` is a username or an email.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ProfileRequest {
    pub username: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct PasswordRequest {
    pub current: String,
    pub replacement: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&Member> for UserInfo {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().to_string(),
            username: member.username().to_string(),
            email: member.email().to_string(),
        }
    }
}

pub fn check_username(username: &str) -> Result<(), &'static str> {
    let n = username.chars().count();
    if n < USERNAME_MIN || n > USERNAME_MAX {
        Err("username must be 3-32 characters")
    } else if username.chars().any(char::is_whitespace) {
        Err("username must not contain whitespace")
    } else {
        Ok(())
    }
}

pub fn check_email(email: &str) -> Result<(), &'static str> {
    match email.split_once('@') {
        Some((user, host)) if !user.is_empty() && !host.is_empty() => Ok(()),
        _ => Err("email must look like name@host"),
    }
}

pub fn check_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < PASSWORD_MIN {
        Err("password must be at least 8 characters")
    } else {
        Ok(())
    }
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        check_username(&self.username)?;
        check_email(&self.email)?;
        check_password(&self.password)
    }
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.identifier.trim().is_empty() || self.password.is_empty() {
            Err("email/username and password are required")
        } else {
            Ok(())
        }
    }
}

impl ProfileRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        check_username(&self.username)?;
        check_email(&self.email)
    }
}

impl PasswordRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.current.is_empty() {
            return Err("current password is required");
        }
        check_password(&self.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn register(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
    #[test]
    fn accepts_reasonable_registration() {
        assert!(register("alice", "alice@flip.py", "hunter22").validate().is_ok());
    }
    #[test]
    fn username_bounds() {
        assert!(check_username("ab").is_err());
        assert!(check_username("abc").is_ok());
        assert!(check_username(&"x".repeat(32)).is_ok());
        assert!(check_username(&"x".repeat(33)).is_err());
        assert!(check_username("a b c").is_err());
    }
    #[test]
    fn email_needs_both_sides() {
        assert!(check_email("a@b").is_ok());
        assert!(check_email("ab").is_err());
        assert!(check_email("@b").is_err());
        assert!(check_email("a@").is_err());
    }
    #[test]
    fn short_passwords_fail() {
        assert!(register("alice", "alice@flip.py", "short").validate().is_err());
        let change = PasswordRequest {
            current: "hunter22".into(),
            replacement: "1234567".into(),
        };
        assert!(change.validate().is_err());
    }
    #[test]
    fn login_needs_both_fields() {
        let login = LoginRequest {
            identifier: " ".into(),
            password: "x".into(),
        };
        assert!(login.validate().is_err());
    }
    #[test]
    fn user_info_from_member() {
        let member = Member::new(ID::default(), "zed".into(), "zed@z.z".into());
        let info = UserInfo::from(&member);
        assert_eq!(info.username, "zed");
        assert_eq!(info.email, "zed@z.z");
    }
}
