use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::UserProfile;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterDto {
    #[validate(length(min = 2, max = 80))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    #[validate(length(max = 80))]
    pub major: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginDto {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Login response: the demo token and the profile view.
///
/// The token is derived from the email alone and authorizes nothing; it
/// exists for display purposes only.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub profile: UserProfile,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisteredResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto(name: &str, email: &str) -> RegisterDto {
        RegisterDto {
            name: name.to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            major: None,
            year: None,
        }
    }

    #[test]
    fn register_dto_accepts_valid_payload() {
        assert!(register_dto("Alice", "alice@example.com").validate().is_ok());
    }

    #[test]
    fn register_dto_rejects_one_char_name() {
        assert!(register_dto("A", "alice@example.com").validate().is_err());
    }

    #[test]
    fn register_dto_rejects_long_name() {
        let name = "x".repeat(81);
        assert!(register_dto(&name, "alice@example.com").validate().is_err());
    }

    #[test]
    fn register_dto_rejects_bad_email() {
        assert!(register_dto("Alice", "not-an-email").validate().is_err());
    }

    #[test]
    fn register_dto_rejects_long_major() {
        let mut dto = register_dto("Alice", "alice@example.com");
        dto.major = Some("m".repeat(81));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn login_dto_rejects_bad_email() {
        let dto = LoginDto {
            email: "nope".to_string(),
            password: "pw".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
