//! User record and profile models.

use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// The stored user record (`user` collection).
///
/// `password_hash` is the SHA-256 hex digest of the password, never the raw
/// value. Optional fields are persisted as nulls rather than dropped.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Client-facing view of a user. Never carries the password hash.
///
/// `id` is present when the view comes from a stored document (profile
/// update) and absent on login, where only the profile fields are returned.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub major: Option<String>,
    pub year: Option<String>,
    pub avatar: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: None,
            name: user.name,
            email: user.email,
            major: user.major,
            year: user.year,
            avatar: user.avatar,
        }
    }
}

/// Partial profile update. Only provided fields are merged; omitted or null
/// fields never overwrite stored values.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(min = 2, max = 80))]
    pub name: Option<String>,
    #[validate(length(max = 80))]
    pub major: Option<String>,
    pub year: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateProfileDto {
    /// The `$set` document for this update: provided fields only.
    pub fn set_document(&self) -> Document {
        let mut set = doc! {};
        if let Some(name) = &self.name {
            set.insert("name", name);
        }
        if let Some(major) = &self.major {
            set.insert("major", major);
        }
        if let Some(year) = &self.year {
            set.insert("year", year);
        }
        if let Some(avatar) = &self.avatar {
            set.insert("avatar", avatar);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_document_includes_only_provided_fields() {
        let dto = UpdateProfileDto {
            name: None,
            major: Some("CS".to_string()),
            year: None,
            avatar: None,
        };

        let set = dto.set_document();

        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("major").unwrap(), "CS");
        assert!(!set.contains_key("name"));
    }

    #[test]
    fn set_document_empty_when_nothing_provided() {
        let dto = UpdateProfileDto {
            name: None,
            major: None,
            year: None,
            avatar: None,
        };
        assert!(dto.set_document().is_empty());
    }

    #[test]
    fn update_dto_rejects_short_name() {
        let dto = UpdateProfileDto {
            name: Some("x".to_string()),
            major: None,
            year: None,
            avatar: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_dto_rejects_long_major() {
        let dto = UpdateProfileDto {
            name: None,
            major: Some("m".repeat(81)),
            year: None,
            avatar: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_dto_accepts_empty_update() {
        let dto = UpdateProfileDto {
            name: None,
            major: None,
            year: None,
            avatar: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn profile_from_user_drops_password_hash() {
        let user = User {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "deadbeef".to_string(),
            major: Some("Math".to_string()),
            year: None,
            avatar: None,
        };

        let profile = UserProfile::from(user);
        let json = serde_json::to_value(&profile).unwrap();

        assert!(json.get("password_hash").is_none());
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["major"], "Math");
    }
}
