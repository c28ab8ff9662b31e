use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload for creating a course. `owner_email` is caller-supplied and
/// trusted as-is; referential integrity against the user collection is
/// advisory only.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CourseDto {
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub instructor: Option<String>,
    #[validate(range(min = 0, max = 10))]
    pub credits: Option<i32>,
    #[validate(email)]
    pub owner_email: String,
}

/// A stored course, id stringified.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    pub instructor: Option<String>,
    pub credits: Option<i32>,
    pub owner_email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedCourse {
    pub id: String,
}
