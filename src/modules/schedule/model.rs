use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload for a calendar entry. `day` is a free string (Mon..Sun by
/// convention, not enum-enforced) and the times are free `HH:MM` strings;
/// no format or overlap validation is applied.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ScheduleEntryDto {
    #[validate(email)]
    pub owner_email: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub color: Option<String>,
}

/// A stored schedule entry, id stringified.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduleEntry {
    pub id: String,
    pub owner_email: String,
    pub title: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedScheduleEntry {
    pub id: String,
}
