use utoipa::OpenApi;

use crate::modules::announcements::model::Announcement;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginDto, LoginResponse, RegisterDto, RegisteredResponse};
use crate::modules::courses::model::{Course, CourseDto, CreatedCourse};
use crate::modules::health::model::HealthResponse;
use crate::modules::schedule::model::{CreatedScheduleEntry, ScheduleEntry, ScheduleEntryDto};
use crate::modules::users::model::{UpdateProfileDto, UserProfile};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::update_profile,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::list_courses,
        crate::modules::schedule::controller::create_schedule_entry,
        crate::modules::schedule::controller::list_schedule,
        crate::modules::announcements::controller::list_announcements,
        crate::modules::health::controller::health_check,
    ),
    components(
        schemas(
            RegisterDto,
            RegisteredResponse,
            LoginDto,
            LoginResponse,
            UpdateProfileDto,
            UserProfile,
            CourseDto,
            Course,
            CreatedCourse,
            ScheduleEntryDto,
            ScheduleEntry,
            CreatedScheduleEntry,
            Announcement,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Registration and demo-token login"),
        (name = "Profile", description = "Partial profile updates"),
        (name = "Courses", description = "Owner-scoped course records"),
        (name = "Schedule", description = "Owner-scoped calendar entries"),
        (name = "Announcements", description = "Public feed with static fallback"),
        (name = "Health", description = "Store connectivity diagnostics")
    ),
    info(
        title = "Campus Scheduler API",
        description = "Backend for the Campus Scheduler student schedule organizer"
    )
)]
pub struct ApiDoc;
