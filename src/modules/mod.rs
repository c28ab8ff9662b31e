pub mod announcements;
pub mod auth;
pub mod courses;
pub mod health;
pub mod schedule;
pub mod users;

pub use self::auth::model::LoginDto;
pub use self::users::model::User;
