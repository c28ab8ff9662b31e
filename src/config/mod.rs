//! Configuration modules.
//!
//! Each submodule loads one concern from environment variables:
//!
//! - [`cors`]: allowed origins for the browser frontend
//! - [`database`]: document store handle initialization
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: MongoDB connection string; the server starts without it
//!   and serves degraded responses
//! - `DATABASE_NAME`: database name (default `campus_scheduler`)
//! - `ALLOWED_ORIGINS`: comma-separated origin list, or `*`
//! - `PORT`: listen port (default 8000)

pub mod cors;
pub mod database;
