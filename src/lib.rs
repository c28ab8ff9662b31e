//! # Campus Scheduler API
//!
//! Backend for a student schedule organizer built with Rust, Axum, and
//! MongoDB: user registration and demo-token login, per-user courses and
//! calendar entries, and a public announcements feed that degrades to
//! static content when the store is unreachable.
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (store, CORS)
//! ├── modules/          # Feature modules
//! │   ├── auth/         # Registration and login
//! │   ├── users/        # Profile updates
//! │   ├── courses/      # Owner-scoped course records
//! │   ├── schedule/     # Owner-scoped calendar entries
//! │   ├── announcements/# Public feed with static fallback
//! │   └── health/       # Store diagnostics
//! ├── store.rs          # Document store adapter
//! └── utils/            # Shared utilities (errors, digest)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Identity model
//!
//! This is a demo-level identity core, preserved deliberately:
//!
//! - Passwords are stored as SHA-256 hex digests, not a KDF.
//! - The login "token" is the first 32 hex characters of the email's
//!   digest. It is not session-bound, does not expire, and authorizes
//!   nothing — no endpoint accepts it.
//! - Course and schedule writes trust the caller-supplied `owner_email`.
//!
//! ## Degraded mode
//!
//! The server boots without a configured store. In that state write and
//! identity endpoints answer 503, the announcements feed serves a fixed
//! two-item fallback, and `/api/health` reports the diagnostics.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=mongodb://localhost:27017
//! DATABASE_NAME=campus_scheduler
//! PORT=8000
//! ```
//!
//! When the server is running, API documentation is available at
//! `/swagger-ui` and `/scalar`.

pub mod config;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
