//! # roster-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON user API** (`/user`, `/user/{id}`, `/users`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and failures into JSON responses with an
//!   appropriate status code; no request can bring the process down
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits and services) and `roster-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
