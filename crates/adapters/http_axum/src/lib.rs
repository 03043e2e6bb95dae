//! # homecat-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON resource API** for the four catalog kinds
//!   (`/users`, `/devices`, `/rooms`, `/houses`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map service outcomes into status codes and JSON bodies
//!
//! ## Dependency rule
//! Depends on `homecat-app` (for port traits and services) and `homecat-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
