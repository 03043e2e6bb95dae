//! # homecat-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port [`Registry`](ports::Registry): create / get /
//!   update / delete over one entity type, keyed by its id
//! - Define the driving use-case [`CatalogService`](services::CatalogService),
//!   which validates input before it reaches a registry
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `homecat-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
