//! # homecat-adapter-storage-memory
//!
//! In-memory storage adapter.
//!
//! ## Responsibilities
//! - Implement the [`Registry`](homecat_app::ports::Registry) port for any
//!   [`Record`](homecat_domain::record::Record) type
//! - Resolve ids on creation and enforce their uniqueness per registry
//! - Keep each operation atomic under concurrent access
//!
//! Nothing survives a restart.
//!
//! ## Dependency rule
//! Depends on `homecat-app` (for port traits) and `homecat-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod registry;

pub use registry::{DeviceRegistry, HouseRegistry, InMemoryRegistry, RoomRegistry, UserRegistry};
