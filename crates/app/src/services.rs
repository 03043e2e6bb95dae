//! Application services — use-case implementations.
//!
//! The service accepts its registry via a generic parameter (constructor
//! injection), keeping this layer decoupled from concrete adapters.

pub mod catalog_service;

pub use catalog_service::{CatalogService, DeviceService, HouseService, RoomService, UserService};
