//! # homecat-domain
//!
//! Pure domain model for the homecat household catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Users** (people who own or occupy houses)
//! - Define **Houses**, the **Rooms** inside them and the **Devices** placed in rooms
//! - Define the [`Record`](record::Record) contract every stored entity fulfils
//! - Contain all field-level invariant enforcement
//!
//! ## References between entities
//! `Device.room_id`, `Room.house_id` and `House.owners` / `House.occupants`
//! are opaque identifiers. Nothing in the workspace checks that the
//! referenced entity exists.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;
pub mod record;

pub mod device;
pub mod house;
pub mod room;
pub mod user;
