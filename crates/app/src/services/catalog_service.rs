//! Catalog service — use-cases for managing one kind of catalog record.

use std::marker::PhantomData;

use homecat_domain::device::Device;
use homecat_domain::error::CatalogError;
use homecat_domain::house::House;
use homecat_domain::record::Record;
use homecat_domain::room::Room;
use homecat_domain::user::User;

use crate::ports::Registry;

/// Application service for CRUD over records of type `R`.
///
/// Field validation happens here, so a malformed record never reaches the
/// registry. Referenced ids (`room_id`, `house_id`, owners, occupants) are
/// **not** resolved against other registries.
pub struct CatalogService<R, S> {
    registry: S,
    _record: PhantomData<fn() -> R>,
}

/// Service over users.
pub type UserService<S> = CatalogService<User, S>;
/// Service over devices.
pub type DeviceService<S> = CatalogService<Device, S>;
/// Service over rooms.
pub type RoomService<S> = CatalogService<Room, S>;
/// Service over houses.
pub type HouseService<S> = CatalogService<House, S>;

impl<R: Record, S: Registry<R>> CatalogService<R, S> {
    /// Create a new service backed by the given registry.
    pub fn new(registry: S) -> Self {
        Self {
            registry,
            _record: PhantomData,
        }
    }

    /// Validate and store a new record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if invariants fail, or
    /// [`CatalogError::Conflict`] if the resolved id is already taken.
    #[tracing::instrument(skip_all, fields(kind = R::KIND))]
    pub async fn create(&self, candidate: R) -> Result<R, CatalogError> {
        candidate.validate()?;
        self.registry.create(candidate).await
    }

    /// Look up a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record with `id` exists.
    #[tracing::instrument(skip_all, fields(kind = R::KIND, id = %id))]
    pub async fn get(&self, id: R::Id) -> Result<R, CatalogError> {
        self.registry.get(id).await
    }

    /// Validate and replace the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if invariants fail, or
    /// [`CatalogError::NotFound`] when no record with `id` exists.
    #[tracing::instrument(skip_all, fields(kind = R::KIND, id = %id))]
    pub async fn update(&self, id: R::Id, replacement: R) -> Result<R, CatalogError> {
        replacement.validate()?;
        self.registry.update(id, replacement).await
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record with `id` exists.
    #[tracing::instrument(skip_all, fields(kind = R::KIND, id = %id))]
    pub async fn delete(&self, id: R::Id) -> Result<(), CatalogError> {
        self.registry.delete(id).await
    }
}
