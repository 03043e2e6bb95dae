//! Shared application state for axum handlers.

use std::sync::Arc;

use homecat_app::ports::Registry;
use homecat_app::services::{
    CatalogService, DeviceService, HouseService, RoomService, UserService,
};
use homecat_domain::device::Device;
use homecat_domain::house::House;
use homecat_domain::record::Record;
use homecat_domain::room::Room;
use homecat_domain::user::User;

/// Application state shared across all axum handlers.
///
/// Generic over the four registry types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the registries themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, DR, RR, HR> {
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Device CRUD service.
    pub device_service: Arc<DeviceService<DR>>,
    /// Room CRUD service.
    pub room_service: Arc<RoomService<RR>>,
    /// House CRUD service.
    pub house_service: Arc<HouseService<HR>>,
}

impl<UR, DR, RR, HR> Clone for AppState<UR, DR, RR, HR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            device_service: Arc::clone(&self.device_service),
            room_service: Arc::clone(&self.room_service),
            house_service: Arc::clone(&self.house_service),
        }
    }
}

impl<UR, DR, RR, HR> AppState<UR, DR, RR, HR>
where
    UR: Registry<User> + Send + Sync + 'static,
    DR: Registry<Device> + Send + Sync + 'static,
    RR: Registry<Room> + Send + Sync + 'static,
    HR: Registry<House> + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        device_service: DeviceService<DR>,
        room_service: RoomService<RR>,
        house_service: HouseService<HR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            device_service: Arc::new(device_service),
            room_service: Arc::new(room_service),
            house_service: Arc::new(house_service),
        }
    }
}

/// Hands out the service responsible for records of type `R`.
///
/// Lets one set of generic handlers serve every resource.
pub trait ServiceProvider<R: Record> {
    type Registry: Registry<R> + Send + Sync + 'static;

    fn service(&self) -> &CatalogService<R, Self::Registry>;
}

macro_rules! provide_service {
    ($record:ty, $registry:ident, $field:ident) => {
        impl<UR, DR, RR, HR> ServiceProvider<$record> for AppState<UR, DR, RR, HR>
        where
            $registry: Registry<$record> + Send + Sync + 'static,
        {
            type Registry = $registry;

            fn service(&self) -> &CatalogService<$record, $registry> {
                &self.$field
            }
        }
    };
}

provide_service!(User, UR, user_service);
provide_service!(Device, DR, device_service);
provide_service!(Room, RR, room_service);
provide_service!(House, HR, house_service);
