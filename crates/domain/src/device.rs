//! Device — a physical or virtual thing placed in a room.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{DeviceId, RoomId};
use crate::record::{Record, null_as_default, require_non_empty};

/// A device located in a [`Room`](crate::room::Room).
///
/// `room_id` is an opaque reference: it must be non-empty but is never
/// checked against the room registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub room_id: RoomId,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }
}

impl Record for Device {
    type Id = DeviceId;

    const KIND: &'static str = "Device";

    fn id(&self) -> &DeviceId {
        &self.id
    }

    fn set_id(&mut self, id: DeviceId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("type", &self.kind)?;
        require_non_empty("room_id", self.room_id.as_str())
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    kind: Option<String>,
    room_id: Option<RoomId>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn room_id(mut self, room_id: impl Into<RoomId>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name`, `type` or `room_id` is empty.
    pub fn build(self) -> Result<Device, ValidationError> {
        let device = Device {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            room_id: self.room_id.unwrap_or_default(),
        };
        device.validate()?;
        Ok(device)
    }
}
