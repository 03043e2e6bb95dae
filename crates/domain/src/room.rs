//! Room — a space inside a house that holds devices.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{HouseId, RoomId};
use crate::record::{Record, null_as_default, require_non_empty};

/// A room belonging to a [`House`](crate::house::House).
///
/// `size` is stored exactly as given; no rounding is applied.
/// `house_id` is an opaque reference that is never resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: f64,
    pub house_id: HouseId,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }
}

impl Record for Room {
    type Id = RoomId;

    const KIND: &'static str = "Room";

    fn id(&self) -> &RoomId {
        &self.id
    }

    fn set_id(&mut self, id: RoomId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("type", &self.kind)?;
        // NaN fails the comparison as well.
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ValidationError::NonPositiveSize);
        }
        require_non_empty("house_id", self.house_id.as_str())
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    name: Option<String>,
    kind: Option<String>,
    size: Option<f64>,
    house_id: Option<HouseId>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<RoomId>) -> Self {
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
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn house_id(mut self, house_id: impl Into<HouseId>) -> Self {
        self.house_id = Some(house_id.into());
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a text field is empty or `size`
    /// is missing or not strictly positive.
    pub fn build(self) -> Result<Room, ValidationError> {
        let room = Room {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            size: self.size.unwrap_or_default(),
            house_id: self.house_id.unwrap_or_default(),
        };
        room.validate()?;
        Ok(room)
    }
}
