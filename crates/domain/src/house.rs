//! House — the top-level place, owned and occupied by users.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{HouseId, UserId};
use crate::record::{Record, null_as_default, require_non_empty};

/// A house with its owners and occupants.
///
/// `owners` and `occupants` keep their insertion order. Their members are
/// user ids that are stored as-is: nothing checks that a matching
/// [`User`](crate::user::User) exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: HouseId,
    pub name: String,
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owners: Vec<UserId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub occupants: Vec<UserId>,
}

impl House {
    /// Create a builder for constructing a [`House`].
    #[must_use]
    pub fn builder() -> HouseBuilder {
        HouseBuilder::default()
    }
}

impl Record for House {
    type Id = HouseId;

    const KIND: &'static str = "House";

    fn id(&self) -> &HouseId {
        &self.id
    }

    fn set_id(&mut self, id: HouseId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("address", &self.address)
    }
}

/// Step-by-step builder for [`House`].
#[derive(Debug, Default)]
pub struct HouseBuilder {
    id: Option<HouseId>,
    name: Option<String>,
    address: Option<String>,
    owners: Vec<UserId>,
    occupants: Vec<UserId>,
}

impl HouseBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<HouseId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn owner(mut self, user_id: impl Into<UserId>) -> Self {
        self.owners.push(user_id.into());
        self
    }

    #[must_use]
    pub fn occupant(mut self, user_id: impl Into<UserId>) -> Self {
        self.occupants.push(user_id.into());
        self
    }

    /// Consume the builder, validate, and return a [`House`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` or `address` is empty.
    pub fn build(self) -> Result<House, ValidationError> {
        let house = House {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            owners: self.owners,
            occupants: self.occupants,
        };
        house.validate()?;
        Ok(house)
    }
}
