//! Record — the common shape shared by every catalog entity.
//!
//! Registries and services are written once against this trait and
//! instantiated per entity type.

use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Deserializer};

use crate::error::ValidationError;

/// Identifier behaviour needed by a registry to resolve and key records.
pub trait RecordId: Clone + Eq + Hash + Display + From<String> + Send + Sync + 'static {
    /// Produce a fresh, globally unique identifier.
    fn generate() -> Self;

    /// Whether the identifier was left blank by the client.
    fn is_empty(&self) -> bool;
}

/// A domain entity that can be stored in a registry.
pub trait Record: Clone + Send + Sync + 'static {
    type Id: RecordId;

    /// Human-readable entity kind, used in error and acknowledgment messages.
    const KIND: &'static str;

    /// Identifier of the record; empty until a registry assigns one.
    fn id(&self) -> &Self::Id;

    /// Overwrite the identifier: a generated one for a blank create, or the
    /// addressed one on update.
    fn set_id(&mut self, id: Self::Id);

    /// Check field-level invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    fn validate(&self) -> Result<(), ValidationError>;
}

macro_rules! impl_record_id {
    ($($name:ty),+ $(,)?) => {
        $(
            impl RecordId for $name {
                fn generate() -> Self {
                    <$name>::generate()
                }

                fn is_empty(&self) -> bool {
                    <$name>::is_empty(self)
                }
            }
        )+
    };
}

impl_record_id!(
    crate::id::UserId,
    crate::id::DeviceId,
    crate::id::RoomId,
    crate::id::HouseId,
);

/// Reject blank strings for the named field.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// Treat an explicit JSON `null` like an omitted field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
