//! Error types shared across the workspace.
//!
//! Each failure kind is its own typed error; [`CatalogError`] gathers them
//! with `#[from]` conversions so callers can use `?` throughout.

/// Top-level error returned by services and registries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),
}

/// A field value that breaks an entity invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("phone_number must be exactly 10 digits")]
    InvalidPhoneNumber,

    #[error("email is not a valid address")]
    InvalidEmail,

    #[error("size must be greater than zero")]
    NonPositiveSize,
}

/// No record of kind `entity` is stored under `id`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A record of kind `entity` already exists under `id`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}
