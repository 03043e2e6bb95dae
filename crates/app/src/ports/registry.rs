//! Registry port — keyed storage for one entity type.

use std::future::Future;

use homecat_domain::error::CatalogError;
use homecat_domain::record::Record;

/// Storage for records of a single type, keyed by their id.
///
/// Implementations must make each operation atomic with respect to
/// concurrent callers. Input is assumed to be validated already; a registry
/// only enforces id-related rules.
pub trait Registry<R: Record> {
    /// Store a new record.
    ///
    /// An empty id is replaced by a freshly generated one. The uniqueness
    /// check runs against that resolved id, and the stored record is
    /// returned.
    ///
    /// Fails with [`CatalogError::Conflict`] if the resolved id is taken.
    fn create(&self, candidate: R) -> impl Future<Output = Result<R, CatalogError>> + Send;

    /// Fetch a record by id.
    ///
    /// Fails with [`CatalogError::NotFound`] when absent.
    fn get(&self, id: R::Id) -> impl Future<Output = Result<R, CatalogError>> + Send;

    /// Replace the record stored under `id` wholesale.
    ///
    /// The map key stays `id` whatever the replacement carries; the stored
    /// value is returned. Fails with [`CatalogError::NotFound`] when absent.
    fn update(
        &self,
        id: R::Id,
        replacement: R,
    ) -> impl Future<Output = Result<R, CatalogError>> + Send;

    /// Remove the record stored under `id`.
    ///
    /// Fails with [`CatalogError::NotFound`] when absent.
    fn delete(&self, id: R::Id) -> impl Future<Output = Result<(), CatalogError>> + Send;
}
