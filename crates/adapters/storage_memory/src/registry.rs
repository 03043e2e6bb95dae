//! Generic in-memory implementation of [`Registry`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use homecat_app::ports::Registry;
use homecat_domain::device::Device;
use homecat_domain::error::{CatalogError, ConflictError, NotFoundError};
use homecat_domain::house::House;
use homecat_domain::record::{Record, RecordId};
use homecat_domain::room::Room;
use homecat_domain::user::User;

/// Registry of users.
pub type UserRegistry = InMemoryRegistry<User>;
/// Registry of devices.
pub type DeviceRegistry = InMemoryRegistry<Device>;
/// Registry of rooms.
pub type RoomRegistry = InMemoryRegistry<Room>;
/// Registry of houses.
pub type HouseRegistry = InMemoryRegistry<House>;

/// Records of one type, keyed by id and guarded by a single lock.
///
/// Mutations hold the write lock for their whole duration, so id
/// resolution, the uniqueness check and the insert happen as one step.
pub struct InMemoryRegistry<R: Record> {
    records: Arc<RwLock<HashMap<R::Id, R>>>,
}

impl<R: Record> Default for InMemoryRegistry<R> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<R: Record> InMemoryRegistry<R> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the registry holds no record.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn not_found<R: Record>(id: &R::Id) -> CatalogError {
    NotFoundError {
        entity: R::KIND,
        id: id.to_string(),
    }
    .into()
}

impl<R: Record> Registry<R> for InMemoryRegistry<R> {
    fn create(&self, mut candidate: R) -> impl Future<Output = Result<R, CatalogError>> + Send {
        let records = Arc::clone(&self.records);
        async move {
            let mut records = records.write().await;

            if candidate.id().is_empty() {
                candidate.set_id(<R::Id as RecordId>::generate());
            }
            // Checked against the resolved id, generated or supplied.
            if records.contains_key(candidate.id()) {
                return Err(ConflictError {
                    entity: R::KIND,
                    id: candidate.id().to_string(),
                }
                .into());
            }

            records.insert(candidate.id().clone(), candidate.clone());
            tracing::debug!(kind = R::KIND, id = %candidate.id(), "record created");
            Ok(candidate)
        }
    }

    fn get(&self, id: R::Id) -> impl Future<Output = Result<R, CatalogError>> + Send {
        let records = Arc::clone(&self.records);
        async move {
            let records = records.read().await;
            records.get(&id).cloned().ok_or_else(|| not_found::<R>(&id))
        }
    }

    fn update(
        &self,
        id: R::Id,
        mut replacement: R,
    ) -> impl Future<Output = Result<R, CatalogError>> + Send {
        let records = Arc::clone(&self.records);
        async move {
            let mut records = records.write().await;
            let Some(slot) = records.get_mut(&id) else {
                return Err(not_found::<R>(&id));
            };

            replacement.set_id(id);
            slot.clone_from(&replacement);
            tracing::debug!(kind = R::KIND, id = %replacement.id(), "record replaced");
            Ok(replacement)
        }
    }

    fn delete(&self, id: R::Id) -> impl Future<Output = Result<(), CatalogError>> + Send {
        let records = Arc::clone(&self.records);
        async move {
            let mut records = records.write().await;
            if records.remove(&id).is_none() {
                return Err(not_found::<R>(&id));
            }
            tracing::debug!(kind = R::KIND, id = %id, "record deleted");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use homecat_domain::id::{HouseId, RoomId, UserId};

    use super::*;

    fn john() -> User {
        User::builder()
            .name("John Doe")
            .phone_number("1234567890")
            .email("john@gmail.com")
            .build()
            .unwrap()
    }

    fn master_bedroom() -> Room {
        Room::builder()
            .name("Master Bedroom")
            .kind("Bedroom")
            .size(200.0)
            .house_id("house123")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_assign_fresh_id_when_candidate_has_none() {
        let registry = UserRegistry::new();

        let created = registry.create(john()).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.name, "John Doe");
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn should_store_record_only_once_create_future_is_awaited() {
        let registry = UserRegistry::new();

        let pending = registry.create(john());
        assert!(registry.is_empty().await);

        let created = pending.await.unwrap();
        assert_eq!(registry.len().await, 1);
        assert_eq!(registry.get(created.id.clone()).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_assign_distinct_ids_to_identical_candidates() {
        let registry = UserRegistry::new();

        let a = registry.create(john()).await.unwrap();
        let b = registry.create(john()).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn should_keep_client_supplied_id() {
        let registry = UserRegistry::new();
        let mut user = john();
        user.id = UserId::from("john");

        let created = registry.create(user).await.unwrap();

        assert_eq!(created.id.as_str(), "john");
        assert_eq!(registry.get(UserId::from("john")).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_and_keep_original() {
        let registry = UserRegistry::new();
        let mut original = john();
        original.id = UserId::from("john");
        registry.create(original.clone()).await.unwrap();

        let mut duplicate = john();
        duplicate.id = UserId::from("john");
        duplicate.name = "Impostor".to_string();
        let result = registry.create(duplicate).await;

        assert!(matches!(
            result,
            Err(CatalogError::Conflict(ConflictError { entity: "User", .. }))
        ));
        assert_eq!(registry.get(UserId::from("john")).await.unwrap(), original);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn should_reject_supplied_id_colliding_with_generated_one() {
        let registry = UserRegistry::new();
        let generated = registry.create(john()).await.unwrap();

        let mut clash = john();
        clash.id = generated.id.clone();
        let result = registry.create(clash).await;

        assert!(matches!(result, Err(CatalogError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_absent() {
        let registry = UserRegistry::new();
        let result = registry.get(UserId::from("ghost")).await;
        assert!(matches!(
            result,
            Err(CatalogError::NotFound(NotFoundError { entity: "User", .. }))
        ));
    }

    #[tokio::test]
    async fn should_replace_whole_record_on_update() {
        let registry = RoomRegistry::new();
        let created = registry.create(master_bedroom()).await.unwrap();

        let mut replacement = master_bedroom();
        replacement.size = 312.5;
        replacement.name = "Guest Room".to_string();
        let updated = registry
            .update(created.id.clone(), replacement)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        let fetched = registry.get(created.id).await.unwrap();
        assert_eq!(fetched, updated);
        assert_eq!(fetched.size.to_bits(), 312.5_f64.to_bits());
    }

    #[tokio::test]
    async fn should_keep_map_key_when_replacement_carries_other_id() {
        let registry = RoomRegistry::new();
        let created = registry.create(master_bedroom()).await.unwrap();

        let mut replacement = master_bedroom();
        replacement.id = RoomId::from("something-else");
        let updated = registry
            .update(created.id.clone(), replacement)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert!(registry.get(RoomId::from("something-else")).await.is_err());
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn should_fail_update_when_absent_and_leave_registry_unchanged() {
        let registry = RoomRegistry::new();
        let existing = registry.create(master_bedroom()).await.unwrap();

        let result = registry
            .update(RoomId::from("missing"), master_bedroom())
            .await;

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert_eq!(registry.len().await, 1);
        assert_eq!(registry.get(existing.id.clone()).await.unwrap(), existing);
    }

    #[tokio::test]
    async fn should_not_find_record_after_delete() {
        let registry = RoomRegistry::new();
        let created = registry.create(master_bedroom()).await.unwrap();

        registry.delete(created.id.clone()).await.unwrap();

        assert!(matches!(
            registry.get(created.id.clone()).await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            registry.delete(created.id).await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn should_store_house_with_unknown_user_references() {
        let registry = HouseRegistry::new();
        let house = House::builder()
            .name("Rental")
            .address("12 Elm St")
            .owner("Landlord Paul")
            .occupant("Colin")
            .occupant("Brianna")
            .build()
            .unwrap();

        let created = registry.create(house).await.unwrap();
        let fetched = registry.get(created.id.clone()).await.unwrap();

        assert_eq!(fetched.owners, vec![UserId::from("Landlord Paul")]);
        assert_eq!(
            fetched.occupants,
            vec![UserId::from("Colin"), UserId::from("Brianna")]
        );
    }

    #[tokio::test]
    async fn should_keep_registries_independent() {
        let houses = HouseRegistry::new();
        let rooms = RoomRegistry::new();
        let house = House::builder()
            .id("shared")
            .name("Cabin")
            .address("Forest Rd")
            .build()
            .unwrap();
        let mut room = master_bedroom();
        room.id = RoomId::from("shared");

        houses.create(house).await.unwrap();
        rooms.create(room).await.unwrap();

        assert!(houses.get(HouseId::from("shared")).await.is_ok());
        assert!(rooms.get(RoomId::from("shared")).await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_accept_exactly_one_of_concurrent_creates_with_same_id() {
        let registry = Arc::new(UserRegistry::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move {
                    let mut user = john();
                    user.id = UserId::from("contended");
                    registry.create(user).await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_generate_unique_ids_under_concurrent_creates() {
        let registry = Arc::new(UserRegistry::new());

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move { registry.create(john()).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let created = handle.await.unwrap().unwrap();
            ids.insert(created.id);
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(registry.len().await, 64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_observe_whole_record_or_absence_during_concurrent_delete() {
        let registry = Arc::new(RoomRegistry::new());
        let created = registry.create(master_bedroom()).await.unwrap();

        let reader = {
            let registry = Arc::clone(&registry);
            let id = created.id.clone();
            let expected = created.clone();
            tokio::spawn(async move {
                for _ in 0..100 {
                    match registry.get(id.clone()).await {
                        Ok(room) => assert_eq!(room, expected),
                        Err(err) => assert!(matches!(err, CatalogError::NotFound(_))),
                    }
                }
            })
        };
        registry.delete(created.id).await.unwrap();

        reader.await.unwrap();
    }
}
