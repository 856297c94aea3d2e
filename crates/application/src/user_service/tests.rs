use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use proptest::prelude::*;
use rosterly_core::{AppError, AppResult};
use rosterly_domain::{NewUser, UserId, UserPatch, UserRecord};
use tokio::sync::Mutex;

use super::{USERS_PER_PAGE, UserRepository, UserService};

struct FakeRepository {
    users: Mutex<Vec<UserRecord>>,
    next_id: Mutex<u64>,
}

impl FakeRepository {
    fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    async fn snapshot(&self) -> Vec<UserRecord> {
        self.users.lock().await.clone()
    }
}

#[async_trait]
impl UserRepository for FakeRepository {
    async fn find_page(&self, skip: u64, take: u64) -> AppResult<Vec<UserRecord>> {
        let users = self.users.lock().await;
        Ok(users
            .iter()
            .skip(skip as usize)
            .take(take as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<UserRecord>> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|user| &user.id == id).cloned())
    }

    async fn create(&self, input: NewUser) -> AppResult<UserRecord> {
        let mut next_id = self.next_id.lock().await;
        let record = UserRecord {
            id: UserId::new(next_id.to_string()),
            first_name: input.first_name,
            last_name: input.last_name,
            height: input.height,
            weight: input.weight,
            address: input.address,
            photo: input.photo,
            created_at: Utc::now(),
        };
        *next_id += 1;

        self.users.lock().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &UserId, patch: UserPatch) -> AppResult<UserRecord> {
        let mut users = self.users.lock().await;
        let stored = users
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or_else(|| AppError::Internal("update on missing record".to_owned()))?;

        *stored = patch.apply_to(stored);
        Ok(stored.clone())
    }

    async fn delete(&self, id: &UserId) -> AppResult<UserRecord> {
        let mut users = self.users.lock().await;
        let position = users
            .iter()
            .position(|user| &user.id == id)
            .ok_or_else(|| AppError::Internal("delete on missing record".to_owned()))?;

        Ok(users.remove(position))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.lock().await.len() as u64)
    }
}

fn sample_input(index: u32) -> NewUser {
    NewUser {
        first_name: format!("First {index}"),
        last_name: format!("Last {index}"),
        height: f64::from(index) * 100.0,
        weight: f64::from(index) * 100.0,
        address: format!("{index} Example Street"),
        photo: format!("https://example.com/photo-{index}.png"),
    }
}

async fn service_with_users(count: u32) -> (UserService, Arc<FakeRepository>) {
    let repository = Arc::new(FakeRepository::new());
    let service = UserService::new(repository.clone());

    for index in 1..=count {
        let created = service.create(sample_input(index)).await;
        assert!(created.is_ok());
    }

    (service, repository)
}

fn assert_not_found(error: AppError) {
    match error {
        AppError::NotFound(message) => assert_eq!(message, "User not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn negative_page_is_rejected_with_incorrect_page_value() {
    let (service, _) = service_with_users(3).await;

    match service.list(-1).await {
        Err(AppError::Validation(message)) => assert_eq!(message, "Incorrect page value"),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn page_zero_returns_empty_list_with_total_pages() {
    let (service, _) = service_with_users(3).await;

    let page = match service.list(0).await {
        Ok(page) => page,
        Err(error) => panic!("list failed: {error}"),
    };

    assert!(page.users.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn first_page_returns_all_seeded_users() {
    let (service, _) = service_with_users(3).await;

    let page = match service.list(1).await {
        Ok(page) => page,
        Err(error) => panic!("list failed: {error}"),
    };

    assert_eq!(page.total_pages, 1);
    assert_eq!(page.users.len(), 3);

    let ids: Vec<&str> = page.users.iter().map(|user| user.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[tokio::test]
async fn page_beyond_range_is_empty_not_an_error() {
    let (service, _) = service_with_users(3).await;

    let page = match service.list(2).await {
        Ok(page) => page,
        Err(error) => panic!("list failed: {error}"),
    };

    assert!(page.users.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn listing_windows_split_at_users_per_page() {
    let (service, _) = service_with_users(USERS_PER_PAGE as u32 + 5).await;

    let first = match service.list(1).await {
        Ok(page) => page,
        Err(error) => panic!("list failed: {error}"),
    };
    let second = match service.list(2).await {
        Ok(page) => page,
        Err(error) => panic!("list failed: {error}"),
    };

    assert_eq!(first.users.len(), USERS_PER_PAGE as usize);
    assert_eq!(second.users.len(), 5);
    assert_eq!(first.total_pages, 2);
    assert_eq!(second.total_pages, 2);
}

#[tokio::test]
async fn astronomically_large_page_is_still_an_empty_page() {
    let (service, _) = service_with_users(3).await;

    let page = match service.list(600_000_000_000_000_000).await {
        Ok(page) => page,
        Err(error) => panic!("list failed: {error}"),
    };

    assert!(page.users.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn get_one_returns_the_exact_stored_record() {
    let (service, repository) = service_with_users(3).await;

    let stored = repository.snapshot().await;
    let fetched = match service.get_one(&UserId::new("2")).await {
        Ok(record) => record,
        Err(error) => panic!("get_one failed: {error}"),
    };

    assert_eq!(fetched, stored[1]);
}

#[tokio::test]
async fn get_one_with_unknown_id_fails_not_found() {
    let (service, _) = service_with_users(3).await;

    match service.get_one(&UserId::new("433")).await {
        Err(error) => assert_not_found(error),
        Ok(record) => panic!("expected NotFound, got {record:?}"),
    }
}

#[tokio::test]
async fn get_one_with_empty_id_fails_not_found() {
    let (service, _) = service_with_users(3).await;

    match service.get_one(&UserId::new("")).await {
        Err(error) => assert_not_found(error),
        Ok(record) => panic!("expected NotFound, got {record:?}"),
    }
}

#[tokio::test]
async fn create_assigns_id_and_keeps_supplied_photo() {
    let (service, _) = service_with_users(3).await;

    let created = match service.create(sample_input(4)).await {
        Ok(record) => record,
        Err(error) => panic!("create failed: {error}"),
    };

    assert_eq!(created.id.as_str(), "4");
    assert_eq!(created.photo, "https://example.com/photo-4.png");
}

#[tokio::test]
async fn create_without_photo_stores_the_empty_sentinel() {
    let (service, _) = service_with_users(0).await;

    let mut input = sample_input(1);
    input.photo = String::new();

    let created = match service.create(input).await {
        Ok(record) => record,
        Err(error) => panic!("create failed: {error}"),
    };

    assert_eq!(created.photo, "");
}

#[tokio::test]
async fn create_with_invalid_fields_is_rejected_per_field() {
    let (service, repository) = service_with_users(0).await;

    let mut input = sample_input(1);
    input.first_name = String::new();
    input.photo = "not a url".to_owned();

    match service.create(input).await {
        Err(AppError::Validation(message)) => {
            assert!(message.contains("firstName (not_empty)"));
            assert!(message.contains("photo (url)"));
        }
        other => panic!("expected Validation error, got {other:?}"),
    }

    assert!(repository.snapshot().await.is_empty());
}

#[tokio::test]
async fn update_on_missing_id_fails_before_any_write() {
    let (service, repository) = service_with_users(3).await;
    let before = repository.snapshot().await;

    let patch = UserPatch {
        weight: Some(555.0),
        ..UserPatch::default()
    };

    match service.update(&UserId::new("4"), patch).await {
        Err(error) => assert_not_found(error),
        Ok(record) => panic!("expected NotFound, got {record:?}"),
    }

    assert_eq!(repository.snapshot().await, before);
}

#[tokio::test]
async fn partial_update_preserves_unpatched_fields() {
    let (service, repository) = service_with_users(3).await;
    let before = repository.snapshot().await[0].clone();

    let patch = UserPatch {
        weight: Some(555.0),
        ..UserPatch::default()
    };

    let updated = match service.update(&UserId::new("1"), patch).await {
        Ok(record) => record,
        Err(error) => panic!("update failed: {error}"),
    };

    assert_eq!(updated.weight, 555.0);
    assert_eq!(updated.first_name, before.first_name);
    assert_eq!(updated.last_name, before.last_name);
    assert_eq!(updated.height, before.height);
    assert_eq!(updated.address, before.address);
    assert_eq!(updated.photo, before.photo);
    assert_eq!(updated.created_at, before.created_at);
}

#[tokio::test]
async fn full_update_replaces_every_caller_field() {
    let (service, _) = service_with_users(3).await;

    let patch = UserPatch {
        first_name: Some("Updated First".to_owned()),
        last_name: Some("Updated Last".to_owned()),
        height: Some(555.0),
        weight: Some(555.0),
        address: Some("Updated Address".to_owned()),
        photo: Some("https://example.com/updated.png".to_owned()),
    };

    let updated = match service.update(&UserId::new("1"), patch).await {
        Ok(record) => record,
        Err(error) => panic!("update failed: {error}"),
    };

    assert_eq!(updated.id.as_str(), "1");
    assert_eq!(updated.first_name, "Updated First");
    assert_eq!(updated.address, "Updated Address");
}

#[tokio::test]
async fn update_with_invalid_patch_is_rejected_before_lookup() {
    let (service, repository) = service_with_users(1).await;
    let before = repository.snapshot().await;

    let patch = UserPatch {
        last_name: Some("x".repeat(101)),
        ..UserPatch::default()
    };

    match service.update(&UserId::new("1"), patch).await {
        Err(AppError::Validation(message)) => assert!(message.contains("lastName (max_length)")),
        other => panic!("expected Validation error, got {other:?}"),
    }

    assert_eq!(repository.snapshot().await, before);
}

#[tokio::test]
async fn delete_returns_snapshot_and_makes_record_unreachable() {
    let (service, _) = service_with_users(3).await;
    let id = UserId::new("1");

    let before = match service.get_one(&id).await {
        Ok(record) => record,
        Err(error) => panic!("get_one failed: {error}"),
    };

    let deleted = match service.delete_one(&id).await {
        Ok(record) => record,
        Err(error) => panic!("delete_one failed: {error}"),
    };
    assert_eq!(deleted, before);

    match service.get_one(&id).await {
        Err(error) => assert_not_found(error),
        Ok(record) => panic!("expected NotFound, got {record:?}"),
    }
}

#[tokio::test]
async fn delete_on_missing_id_fails_not_found() {
    let (service, _) = service_with_users(3).await;

    match service.delete_one(&UserId::new("4")).await {
        Err(error) => assert_not_found(error),
        Ok(record) => panic!("expected NotFound, got {record:?}"),
    }
}

struct CountOnlyRepository {
    count: u64,
}

#[async_trait]
impl UserRepository for CountOnlyRepository {
    async fn find_page(&self, _skip: u64, _take: u64) -> AppResult<Vec<UserRecord>> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &UserId) -> AppResult<Option<UserRecord>> {
        Ok(None)
    }

    async fn create(&self, _input: NewUser) -> AppResult<UserRecord> {
        Err(AppError::Internal("not used".to_owned()))
    }

    async fn update(&self, _id: &UserId, _patch: UserPatch) -> AppResult<UserRecord> {
        Err(AppError::Internal("not used".to_owned()))
    }

    async fn delete(&self, _id: &UserId) -> AppResult<UserRecord> {
        Err(AppError::Internal("not used".to_owned()))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.count)
    }
}

proptest! {
    #[test]
    fn total_pages_is_always_the_count_ceiling(count in 0u64..100_000) {
        let runtime = match tokio::runtime::Builder::new_current_thread().build() {
            Ok(runtime) => runtime,
            Err(error) => panic!("runtime: {error}"),
        };

        let service = UserService::new(Arc::new(CountOnlyRepository { count }));
        let page = match runtime.block_on(service.list(1)) {
            Ok(page) => page,
            Err(error) => panic!("list failed: {error}"),
        };

        prop_assert_eq!(page.total_pages, count.div_ceil(USERS_PER_PAGE));
    }
}
