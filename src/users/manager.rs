//! User flow management
//!
//! `UserManager` glues the query cache, the user API, and the notifier:
//! reads go through the cache (deduplicated, banner state on failure),
//! writes go through tracked mutations (invalidate on success, exactly one
//! notice per outcome).

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::UserctlResult;
use crate::sync::{
    CachedValue, Mutation, MutationTarget, MutationTracker, Notifier, QueryCache, QueryKey,
    QuerySnapshot,
};
use crate::users::{next_candidate_id, User, UserApi, UserDraft};

/// Orchestrates user reads and writes against the synchronization layer
pub struct UserManager {
    api: Arc<dyn UserApi>,
    notifier: Arc<dyn Notifier>,
    cache: QueryCache,
    tracker: MutationTracker,
}

impl UserManager {
    pub fn new(api: Arc<dyn UserApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            cache: QueryCache::new(),
            tracker: MutationTracker::new(),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn tracker(&self) -> &MutationTracker {
        &self.tracker
    }

    /// Load the user list; concurrent callers share one request
    pub async fn load_list(&self) -> QuerySnapshot {
        let api = self.api.clone();
        let result = self
            .cache
            .fetch(QueryKey::UserList, move || async move {
                api.list_users().await.map(CachedValue::List)
            })
            .await;
        if result.is_err() {
            self.notifier.error("Could not load users");
        }
        self.snapshot(&QueryKey::UserList)
    }

    /// Load one user's details
    pub async fn load_user(&self, id: u64) -> QuerySnapshot {
        let api = self.api.clone();
        let result = self
            .cache
            .fetch(QueryKey::UserDetail(id), move || async move {
                api.get_user(id).await.map(CachedValue::One)
            })
            .await;
        if result.is_err() {
            self.notifier.error("Could not load user data");
        }
        self.snapshot(&QueryKey::UserDetail(id))
    }

    /// Create a user from a draft, deriving a candidate id from the cached
    /// list; the server-confirmed record wins
    pub async fn add_user(&self, draft: UserDraft) -> UserctlResult<User> {
        draft.validate()?;

        let known = self.cache.cached_users().unwrap_or_default();
        let candidate = next_candidate_id(&known);
        debug!("derived candidate id {} for new user", candidate);

        let payload = draft.clone().with_id(candidate);
        let api = self.api.clone();
        let mutation = Mutation::new(self.cache.clone(), self.tracker.clone(), "create")
            .invalidates(QueryKey::UserList);

        match mutation
            .trigger(MutationTarget::Collection, async move {
                api.create_user(&payload).await
            })
            .await
        {
            Ok(created) => {
                info!("created user {} ({})", created.id, created.name);
                self.notifier
                    .success(&format!("User \"{}\" was added", created.name));
                Ok(created)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Could not add user \"{}\"", draft.name));
                Err(err)
            }
        }
    }

    /// Delete a user by id
    pub async fn remove_user(&self, id: u64) -> UserctlResult<()> {
        // Capture the display name before issuing the delete: after
        // invalidation the row is no longer in the cache when the
        // feedback is composed.
        let name = self
            .cache
            .cached_users()
            .and_then(|users| users.into_iter().find(|u| u.id == id))
            .map(|u| u.name)
            .unwrap_or_else(|| format!("#{id}"));

        let api = self.api.clone();
        let mutation = Mutation::new(self.cache.clone(), self.tracker.clone(), "delete")
            .invalidates(QueryKey::UserList)
            .invalidates(QueryKey::UserDetail(id));

        match mutation
            .trigger(MutationTarget::User(id), async move {
                api.delete_user(id).await
            })
            .await
        {
            Ok(()) => {
                info!("deleted user {}", id);
                self.notifier
                    .success(&format!("User \"{name}\" was removed"));
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Could not remove user \"{name}\""));
                Err(err)
            }
        }
    }

    /// Replace a user's name and email
    pub async fn update_user(&self, id: u64, draft: UserDraft) -> UserctlResult<User> {
        draft.validate()?;

        let api = self.api.clone();
        let payload = draft.clone();
        let mutation = Mutation::new(self.cache.clone(), self.tracker.clone(), "update")
            .invalidates(QueryKey::UserDetail(id))
            .invalidates(QueryKey::UserList);

        match mutation
            .trigger(MutationTarget::User(id), async move {
                api.update_user_info(id, &payload).await
            })
            .await
        {
            Ok(updated) => {
                info!("updated user {} ({})", updated.id, updated.name);
                self.notifier
                    .success(&format!("User \"{}\" was updated", updated.name));
                Ok(updated)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Could not update user \"{}\"", draft.name));
                Err(err)
            }
        }
    }

    fn snapshot(&self, key: &QueryKey) -> QuerySnapshot {
        self.cache
            .peek(key)
            .unwrap_or_else(QuerySnapshot::loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserctlError;
    use crate::sync::{MemoryNotifier, QueryStatus};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct MockUserApi {
        users: Mutex<Vec<User>>,
        list_calls: AtomicUsize,
        list_delay_ms: u64,
        fail_list: bool,
        fail_create: bool,
        fail_delete: bool,
    }

    impl MockUserApi {
        fn seeded(users: Vec<User>) -> Self {
            Self {
                users: Mutex::new(users),
                ..Self::default()
            }
        }

        fn server_error() -> UserctlError {
            UserctlError::Server {
                url: "http://localhost:3000/users".to_string(),
                status: 500,
                body: "internal error".to_string(),
            }
        }
    }

    #[async_trait]
    impl UserApi for MockUserApi {
        async fn list_users(&self) -> UserctlResult<Vec<User>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.list_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.list_delay_ms)).await;
            }
            if self.fail_list {
                return Err(Self::server_error());
            }
            Ok(self.users.lock().unwrap().clone())
        }

        async fn get_user(&self, id: u64) -> UserctlResult<User> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or(UserctlError::UserNotFound(id))
        }

        async fn create_user(&self, user: &User) -> UserctlResult<User> {
            if self.fail_create {
                return Err(Self::server_error());
            }
            self.users.lock().unwrap().push(user.clone());
            Ok(user.clone())
        }

        async fn update_user_info(&self, id: u64, draft: &UserDraft) -> UserctlResult<User> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or(UserctlError::UserNotFound(id))?;
            // The server normalizes whitespace; clients must display what
            // comes back, not what they typed
            user.name = draft.name.trim().to_string();
            user.email = draft.email.trim().to_string();
            Ok(user.clone())
        }

        async fn delete_user(&self, id: u64) -> UserctlResult<()> {
            if self.fail_delete {
                return Err(Self::server_error());
            }
            let mut users = self.users.lock().unwrap();
            if !users.iter().any(|u| u.id == id) {
                return Err(UserctlError::UserNotFound(id));
            }
            users.retain(|u| u.id != id);
            Ok(())
        }
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn manager(api: Arc<MockUserApi>) -> (UserManager, MemoryNotifier) {
        let notifier = MemoryNotifier::new();
        let manager = UserManager::new(api, Arc::new(notifier.clone()));
        (manager, notifier)
    }

    #[tokio::test]
    async fn list_snapshot_holds_all_rows() {
        let api = Arc::new(MockUserApi::seeded(vec![user(1, "Ana"), user(2, "Bea")]));
        let (manager, _) = manager(api);

        let snapshot = manager.load_list().await;
        assert_eq!(snapshot.status, QueryStatus::Success);
        assert_eq!(snapshot.data.unwrap().as_list().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_refreshes_list_and_notifies_once() {
        let api = Arc::new(MockUserApi::seeded(vec![user(1, "Bea"), user(3, "Ana")]));
        let (manager, notifier) = manager(api);

        manager.load_list().await;
        manager.remove_user(3).await.unwrap();

        // The cached list is gone until the next read refetches it
        assert!(manager.cache().cached_users().is_none());

        let snapshot = manager.load_list().await;
        let users = snapshot.data.unwrap().as_list().unwrap().to_vec();
        assert!(!users.iter().any(|u| u.id == 3));

        let mentioning_ana: Vec<_> = notifier
            .notices()
            .into_iter()
            .filter(|n| n.message.contains("Ana"))
            .collect();
        assert_eq!(mentioning_ana.len(), 1);
        assert_eq!(notifier.successes(), vec!["User \"Ana\" was removed"]);
    }

    #[tokio::test]
    async fn failed_create_leaves_cache_untouched() {
        let api = Arc::new(MockUserApi {
            fail_create: true,
            ..MockUserApi::seeded(vec![user(1, "Ana")])
        });
        let (manager, notifier) = manager(api.clone());

        manager.load_list().await;
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);

        let draft = UserDraft {
            name: "Bea".to_string(),
            email: "bea@example.com".to_string(),
        };
        assert!(manager.add_user(draft).await.is_err());

        // No invalidation: the cached list is still there and no refetch
        // was issued
        assert_eq!(manager.cache().cached_users().unwrap().len(), 1);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.errors(), vec!["Could not add user \"Bea\""]);
    }

    #[tokio::test]
    async fn concurrent_list_loads_share_one_request() {
        let api = Arc::new(MockUserApi {
            list_delay_ms: 20,
            ..MockUserApi::seeded(vec![user(1, "Ana")])
        });
        let (manager, _) = manager(api.clone());

        let (a, b) = tokio::join!(manager.load_list(), manager.load_list());
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.status, QueryStatus::Success);
        assert_eq!(b.status, QueryStatus::Success);
    }

    #[tokio::test]
    async fn create_derives_candidate_id_from_cached_list() {
        let api = Arc::new(MockUserApi::seeded(vec![
            user(1, "Ana"),
            user(2, "Bea"),
            user(5, "Cid"),
        ]));
        let (manager, _) = manager(api);

        manager.load_list().await;
        let created = manager
            .add_user(UserDraft {
                name: "Duda".to_string(),
                email: "duda@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn update_displays_server_values_not_draft() {
        let api = Arc::new(MockUserApi::seeded(vec![user(1, "Ana")]));
        let (manager, _) = manager(api);

        let updated = manager
            .update_user(
                1,
                UserDraft {
                    name: "  Ana Maria  ".to_string(),
                    email: " ana.maria@example.com ".to_string(),
                },
            )
            .await
            .unwrap();

        // Server-normalized values, not the locally-typed draft
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.email, "ana.maria@example.com");

        let snapshot = manager.load_user(1).await;
        assert_eq!(snapshot.data.unwrap().as_user().unwrap().name, "Ana Maria");
    }

    #[tokio::test]
    async fn failed_list_load_sets_banner_state_and_notifies_once() {
        let api = Arc::new(MockUserApi {
            fail_list: true,
            ..MockUserApi::default()
        });
        let (manager, notifier) = manager(api);

        let snapshot = manager.load_list().await;
        assert_eq!(snapshot.status, QueryStatus::Error);
        assert!(snapshot.data.is_none());
        assert!(snapshot.error.is_some());
        assert_eq!(notifier.errors(), vec!["Could not load users"]);
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_api() {
        let api = Arc::new(MockUserApi::seeded(vec![]));
        let (manager, notifier) = manager(api.clone());

        let result = manager
            .add_user(UserDraft {
                name: String::new(),
                email: "a@b.com".to_string(),
            })
            .await;
        assert!(matches!(result, Err(UserctlError::Validation { .. })));
        assert!(api.users.lock().unwrap().is_empty());
        assert!(notifier.notices().is_empty());
    }
}
