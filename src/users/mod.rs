//! User resource types and repository
//!
//! `UserApi` is the seam between the synchronization layer and the wire:
//! the HTTP implementation is a pure pass-through (path construction and
//! payload shaping only), and tests substitute an in-memory one.

pub mod manager;

pub use manager::UserManager;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::HttpClient;
use crate::error::{UserctlError, UserctlResult};

/// A server-owned user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A user without an id, used for create/update payloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    /// Required-field checks, performed before any network call
    pub fn validate(&self) -> UserctlResult<()> {
        if self.name.trim().is_empty() {
            return Err(UserctlError::validation("name", "must not be empty"));
        }
        if self.email.trim().is_empty() {
            return Err(UserctlError::validation("email", "must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(UserctlError::validation("email", "must contain '@'"));
        }
        Ok(())
    }

    /// Attach an id, producing a full `User` payload
    pub fn with_id(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// REST operations on the `/users` collection
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch every user
    async fn list_users(&self) -> UserctlResult<Vec<User>>;

    /// Fetch a single user by id
    async fn get_user(&self, id: u64) -> UserctlResult<User>;

    /// Create a user; the server may reassign the id
    async fn create_user(&self, user: &User) -> UserctlResult<User>;

    /// Replace a user's name and email
    async fn update_user_info(&self, id: u64, draft: &UserDraft) -> UserctlResult<User>;

    /// Delete a user by id
    async fn delete_user(&self, id: u64) -> UserctlResult<()>;
}

/// `UserApi` implementation backed by the HTTP adapter
pub struct HttpUserApi {
    http: HttpClient,
}

impl HttpUserApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn map_not_found(err: UserctlError, id: u64) -> UserctlError {
        match err {
            UserctlError::NotFound { .. } => UserctlError::UserNotFound(id),
            other => other,
        }
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> UserctlResult<Vec<User>> {
        self.http.get("/users").await
    }

    async fn get_user(&self, id: u64) -> UserctlResult<User> {
        self.http
            .get(&format!("/users/{id}"))
            .await
            .map_err(|e| Self::map_not_found(e, id))
    }

    async fn create_user(&self, user: &User) -> UserctlResult<User> {
        self.http.post("/users", user).await
    }

    async fn update_user_info(&self, id: u64, draft: &UserDraft) -> UserctlResult<User> {
        self.http
            .put(&format!("/users/{id}"), draft)
            .await
            .map_err(|e| Self::map_not_found(e, id))
    }

    async fn delete_user(&self, id: u64) -> UserctlResult<()> {
        self.http
            .delete(&format!("/users/{id}"))
            .await
            .map_err(|e| Self::map_not_found(e, id))
    }
}

/// Derive a candidate id for a new user: one past the highest known id,
/// falling back to `len + 1` when no ids are known. Best-effort placeholder;
/// the server-confirmed id supersedes it.
pub fn next_candidate_id(users: &[User]) -> u64 {
    users
        .iter()
        .map(|u| u.id)
        .max()
        .map(|max| max + 1)
        .unwrap_or(users.len() as u64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn candidate_id_is_one_past_max() {
        let users = vec![user(1, "A"), user(2, "B"), user(5, "C")];
        assert_eq!(next_candidate_id(&users), 6);
    }

    #[test]
    fn candidate_id_for_empty_list() {
        assert_eq!(next_candidate_id(&[]), 1);
    }

    #[test]
    fn candidate_id_ignores_order() {
        let users = vec![user(9, "A"), user(2, "B")];
        assert_eq!(next_candidate_id(&users), 10);
    }

    #[test]
    fn draft_validation() {
        let draft = UserDraft {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        };
        assert!(draft.validate().is_ok());

        let missing_name = UserDraft {
            name: "  ".to_string(),
            email: "ana@example.com".to_string(),
        };
        assert!(matches!(
            missing_name.validate(),
            Err(UserctlError::Validation { field: "name", .. })
        ));

        let bad_email = UserDraft {
            name: "Ana".to_string(),
            email: "not-an-address".to_string(),
        };
        assert!(matches!(
            bad_email.validate(),
            Err(UserctlError::Validation { field: "email", .. })
        ));
    }

    #[test]
    fn user_wire_shape() {
        let parsed: User =
            serde_json::from_str(r#"{"id":3,"name":"Ana","email":"ana@example.com"}"#).unwrap();
        assert_eq!(parsed, user(3, "Ana"));

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Ana");
    }

    #[test]
    fn draft_with_id() {
        let draft = UserDraft {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        };
        let user = draft.with_id(6);
        assert_eq!(user.id, 6);
        assert_eq!(user.name, "Ana");
    }
}
