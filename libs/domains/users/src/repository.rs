use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
///
/// This trait defines the data access interface for user records.
/// Implementations can use different storage backends (PostgreSQL, etc.);
/// the store owns identity assignment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with the store-assigned id
    async fn insert(&self, user: NewUser) -> UserResult<User>;

    /// Get a user by ID
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Fetch all users in insertion order
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Fetch users whose birth date falls within the inclusive range
    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> UserResult<Vec<User>>;

    /// Check if an email already exists
    async fn exists_by_email(&self, email: &str) -> UserResult<bool>;

    /// Write back an existing user by its id
    async fn update(&self, user: User) -> UserResult<User>;

    /// Delete a user by ID; a no-op when the id is absent
    async fn delete_by_id(&self, id: i64) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        // Mirrors the unique constraint on email in the SQL schema
        let email_exists = users.values().any(|u| u.email == user.email);

        if email_exists {
            return Err(UserError::EmailTaken(user.email));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            birth_date: user.birth_date,
            address: user.address,
            phone_number: user.phone_number,
        };

        users.insert(id, user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        // Ids are sequential, so this is insertion order
        result.sort_by_key(|u| u.id);

        Ok(result)
    }

    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users
            .values()
            .filter(|u| u.birth_date >= from && u.birth_date <= to)
            .cloned()
            .collect();
        result.sort_by_key(|u| u.id);

        Ok(result)
    }

    async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id));
        }

        let email_exists = users
            .values()
            .any(|u| u.id != user.id && u.email == user.email);

        if email_exists {
            return Err(UserError::EmailTaken(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Updated user");
        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
        }

        Ok(())
    }
}
