use chrono::Utc;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{DateRangeQuery, NewUser, User, UserInput};
use crate::repository::UserRepository;
use crate::validation;

/// Service layer for user registry business logic.
///
/// Holds the record store collaborator and the configured minimum
/// registration age. The service is stateless between invocations; each
/// operation snapshots "today" once and runs the validation rules in a
/// fixed order (date validity before age, email syntax before uniqueness),
/// short-circuiting on the first failure.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    minimum_age: u32,
}

impl<R: UserRepository> UserService<R> {
    /// `minimum_age` is the externally configured minimum registration age
    /// in whole years; this crate bakes in no default.
    pub fn new(repository: R, minimum_age: u32) -> Self {
        Self {
            repository: Arc::new(repository),
            minimum_age,
        }
    }

    /// List all users in store order
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a new user after running the full rule set on the input
    pub async fn create_user(&self, input: UserInput) -> UserResult<User> {
        let today = Utc::now().date_naive();

        let birth_date = validation::validate_birth_date(input.birth_date, today)?;
        validation::validate_adult_age(birth_date, self.minimum_age, today)?;
        let email = validation::validate_email_syntax(input.email.as_deref())?.to_owned();
        self.ensure_email_free(&email).await?;

        let created = self
            .repository
            .insert(NewUser {
                first_name: input.first_name,
                last_name: input.last_name,
                email,
                birth_date,
                address: input.address,
                phone_number: input.phone_number,
            })
            .await?;

        tracing::info!(user_id = created.id, "Registered user");
        Ok(created)
    }

    /// Full update: every field is replaced and the input is re-validated
    /// exactly as on create, whether or not the values changed.
    pub async fn replace_user(&self, id: i64, input: UserInput) -> UserResult<User> {
        let mut user = self.get_user(id).await?;

        let today = Utc::now().date_naive();

        let birth_date = validation::validate_birth_date(input.birth_date, today)?;
        validation::validate_adult_age(birth_date, self.minimum_age, today)?;
        let email = validation::validate_email_syntax(input.email.as_deref())?.to_owned();
        self.ensure_email_free(&email).await?;

        user.first_name = input.first_name;
        user.last_name = input.last_name;
        user.email = email;
        user.birth_date = birth_date;
        user.address = input.address;
        user.phone_number = input.phone_number;

        self.repository.update(user).await
    }

    /// Partial update: only supplied fields are validated and overwritten;
    /// absent fields are left untouched. Nothing is written back until every
    /// supplied field has passed its checks.
    pub async fn patch_user(&self, id: i64, input: UserInput) -> UserResult<User> {
        let mut user = self.get_user(id).await?;

        let today = Utc::now().date_naive();

        if let Some(first_name) = input.first_name {
            user.first_name = Some(first_name);
        }

        if let Some(last_name) = input.last_name {
            user.last_name = Some(last_name);
        }

        if let Some(email) = input.email {
            validation::validate_email_syntax(Some(&email))?;
            self.ensure_email_free(&email).await?;
            user.email = email;
        }

        if let Some(birth_date) = input.birth_date {
            let birth_date = validation::validate_birth_date(Some(birth_date), today)?;
            validation::validate_adult_age(birth_date, self.minimum_age, today)?;
            user.birth_date = birth_date;
        }

        if let Some(address) = input.address {
            user.address = Some(address);
        }

        if let Some(phone_number) = input.phone_number {
            user.phone_number = Some(phone_number);
        }

        self.repository.update(user).await
    }

    /// Delete a user. Not idempotent: deleting an absent id reports NotFound.
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        self.get_user(id).await?;

        self.repository.delete_by_id(id).await?;

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }

    /// Fetch users whose birth date falls within the inclusive range
    pub async fn search_users_by_birth_date(&self, range: DateRangeQuery) -> UserResult<Vec<User>> {
        validation::validate_date_range(range.from_date, range.to_date)?;

        self.repository
            .find_by_birth_date_between(range.from_date, range.to_date)
            .await
    }

    async fn ensure_email_free(&self, email: &str) -> UserResult<()> {
        if self.repository.exists_by_email(email).await? {
            return Err(UserError::EmailTaken(email.to_string()));
        }

        Ok(())
    }
}
