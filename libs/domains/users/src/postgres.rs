use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DbBackend, FromQueryResult, Statement};

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};
use crate::repository::UserRepository;

const COLUMNS: &str = "id, first_name, last_name, email, birth_date, address, phone_number";

/// PostgreSQL-backed record store, raw statements via SeaORM.
#[derive(Clone)]
pub struct PgUserRepository {
    db: sea_orm::DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: sea_orm::DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    email: String,
    birth_date: NaiveDate,
    address: Option<String>,
    phone_number: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            birth_date: row.birth_date,
            address: row.address,
            phone_number: row.phone_number,
        }
    }
}

/// Maps a write error, attributing unique-constraint violations to the email
/// at hand. The unique key on `users.email` is the only one in the schema.
fn map_write_err(email: &str, e: sea_orm::DbErr) -> UserError {
    let err_str = e.to_string();
    if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
        UserError::EmailTaken(email.to_string())
    } else {
        UserError::Internal(format!("Database error: {}", e))
    }
}

fn internal(e: sea_orm::DbErr) -> UserError {
    UserError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: NewUser) -> UserResult<User> {
        let sql = format!(
            "INSERT INTO users (first_name, last_name, email, birth_date, address, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        );

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                user.first_name.clone().into(),
                user.last_name.clone().into(),
                user.email.clone().into(),
                user.birth_date.into(),
                user.address.clone().into(),
                user.phone_number.clone().into(),
            ],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| map_write_err(&user.email, e))?
            .ok_or_else(|| UserError::Internal("Insert returned no row".to_string()))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE id = $1");

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let sql = format!("SELECT {COLUMNS} FROM users ORDER BY id");

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, []);

        let rows = UserRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(internal)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> UserResult<Vec<User>> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE birth_date BETWEEN $1 AND $2 ORDER BY id");

        let stmt =
            Statement::from_sql_and_values(DbBackend::Postgres, sql, [from.into(), to.into()]);

        let rows = UserRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(internal)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        let sql = "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1) AS found";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [email.into()]);

        #[derive(FromQueryResult)]
        struct ExistsRow {
            found: bool,
        }

        let row = ExistsRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(row.is_some_and(|r| r.found))
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let sql = format!(
            "UPDATE users SET first_name = $2, last_name = $3, email = $4, birth_date = $5, \
             address = $6, phone_number = $7 WHERE id = $1 RETURNING {COLUMNS}"
        );

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                user.id.into(),
                user.first_name.clone().into(),
                user.last_name.clone().into(),
                user.email.clone().into(),
                user.birth_date.into(),
                user.address.clone().into(),
                user.phone_number.clone().into(),
            ],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| map_write_err(&user.email, e))?;

        row.map(User::from).ok_or(UserError::NotFound(user.id))
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        let sql = "DELETE FROM users WHERE id = $1";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        self.db.execute_raw(stmt).await.map_err(internal)?;

        Ok(())
    }
}
