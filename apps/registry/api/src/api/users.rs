use axum::Router;
use domain_users::{handlers, InMemoryUserRepository, PgUserRepository, UserService};

pub fn router(state: &crate::AppState) -> Router {
    let minimum_age = state.config.registration.minimum_age;

    match &state.db {
        Some(db) => {
            let repository = PgUserRepository::new(db.clone());
            handlers::router(UserService::new(repository, minimum_age))
        }
        None => {
            let repository = InMemoryUserRepository::new();
            handlers::router(UserService::new(repository, minimum_age))
        }
    }
}
