use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{DateRangeQuery, User, UserInput};
use crate::repository::UserRepository;
use crate::service::UserService;

const TAG: &str = "users";

/// OpenAPI documentation for the user registry API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        create_user,
        get_user,
        replace_user,
        patch_user,
        delete_user,
        search_users_by_birth_date,
    ),
    components(schemas(User, UserInput, DateRangeQuery, ErrorResponse)),
    tags(
        (name = TAG, description = "User registry endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/by-date-range", get(search_users_by_birth_date))
        .route(
            "/{id}",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = UserInput,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 409, description = "A registry rule was violated", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The requested user", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<i64>,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Replace every field of a user (full update)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "A registry rule was violated", body = ErrorResponse)
    )
)]
async fn replace_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<i64>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> UserResult<Json<User>> {
    let user = service.replace_user(id, input).await?;
    Ok(Json(user))
}

/// Update only the supplied fields of a user (partial update)
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "A registry rule was violated", body = ErrorResponse)
    )
)]
async fn patch_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<i64>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> UserResult<Json<User>> {
    let user = service.patch_user(id, input).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<i64>,
) -> UserResult<impl IntoResponse> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search users whose birth date falls within an inclusive range
#[utoipa::path(
    get,
    path = "/by-date-range",
    tag = TAG,
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Users within the range", body = Vec<User>),
        (status = 409, description = "Inverted date range", body = ErrorResponse)
    )
)]
async fn search_users_by_birth_date<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Query(range): Query<DateRangeQuery>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.search_users_by_birth_date(range).await?;
    Ok(Json(users))
}
