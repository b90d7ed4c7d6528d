use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Registry API",
        version = "0.1.0",
        description = "User registry service: personal records with validated email and birth date"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/users", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
