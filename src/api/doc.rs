use utoipa::OpenApi;

pub const CLIENT_TAG: &str = "Clients";
pub const SWIMMING_TOOL_TAG: &str = "Swimming Tools";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swimshop API",
        description = "CRUD API for swim shop clients and swimming tools",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = CLIENT_TAG, description = "Client management endpoints"),
        (name = SWIMMING_TOOL_TAG, description = "Swimming tool catalogue endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
