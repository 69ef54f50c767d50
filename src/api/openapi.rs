//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, webhook};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equiptrack API",
        version = "0.1.0",
        description = "Equipment Inventory Tracking Bot Server API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Webhook
        webhook::receive_update,
    ),
    components(
        schemas(
            // Webhook
            crate::bot::ChatUpdate,
            crate::bot::Reply,
            crate::bot::Button,
            webhook::WebhookResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "webhook", description = "Chat update intake")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
