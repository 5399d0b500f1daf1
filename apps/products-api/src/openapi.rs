//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product catalog API with query-by-example listing",
        license(name = "MIT")
    ),
    paths(crate::api::health::ready),
    components(
        schemas(axum_helpers::ReadyResponse, axum_helpers::CheckStatus),
        responses(axum_helpers::errors::responses::ServiceUnavailableResponse)
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Health", description = "Liveness and readiness checks")
    )
)]
pub struct ApiDoc;
