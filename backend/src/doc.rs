//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: all `/v1` endpoints, the health probes, and the shared
//! error envelope schema. Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the catalogue REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalogue API",
        description = "CRUD over categories and products backed by a pluggable store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::get_category,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::categories::update_category,
        crate::inbound::http::categories::delete_category,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::list_products_by_category,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::inbound::http::categories::CategoryCreateRequest,
        crate::inbound::http::categories::CategoryUpdateRequest,
        crate::inbound::http::categories::CategoryResponse,
        crate::inbound::http::products::ProductCreateRequest,
        crate::inbound::http::products::ProductUpdateRequest,
        crate::inbound::http::products::ProductResponse,
        crate::inbound::http::ApiError,
    )),
    tags(
        (name = "category", description = "Category CRUD"),
        (name = "product", description = "Product CRUD"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
