//! Shared harness for endpoint tests.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{test, web, App};
use serde_json::Value;

use catalog_api::inbound::http::state::HttpState;
use catalog_api::inbound::http::{categories, extractors, products};
use catalog_api::Trace;

/// Build an application over a fresh in-memory store, mirroring the server
/// assembly.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::in_memory()))
        .wrap(Trace)
        .service(
            web::scope("/v1")
                .app_data(extractors::json_config())
                .app_data(extractors::path_config())
                .service(categories::list_categories)
                .service(categories::get_category)
                .service(categories::create_category)
                .service(categories::update_category)
                .service(categories::delete_category)
                .service(products::list_products)
                .service(products::list_products_by_category)
                .service(products::get_product)
                .service(products::create_product)
                .service(products::update_product)
                .service(products::delete_product),
        )
}

/// Read a response body as JSON.
pub async fn body_json<B: MessageBody>(response: ServiceResponse<B>) -> Value {
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
