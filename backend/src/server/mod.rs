//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};

#[cfg(debug_assertions)]
use catalog_api::ApiDoc;
use catalog_api::inbound::http::health::{live, ready, HealthState};
use catalog_api::inbound::http::state::HttpState;
use catalog_api::inbound::http::{categories, extractors, products};
use catalog_api::Trace;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build and start the HTTP server over a fresh in-memory store.
///
/// # Errors
/// Returns [`std::io::Error`] when the listener cannot bind.
pub fn run(config: &ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::in_memory());
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let api = web::scope("/v1")
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
            .service(products::delete_product);

        let app = App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .wrap(Trace)
            .service(api)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
