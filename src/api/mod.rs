mod handlers;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::store::Store;

/// Router exposing only the JSON API. Used directly by tests.
pub fn create_router(store: Store) -> Router {
    let router = api_routes()
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::route_not_found);

    with_layers(router).with_state(store)
}

/// Full application: the JSON API, the optional embedded page at `/`, and
/// static files from `config.static_dir` for every other path.
pub fn create_app(store: Store, config: &ServerConfig) -> Router {
    let mut router = api_routes();
    if config.embedded_index {
        router = router.route("/", get(handlers::index));
    }
    let router = router
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback_service(ServeDir::new(&config.static_dir));

    with_layers(router).with_state(store)
}

fn api_routes() -> Router<Store> {
    Router::new()
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route("/health", get(handlers::health))
}

fn with_layers(router: Router<Store>) -> Router<Store> {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
