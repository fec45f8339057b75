//! Router assembly: the exact-path routing table, per-route 405 fallbacks,
//! the 404 fallback, and the wildcard-CORS layer.

use crate::handlers::{
    self, bills, categories, products, stocks, suppliers, units, warehouse_location,
};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Builds the application router. Every known path rejects unsupported
/// methods with a 405 body; unknown paths fall through to the 404 handler.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/categories",
            get(categories::fetch)
                .post(categories::create)
                .put(categories::update)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/categories/add-multiple",
            post(categories::add_multiple).fallback(handlers::method_not_allowed),
        )
        .route(
            "/units",
            get(units::fetch)
                .post(units::create)
                .put(units::update)
                .delete(units::remove)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/stocks",
            get(stocks::fetch)
                .post(stocks::create)
                .put(stocks::update)
                .delete(stocks::remove)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/products",
            get(products::fetch)
                .post(products::create)
                .put(products::update)
                .delete(products::remove)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/products/add-multiple",
            post(products::add_multiple).fallback(handlers::method_not_allowed),
        )
        .route(
            "/products/get-paginations",
            get(products::get_paginations).fallback(handlers::method_not_allowed),
        )
        .route(
            "/warehouse-location",
            get(warehouse_location::fetch)
                .post(warehouse_location::create)
                .put(warehouse_location::update)
                .delete(warehouse_location::remove)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/suppliers",
            get(suppliers::fetch)
                .post(suppliers::create)
                .put(suppliers::update)
                .delete(suppliers::remove)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/suppliers/add-multiple",
            post(suppliers::add_multiple).fallback(handlers::method_not_allowed),
        )
        .route(
            "/bills",
            get(bills::fetch)
                .post(bills::create)
                .put(bills::update)
                .delete(bills::remove)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/bills/suppliers",
            get(bills::suppliers).fallback(handlers::method_not_allowed),
        )
        .route(
            "/connection",
            get(handlers::connection).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}
