//! Route definitions for the plastics production tracking platform

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Auth routes (login public, user management protected)
        .nest("/auth", auth_routes())
        // Protected routes - the five ledgers
        .nest("/production", production_routes())
        .nest("/shipment", shipment_routes())
        .nest("/cut-product", cut_product_routes())
        .nest("/raw-materials", raw_material_routes())
        .nest("/daily-consumption", consumption_routes())
        // Protected routes - rates and the derived snapshot
        .nest("/currency-rates", currency_routes())
        .nest("/stock", stock_routes())
}

/// Authentication and user management routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .nest("/users", user_routes())
}

/// User management routes (protected, admin checked in handlers)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route("/:user_id", delete(handlers::delete_user))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Production ledger routes (protected)
fn production_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_productions).post(handlers::create_production),
        )
        .route(
            "/:id",
            put(handlers::update_production)
                .delete(handlers::delete_production),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Shipment ledger routes (protected)
fn shipment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_shipments).post(handlers::create_shipment),
        )
        .route(
            "/:id",
            put(handlers::update_shipment).delete(handlers::delete_shipment),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Cut-product ledger routes (protected; no update, cut records are immutable)
fn cut_product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_cut_products).post(handlers::create_cut_product),
        )
        .route("/:id", delete(handlers::delete_cut_product))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Raw material ledger routes (protected)
fn raw_material_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_raw_materials).post(handlers::create_raw_material),
        )
        .route("/balances", get(handlers::get_material_balances))
        .route(
            "/:id",
            put(handlers::update_raw_material)
                .delete(handlers::delete_raw_material),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Daily consumption ledger routes (protected)
fn consumption_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_consumptions).post(handlers::create_consumption),
        )
        .route(
            "/:id",
            put(handlers::update_consumption)
                .delete(handlers::delete_consumption),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Currency rate routes (protected)
fn currency_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::get_currency_rates).post(handlers::set_currency_rates),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Stock snapshot route (protected)
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_stock))
        .route_layer(middleware::from_fn(auth_middleware))
}
