//! Route definitions for Almacén Digital

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Protected routes - dashboard
        .nest("/dashboard", dashboard_routes())
        // Protected routes - product catalog
        .nest("/products", product_routes())
        // Protected routes - contact registry
        .nest("/clients", client_routes())
        .nest("/suppliers", supplier_routes())
        // Protected routes - movements and reports
        .nest("/movements", movement_routes())
        // Protected routes - owner profile
        .nest("/profile", profile_routes())
}

/// Dashboard routes (protected)
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Product catalog routes (protected)
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_products).post(handlers::create_product))
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Client registry routes (protected)
fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_clients).post(handlers::create_client))
        .route(
            "/:client_id",
            axum::routing::put(handlers::update_client).delete(handlers::delete_client),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Supplier registry routes (protected)
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_suppliers).post(handlers::create_supplier))
        .route(
            "/:supplier_id",
            axum::routing::put(handlers::update_supplier).delete(handlers::delete_supplier),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Movement and report routes (protected)
fn movement_routes() -> Router<AppState> {
    Router::new()
        // Ledger report (newest-first, optional date range)
        .route("/", get(handlers::get_movement_report))
        .route("/inbound", post(handlers::record_inbound))
        .route("/outbound", post(handlers::record_outbound))
        // Receipt context for the external document renderer
        .route("/:movement_id/receipt", get(handlers::get_receipt))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Owner profile routes (protected)
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_profile).put(handlers::update_profile))
        .route_layer(middleware::from_fn(auth_middleware))
}
