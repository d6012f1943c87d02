pub mod colour_handler;
pub mod error;
pub mod extract;
pub mod health;
pub mod openapi;
pub mod product_handler;
pub mod product_type_handler;

use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::adapter::middleware::api_key::{api_key_middleware, ApiKeyState};
use crate::adapter::presenter::response::CreatedResponse;
use crate::usecase::{
    CreateColourUseCase, CreateProductTypeUseCase, CreateProductUseCase, GetProductUseCase,
    ListColoursUseCase, ListProductTypesUseCase, ListProductsUseCase,
};

/// AppState is shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub create_colour_uc: Arc<CreateColourUseCase>,
    pub list_colours_uc: Arc<ListColoursUseCase>,
    pub create_product_type_uc: Arc<CreateProductTypeUseCase>,
    pub list_product_types_uc: Arc<ListProductTypesUseCase>,
    pub create_product_uc: Arc<CreateProductUseCase>,
    pub list_products_uc: Arc<ListProductsUseCase>,
    pub get_product_uc: Arc<GetProductUseCase>,
    pub db_pool: Arc<SqlitePool>,
}

/// Builds the REST router. Every route sits behind the API key gate; the gate
/// itself lets health and documentation paths through.
pub fn router(state: AppState, api_key_state: ApiKeyState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/swagger/v1/swagger.json", get(openapi::openapi_json))
        .route(
            "/api/v1/colours",
            get(colour_handler::list_colours).post(colour_handler::create_colour),
        )
        .route(
            "/api/v1/producttypes",
            get(product_type_handler::list_product_types)
                .post(product_type_handler::create_product_type),
        )
        .route(
            "/api/v1/products",
            get(product_handler::list_products).post(product_handler::create_product),
        )
        .route("/api/v1/products/{id}", get(product_handler::get_product))
        .layer(from_fn_with_state(api_key_state, api_key_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 201 with a `Location` header that repeats the body's `location`.
pub(crate) fn created(id: i64, location: String, message: &str) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location.clone())],
        Json(CreatedResponse {
            id,
            message: message.to_string(),
            location,
        }),
    )
        .into_response()
}
