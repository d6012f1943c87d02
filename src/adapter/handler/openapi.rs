use axum::Json;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::{colour_handler, health, product_handler, product_type_handler};
use crate::adapter::middleware::api_key::API_KEY_HEADER;
use crate::adapter::presenter::response;

#[derive(OpenApi)]
#[openapi(
    info(title = "Product Catalog API", description = "Colours, product types and products"),
    paths(
        health::healthz,
        health::readyz,
        colour_handler::create_colour,
        colour_handler::list_colours,
        product_type_handler::create_product_type,
        product_type_handler::list_product_types,
        product_handler::create_product,
        product_handler::list_products,
        product_handler::get_product,
    ),
    components(schemas(
        colour_handler::CreateColourRequest,
        product_type_handler::CreateProductTypeRequest,
        product_handler::CreateProductRequest,
        response::CreatedResponse,
        response::ErrorResponse,
        response::ColourResponse,
        response::ProductTypeResponse,
        response::ProductSummaryResponse,
        response::ProductDetailResponse,
    )),
    modifiers(&ApiKeyScheme),
)]
pub struct ApiDoc;

struct ApiKeyScheme;

impl Modify for ApiKeyScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
