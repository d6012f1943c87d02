use std::sync::LazyLock;

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use super::error::AppError;
use super::extract::ValidatedJson;
use super::{created, AppState};
use crate::adapter::presenter::response::{
    CreatedResponse, ErrorResponse, ProductDetailResponse, ProductSummaryResponse,
};
use crate::usecase::CreateProductInput;

static PRODUCT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 ]*$").expect("product name pattern"));

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(
        required(message = "Product name is required."),
        length(
            min = 2,
            max = 200,
            message = "Product name must be between 2 and 200 characters."
        ),
        regex(
            path = *PRODUCT_NAME,
            message = "Product name can only contain letters, numbers, and spaces."
        )
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Product type is required."),
        range(min = 1, message = "Please select a valid product type.")
    )]
    pub product_type_id: Option<i64>,

    #[validate(
        required(message = "At least one colour is required."),
        length(min = 1, message = "At least one colour must be selected.")
    )]
    pub colour_ids: Option<Vec<i64>>,

    /// Falls back to the default creator tag when absent or blank.
    #[validate(length(max = 100, message = "Created by name cannot exceed 100 characters."))]
    pub created_by: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 400, description = "Invalid product or unknown colour / product type", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    ),
    security(("api_key" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> Result<Response, AppError> {
    let input = CreateProductInput {
        name: req.name.unwrap_or_default(),
        product_type_id: req.product_type_id.unwrap_or_default(),
        colour_ids: req.colour_ids.unwrap_or_default(),
        created_by: req.created_by,
    };
    let id = state.create_product_uc.execute(input).await?;
    Ok(created(
        id,
        format!("/api/v1/products/{id}"),
        "Product created successfully",
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "All products, without type or colours", body = [ProductSummaryResponse]),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    ),
    security(("api_key" = []))
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductSummaryResponse>>, AppError> {
    let products = state.list_products_uc.execute().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = String, Path, description = "Product id, a positive integer")),
    responses(
        (status = 200, description = "Product with type and colour names", body = ProductDetailResponse),
        (status = 400, description = "Id is not a positive integer", body = ErrorResponse),
        (status = 404, description = "No such product", body = ErrorResponse),
    ),
    security(("api_key" = []))
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProductDetailResponse>, AppError> {
    let id = parse_product_id(&raw_id)?;
    let detail = state
        .get_product_uc
        .execute(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with ID {id} was not found.")))?;
    Ok(Json(detail.into()))
}

/// Ids are 32-bit on the wire. Anything outside that range is a format error.
fn parse_product_id(raw: &str) -> Result<i64, AppError> {
    let id: i32 = raw.parse().map_err(|_| {
        AppError::bad_request(format!(
            "Invalid product ID format. '{raw}' is not a valid number. \
             Please provide a valid positive integer."
        ))
    })?;
    if id <= 0 {
        return Err(AppError::bad_request(format!(
            "Invalid product ID. Product ID must be a positive number greater than 0. Received: {id}"
        )));
    }
    Ok(i64::from(id))
}
