use std::sync::LazyLock;

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use super::error::AppError;
use super::extract::ValidatedJson;
use super::{created, AppState};
use crate::adapter::presenter::response::{CreatedResponse, ErrorResponse, ProductTypeResponse};
use crate::usecase::CreateProductTypeInput;

static PRODUCT_TYPE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 ]*$").expect("product type name pattern"));

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductTypeRequest {
    #[validate(
        required(message = "Product type name is required."),
        length(
            min = 2,
            max = 100,
            message = "Product type name must be between 2 and 100 characters."
        ),
        regex(
            path = *PRODUCT_TYPE_NAME,
            message = "Product type name can only contain letters, numbers, and spaces."
        )
    )]
    pub product_type_name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/producttypes",
    request_body = CreateProductTypeRequest,
    responses(
        (status = 201, description = "Product type created", body = CreatedResponse),
        (status = 400, description = "Invalid product type", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    ),
    security(("api_key" = []))
)]
pub async fn create_product_type(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProductTypeRequest>,
) -> Result<Response, AppError> {
    let input = CreateProductTypeInput {
        name: req.product_type_name.unwrap_or_default(),
    };
    let id = state.create_product_type_uc.execute(input).await?;
    Ok(created(
        id,
        format!("/api/v1/producttypes?id={id}"),
        "Product type created successfully",
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/producttypes",
    responses(
        (status = 200, description = "All product types", body = [ProductTypeResponse]),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    ),
    security(("api_key" = []))
)]
pub async fn list_product_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductTypeResponse>>, AppError> {
    let types = state.list_product_types_uc.execute().await?;
    Ok(Json(types.into_iter().map(Into::into).collect()))
}
