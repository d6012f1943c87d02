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
use crate::adapter::presenter::response::{ColourResponse, CreatedResponse, ErrorResponse};
use crate::usecase::CreateColourInput;

static COLOUR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]*$").expect("colour name pattern"));

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateColourRequest {
    #[validate(
        required(message = "Colour name is required."),
        length(min = 2, max = 50, message = "Colour name must be between 2 and 50 characters."),
        regex(path = *COLOUR_NAME, message = "Colour name can only contain letters and spaces.")
    )]
    pub colour_name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/colours",
    request_body = CreateColourRequest,
    responses(
        (status = 201, description = "Colour created", body = CreatedResponse),
        (status = 400, description = "Invalid colour", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    ),
    security(("api_key" = []))
)]
pub async fn create_colour(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateColourRequest>,
) -> Result<Response, AppError> {
    let input = CreateColourInput {
        name: req.colour_name.unwrap_or_default(),
    };
    let id = state.create_colour_uc.execute(input).await?;
    Ok(created(
        id,
        format!("/api/v1/colours?id={id}"),
        "Colour created successfully",
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/colours",
    responses(
        (status = 200, description = "All colours", body = [ColourResponse]),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    ),
    security(("api_key" = []))
)]
pub async fn list_colours(
    State(state): State<AppState>,
) -> Result<Json<Vec<ColourResponse>>, AppError> {
    let colours = state.list_colours_uc.execute().await?;
    Ok(Json(colours.into_iter().map(Into::into).collect()))
}
