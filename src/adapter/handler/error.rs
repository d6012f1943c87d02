use std::collections::BTreeMap;
use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapter::presenter::response::ErrorResponse;
use crate::adapter::repository::{classify, StoreFailure};
use crate::usecase::{
    CreateColourError, CreateProductError, CreateProductTypeError, GetProductError,
    ListColoursError, ListProductTypesError, ListProductsError,
};

static EXPOSE_DETAILS: OnceLock<bool> = OnceLock::new();

/// Decides once per process whether raw error detail is sent to clients.
/// Later calls are ignored. Until it is called detail stays hidden.
pub fn expose_error_details(enabled: bool) {
    let _ = EXPOSE_DETAILS.set(enabled);
}

fn details_exposed() -> bool {
    EXPOSE_DETAILS.get().copied().unwrap_or(false)
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
    pub field_errors: Option<BTreeMap<String, Vec<String>>>,
}

impl AppError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            field_errors: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Shape validation failure. Field names are reported in their JSON spelling.
    pub fn validation(errors: &validator::ValidationErrors) -> Self {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let key = camel_case(&field);
            let messages = errs.iter().map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{key} is invalid."),
            });
            fields.entry(key.clone()).or_default().extend(messages);
        }
        Self {
            field_errors: Some(fields),
            ..Self::bad_request("Validation failed")
        }
    }

    /// Maps a failure that came up from the store, or from anywhere else
    /// below the use cases, to its client-facing message.
    pub fn from_store(err: anyhow::Error) -> Self {
        let failure = classify(&err);
        let app_err = match failure {
            StoreFailure::ForeignKey => Self::bad_request(
                "One or more referenced items do not exist. Please verify that all related data \
                 (colours, product types, etc.) exist before creating this record.",
            ),
            StoreFailure::Unique => Self::bad_request(
                "A record with this information already exists. Please use unique values.",
            ),
            StoreFailure::NotNull => Self::bad_request(
                "Required field is missing. Please provide all required information.",
            ),
            StoreFailure::Constraint => {
                Self::bad_request("Data validation failed. Please check your input and try again.")
            }
            StoreFailure::Database => {
                Self::internal("A database error occurred while processing your request.")
            }
            StoreFailure::Unexpected => {
                Self::internal("An unexpected error occurred. Please try again later.")
            }
        };

        if failure.is_constraint() {
            tracing::debug!(error = %err, kind = ?failure, "store constraint violated");
        } else {
            tracing::error!(error = ?err, kind = ?failure, "request failed");
        }
        app_err.with_details(format!("{err:#}"))
    }

    fn into_body(self, expose_details: bool) -> ErrorResponse {
        ErrorResponse {
            message: self.message,
            status_code: self.status.as_u16(),
            details: self.details.filter(|_| expose_details),
            field_errors: self.field_errors,
            trace_id: Some(uuid::Uuid::new_v4().to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status;
        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), message = %self.message, "request rejected");
        }
        let body = self.into_body(details_exposed());
        (status, Json(body)).into_response()
    }
}

impl From<CreateColourError> for AppError {
    fn from(err: CreateColourError) -> Self {
        match err {
            CreateColourError::InvalidArgument(msg) => Self::bad_request(msg),
            CreateColourError::Internal(e) => Self::from_store(e),
        }
    }
}

impl From<CreateProductTypeError> for AppError {
    fn from(err: CreateProductTypeError) -> Self {
        match err {
            CreateProductTypeError::InvalidArgument(msg) => Self::bad_request(msg),
            CreateProductTypeError::Internal(e) => Self::from_store(e),
        }
    }
}

impl From<CreateProductError> for AppError {
    fn from(err: CreateProductError) -> Self {
        match err {
            CreateProductError::BadRequest(msg) => Self::bad_request(msg),
            CreateProductError::Internal(e) => Self::from_store(e),
        }
    }
}

impl From<ListColoursError> for AppError {
    fn from(err: ListColoursError) -> Self {
        let ListColoursError::Internal(e) = err;
        Self::from_store(e)
    }
}

impl From<ListProductTypesError> for AppError {
    fn from(err: ListProductTypesError) -> Self {
        let ListProductTypesError::Internal(e) = err;
        Self::from_store(e)
    }
}

impl From<ListProductsError> for AppError {
    fn from(err: ListProductsError) -> Self {
        let ListProductsError::Internal(e) = err;
        Self::from_store(e)
    }
}

impl From<GetProductError> for AppError {
    fn from(err: GetProductError) -> Self {
        let GetProductError::Internal(e) = err;
        Self::from_store(e)
    }
}

/// `colour_ids` -> `colourIds`
fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
