use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::AppError;

/// JSON body that has passed shape validation. Malformed bodies and rule
/// violations are both rejected with 400 before the handler runs.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request("The request body is not valid JSON for this endpoint.")
                    .with_details(rejection.body_text())
            })?;
        value.validate().map_err(|errors| AppError::validation(&errors))?;
        Ok(Self(value))
    }
}
