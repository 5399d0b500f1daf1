//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has already passed `Validate::validate`.
///
/// Rejections:
/// - malformed JSON: `400`
/// - wrong or missing fields: `422`
/// - missing `Content-Type: application/json`: `415`
/// - failed validation rules: `422 VALIDATION_ERROR` with per-field details
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateProduct>) -> impl IntoResponse {
///     // input.validate() has already succeeded
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
