//! Integer path identifier extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extracts a single `i64` path parameter such as `/products/{id}`.
///
/// Anything that is not a base-10 integer is rejected with `400 INVALID_ID`.
///
/// ```ignore
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product {id}")
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse::<i64>().map(IdPath).map_err(|_| {
            AppError::InvalidId(format!("Invalid identifier '{raw}': expected an integer"))
        })
    }
}
