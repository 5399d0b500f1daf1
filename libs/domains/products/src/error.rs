use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Product not found by name: {0}")]
    NameNotFound(String),

    #[error("Product with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::NameNotFound(name) => {
                AppError::NotFound(format!("Product with name '{}' not found", name))
            }
            ProductError::DuplicateName(name) => {
                AppError::Conflict(format!("Product with name '{}' already exists", name))
            }
            ProductError::Validation(msg) => AppError::UnprocessableEntity(msg),
            ProductError::Database(msg) | ProductError::Internal(msg) => {
                AppError::InternalServerError(msg)
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}
