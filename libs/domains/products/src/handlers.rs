use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, CreateProduct, Product, ProductListQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "Products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        get_product_by_name,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, Category),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            UnprocessableEntityResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product).delete(delete_product))
        .route("/name/{name}", get(get_product_by_name))
        .with_state(shared_service)
}

/// List products, optionally filtered by name and category
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProductListQuery),
    responses(
        (status = 200, description = "Matching products ordered by id", body = Vec<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    query: Result<Query<ProductListQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, AppError> {
    let Query(query) = query?;
    let products = service.list(query.name, query.category).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get(id).await?.ok_or(ProductError::NotFound(id))?;
    Ok(Json(product))
}

/// Get a product by its exact name
#[utoipa::path(
    get,
    path = "/name/{name}",
    tag = TAG,
    params(
        ("name" = String, Path, description = "Product name, case-sensitive")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product_by_name<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(name): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service
        .get_by_name(&name)
        .await?
        .ok_or(ProductError::NameNotFound(name))?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<impl IntoResponse> {
    service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
