use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, CreateProduct, Product};
use crate::query::ProductQuery;
use crate::repository::ProductRepository;

/// Service layer for Product operations
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and persist a new product
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get(&self, id: i64) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    pub async fn get_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        self.repository.get_by_name(name).await
    }

    /// Products matching every given field; no filters lists everything
    pub async fn list(
        &self,
        name: Option<String>,
        category: Option<Category>,
    ) -> ProductResult<Vec<Product>> {
        let query = ProductQuery::from_example(name, category);
        self.repository.find_all_matching(query).await
    }

    /// Delete a product
    pub async fn remove(&self, id: i64) -> ProductResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
