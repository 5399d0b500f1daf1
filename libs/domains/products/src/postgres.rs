use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product},
    query::ProductQuery,
    repository::{ProductRepository, check_required},
};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Maps a unique-index violation on `name` to `DuplicateName`.
fn map_write_err(err: DbErr, name: &str) -> ProductError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ProductError::DuplicateName(name.to_string()),
        _ => {
            tracing::error!(error = %err, "Failed to write product");
            ProductError::from(err)
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        check_required(&input.name, &input.description)?;

        let name = input.name.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, &name))?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        check_required(&product.name, &product.description)?;

        let id = product.id;
        let name = product.name.clone();
        let active_model: entity::ActiveModel = product.into();

        let model = active_model
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ProductError::NotFound(id),
                other => map_write_err(other, &name),
            })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_all_matching(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        tracing::debug!(?query, "Listing products");

        let models = entity::Entity::find()
            .filter(query.into_condition())
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
