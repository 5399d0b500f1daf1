use crate::models::{Category, CreateProduct, Product, normalize_price};
use bigdecimal::BigDecimal;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: Category,
    pub quantity: i64,
    #[sea_orm(column_type = "Decimal(None)")]
    pub price: BigDecimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            category: model.category,
            quantity: model.quantity,
            price: normalize_price(model.price),
        }
    }
}

/// Insert model; `id` is left to the sequence.
impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            category: Set(input.category),
            quantity: Set(input.quantity),
            price: Set(normalize_price(input.price)),
        }
    }
}

/// Full-row update keyed by `id`.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            description: Set(product.description),
            category: Set(product.category),
            quantity: Set(product.quantity),
            price: Set(normalize_price(product.price)),
        }
    }
}
