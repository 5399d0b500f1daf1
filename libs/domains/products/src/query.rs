//! Query-by-example filter shared by both repository implementations.

use crate::entity;
use crate::models::{Category, Product};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition};

/// Conjunction of optional field constraints; unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    name: Option<String>,
    category: Option<Category>,
}

impl ProductQuery {
    /// Build a filter from example values. An empty `name` counts as unset.
    pub fn from_example(name: Option<String>, category: Option<Category>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            category,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none()
    }

    /// In-process predicate with the same semantics as [`Self::into_condition`].
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if product.name.to_lowercase() != name.to_lowercase() {
                return false;
            }
        }

        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }

        true
    }

    /// SQL rendering: `LOWER(name) = LOWER($1) AND category = $2`.
    pub fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = self.name {
            condition = condition.add(Expr::cust_with_values(
                r#"LOWER("name") = LOWER($1)"#,
                [name],
            ));
        }

        if let Some(category) = self.category {
            condition = condition.add(entity::Column::Category.eq(category));
        }

        condition
    }
}
