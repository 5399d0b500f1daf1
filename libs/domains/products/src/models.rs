use bigdecimal::{BigDecimal, RoundingMode};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Fractional digits kept for every stored price
pub const PRICE_SCALE: i64 = 2;

/// Product category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "category_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[sea_orm(string_value = "AUTOMOTIVE")]
    Automotive,
    #[sea_orm(string_value = "BOOKS")]
    Books,
    #[sea_orm(string_value = "CLOTHING")]
    Clothing,
    #[sea_orm(string_value = "ELECTRONICS")]
    Electronics,
    #[sea_orm(string_value = "FOOD")]
    Food,
    #[sea_orm(string_value = "HEALTH")]
    Health,
    #[sea_orm(string_value = "HOME")]
    Home,
    #[sea_orm(string_value = "SPORT")]
    Sport,
    #[sea_orm(string_value = "TOYS")]
    Toys,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store on creation
    pub id: i64,
    /// Unique across all products
    pub name: String,
    pub description: String,
    pub category: Category,
    pub quantity: i64,
    /// Serialized as a string with two fractional digits, e.g. `"100.00"`
    #[schema(value_type = String, example = "100.00")]
    pub price: BigDecimal,
}

/// Request body for creating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub category: Category,
    pub quantity: i64,
    /// Accepts a JSON string or number; rounded to two fractional digits.
    /// Send amounts beyond `f64` precision as strings.
    #[schema(value_type = String, example = "100.00")]
    pub price: BigDecimal,
}

/// Query-string filters for `GET /products`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Case-insensitive exact match on the product name
    pub name: Option<String>,
    /// Exact match on the category
    pub category: Option<Category>,
}

/// Round half away from zero to [`PRICE_SCALE`] digits and pad to that scale,
/// so `11` becomes `11.00` and `10.005` becomes `10.01`. Magnitude is unbounded.
pub fn normalize_price(price: BigDecimal) -> BigDecimal {
    price.with_scale_round(PRICE_SCALE, RoundingMode::HalfUp)
}

impl Product {
    /// Build the stored representation of `input` under `id`.
    pub fn new(id: i64, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            category: input.category,
            quantity: input.quantity,
            price: normalize_price(input.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_price_pads_and_rounds() {
        assert_eq!(normalize_price(dec("11")).to_string(), "11.00");
        assert_eq!(normalize_price(dec("10.005")).to_string(), "10.01");
        assert_eq!(normalize_price(dec("-10.005")).to_string(), "-10.01");
        assert_eq!(normalize_price(dec("99.994")).to_string(), "99.99");
        assert_eq!(normalize_price(dec("0")).to_string(), "0.00");
    }

    #[test]
    fn test_normalize_price_keeps_scale_for_large_magnitudes() {
        assert_eq!(
            normalize_price(dec("1000000000000000000000000000")).to_string(),
            "1000000000000000000000000000.00"
        );
        assert_eq!(
            normalize_price(dec("1e28")).to_string(),
            "10000000000000000000000000000.00"
        );
        assert_eq!(
            normalize_price(dec("123456789012345678901234567890123456789.995")).to_string(),
            "123456789012345678901234567890123456790.00"
        );
    }

    #[test]
    fn test_create_product_accepts_price_beyond_28_digits() {
        let input: CreateProduct = serde_json::from_str(
            r#"{"name":"a","description":"b","category":"TOYS","quantity":1,"price":"1000000000000000000000000000000.005"}"#,
        )
        .unwrap();

        let product = Product::new(1, input);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "1000000000000000000000000000000.01");
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::Automotive.to_string(), "AUTOMOTIVE");
        assert_eq!(Category::from_str("HEALTH").unwrap(), Category::Health);
        assert!(Category::from_str("health").is_err());

        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"ELECTRONICS\"");
    }

    #[test]
    fn test_product_price_serializes_as_two_digit_string() {
        let product = Product::new(
            1,
            CreateProduct {
                name: "Product 001".to_string(),
                description: "Description 001".to_string(),
                category: Category::Automotive,
                quantity: 10,
                price: dec("100"),
            },
        );

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "100.00");
        assert_eq!(json["category"], "AUTOMOTIVE");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_create_product_accepts_numeric_and_string_price() {
        let numeric: CreateProduct = serde_json::from_str(
            r#"{"name":"a","description":"b","category":"TOYS","quantity":1,"price":12.5}"#,
        )
        .unwrap();
        let string: CreateProduct = serde_json::from_str(
            r#"{"name":"a","description":"b","category":"TOYS","quantity":1,"price":"12.5"}"#,
        )
        .unwrap();

        assert_eq!(normalize_price(numeric.price.clone()), dec("12.50"));
        assert_eq!(numeric.price, string.price);
    }

    #[test]
    fn test_create_product_validation() {
        let input = CreateProduct {
            name: String::new(),
            description: String::new(),
            category: Category::Sport,
            quantity: 10,
            price: dec("11"),
        };

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
    }
}
