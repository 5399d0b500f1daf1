//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: migrated PostgreSQL container, dropped with the value (feature: "postgres")
//! - `TestDataBuilder`: deterministic, collision-free test data
//! - `assertions`: small assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.name("product", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Test data derived from a seed, so reruns produce identical values
/// while different tests never collide on unique columns.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name; the usual way to build one.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique name such as `test-product-12345-main`.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

pub mod assertions {
    /// Unwrap `value`, failing with `context` when it is `None`.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `items` holds exactly the `expected` names, in order.
    pub fn assert_names<T>(items: &[T], name: impl Fn(&T) -> &str, expected: &[&str]) {
        let actual: Vec<&str> = items.iter().map(name).collect();
        assert_eq!(actual, expected, "unexpected names");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(
            builder1.name("product", "test"),
            builder2.name("product", "test")
        );
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.name("product", "a"), builder2.name("product", "a"));
    }

    #[test]
    fn test_assert_names_in_order() {
        let items = vec![("Desk", 1), ("Lamp", 2)];
        assertions::assert_names(&items, |item| item.0, &["Desk", "Lamp"]);
    }
}
