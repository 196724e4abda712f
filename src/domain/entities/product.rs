//! Catalog product entity.

/// A catalog item.
///
/// The catalog itself is externally managed; this service reads prices when
/// snapshotting carts and adjusts `quantity`/`sold` when orders are placed.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub quantity: i32,
    pub sold: i32,
    pub brand: Option<String>,
}

impl Product {
    /// Creates a new Product instance.
    pub fn new(
        id: i64,
        title: String,
        price: f64,
        quantity: i32,
        sold: i32,
        brand: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            price,
            quantity,
            sold,
            brand,
        }
    }
}

/// One entry of a batched stock adjustment: decrement `quantity` and
/// increment `sold` by `count` on the given product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdjustment {
    pub product_id: i64,
    pub count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(7, "Trail Shoe".to_string(), 89.9, 12, 3, None);

        assert_eq!(product.id, 7);
        assert_eq!(product.quantity, 12);
        assert_eq!(product.sold, 3);
        assert!(product.brand.is_none());
    }
}
