//! Coupon entity.

/// A percentage discount coupon, matched by exact name.
///
/// Read-only for request handlers; the admin CLI creates and removes them.
#[derive(Debug, Clone)]
pub struct Coupon {
    pub id: i64,
    pub name: String,
    /// Discount percentage in the range 0..=100.
    pub discount: f64,
}

/// Input data for creating a coupon (admin CLI only).
#[derive(Debug, Clone)]
pub struct NewCoupon {
    pub name: String,
    pub discount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_creation() {
        let coupon = Coupon {
            id: 1,
            name: "SUMMER20".to_string(),
            discount: 20.0,
        };

        assert_eq!(coupon.name, "SUMMER20");
        assert_eq!(coupon.discount, 20.0);
    }
}
