//! Derived cart aggregates.
//!
//! Nothing here is stored: counts, totals and discount percentages are
//! recomputed from the line items joined against the catalog on every
//! read. Money stays in [`Decimal`] the whole way through.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::str::FromStr;

use crate::entities::product;

/// A cart line hydrated with its product, the shape the storefront
/// renders from.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: i32,
    pub product: product::Model,
    pub quantity: i32,
}

/// Total number of units across all lines.
pub fn cart_count(lines: &[CartLine]) -> i64 {
    lines.iter().map(|line| i64::from(line.quantity)).sum()
}

/// Sum of unit price times quantity. Unparseable prices count as zero,
/// matching the lenient parsing of the original storefront.
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    lines
        .iter()
        .map(|line| {
            let unit = Decimal::from_str(&line.product.price).unwrap_or(Decimal::ZERO);
            unit * Decimal::from(line.quantity)
        })
        .sum()
}

/// Display discount as a whole percentage, rounded half away from zero.
/// Zero when there is no original price or it does not exceed the
/// current price.
pub fn discount_percentage(price: &str, original_price: Option<&str>) -> i32 {
    let Some(original_price) = original_price else {
        return 0;
    };
    let (Ok(price), Ok(original)) = (
        Decimal::from_str(price),
        Decimal::from_str(original_price),
    ) else {
        return 0;
    };
    if original <= price || original.is_zero() {
        return 0;
    }

    let percent = (original - price) / original * Decimal::from(100);
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, price: &str, original_price: Option<&str>) -> product::Model {
        product::Model {
            id,
            name: format!("Product {id}"),
            slug: format!("product-{id}"),
            description: String::new(),
            price: price.to_string(),
            original_price: original_price.map(str::to_string),
            image: String::new(),
            category_id: 1,
            featured: false,
            best_seller: false,
            new_arrival: false,
            in_stock: true,
            rating: None,
            review_count: 0,
        }
    }

    fn line(id: i32, price: &str, quantity: i32) -> CartLine {
        CartLine {
            id,
            product: product(id, price, None),
            quantity,
        }
    }

    #[test]
    fn count_sums_quantities() {
        let lines = vec![line(1, "4.99", 2), line(2, "0.50", 3)];
        assert_eq!(cart_count(&lines), 5);
        assert_eq!(cart_count(&[]), 0);
    }

    #[test]
    fn total_is_price_times_quantity() {
        let lines = vec![line(1, "4.99", 2), line(2, "0.50", 3)];
        assert_eq!(cart_total(&lines), Decimal::from_str("11.48").unwrap());
    }

    #[test]
    fn adding_a_line_raises_the_total_by_exactly_its_value() {
        let mut lines = vec![line(1, "4.99", 2)];
        let before = cart_total(&lines);
        lines.push(line(2, "1.25", 4));
        assert_eq!(
            cart_total(&lines) - before,
            Decimal::from_str("5.00").unwrap()
        );
    }

    #[test]
    fn discount_rounds_to_whole_percent() {
        // (1.99 - 0.50) / 1.99 * 100 = 74.87... -> 75
        assert_eq!(discount_percentage("0.50", Some("1.99")), 75);
        assert_eq!(discount_percentage("27.99", Some("56.67")), 51);
    }

    #[test]
    fn no_discount_without_a_higher_original_price() {
        assert_eq!(discount_percentage("4.99", None), 0);
        assert_eq!(discount_percentage("4.99", Some("4.99")), 0);
        assert_eq!(discount_percentage("4.99", Some("3.99")), 0);
        assert_eq!(discount_percentage("4.99", Some("not-a-price")), 0);
    }
}
