//! Book order models.

use bigdecimal::BigDecimal;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::filter::Searchable;

/// Lifecycle status of an order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    /// Placed and awaiting payment.
    #[default]
    Pending,
    /// Paid in full.
    Paid,
    /// Cancelled before payment.
    Cancelled,
    /// Paid and later refunded.
    Refunded,
}

impl OrderStatus {
    /// Returns whether money has changed hands.
    #[inline]
    pub fn is_settled(self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Refunded)
    }

    /// Returns whether the order can still be cancelled.
    #[inline]
    pub fn can_be_cancelled(self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

/// Line item within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Unique line item identifier
    pub id: i64,
    /// Ordered book
    pub book_id: i64,
    /// Book title at purchase time
    pub title: String,
    /// Number of copies
    pub quantity: i32,
    /// Unit price at purchase time
    pub price: BigDecimal,
}

impl OrderItem {
    /// Returns the price of this line.
    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

/// Book order placed by a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier
    pub id: i64,
    /// Public order number
    pub number: String,
    /// Purchasing student
    pub student_id: i64,
    /// Student name shown in listings
    pub student: Option<String>,
    /// Current lifecycle status
    #[serde(default)]
    pub status: OrderStatus,
    /// Ordered lines
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Grand total
    pub total: BigDecimal,
    /// Time the order was placed
    pub created_at: Option<Timestamp>,
}

impl Order {
    /// Returns the sum of the line totals.
    pub fn items_total(&self) -> BigDecimal {
        self.items
            .iter()
            .map(OrderItem::line_total)
            .sum::<BigDecimal>()
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.number.as_str()];
        fields.extend(self.student.as_deref());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_multiplies_quantity() {
        let item = OrderItem {
            id: 1,
            book_id: 9,
            title: "Calculus".to_owned(),
            quantity: 3,
            price: BigDecimal::from(25),
        };

        assert_eq!(item.line_total(), BigDecimal::from(75));
    }

    #[test]
    fn test_status_transitions() {
        assert!(OrderStatus::Pending.can_be_cancelled());
        assert!(!OrderStatus::Paid.can_be_cancelled());
        assert!(OrderStatus::Refunded.is_settled());
        assert!(!OrderStatus::Cancelled.is_settled());
    }
}
