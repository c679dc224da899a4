//! Payment models.

use bigdecimal::BigDecimal;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::filter::Searchable;

/// Channel a payment was made through.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    /// Debit or credit card.
    Card,
    /// Manual bank transfer.
    BankTransfer,
    /// Cash at the front desk.
    #[default]
    Cash,
    /// Platform wallet balance.
    Wallet,
}

/// Lifecycle status of a payment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting confirmation.
    #[default]
    Pending,
    /// Confirmed by the provider or an administrator.
    Confirmed,
    /// Rejected or expired.
    Failed,
    /// Confirmed and later returned.
    Refunded,
}

impl PaymentStatus {
    /// Returns whether the payment counts toward the order total.
    #[inline]
    pub fn is_collected(self) -> bool {
        matches!(self, PaymentStatus::Confirmed)
    }

    /// Returns whether an administrator may still change the status.
    #[inline]
    pub fn is_final(self) -> bool {
        matches!(self, PaymentStatus::Failed | PaymentStatus::Refunded)
    }
}

/// Payment recorded against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment identifier
    pub id: i64,
    /// Order the payment settles
    pub order_id: i64,
    /// Public payment reference
    pub reference: String,
    /// Channel the payment came through
    #[serde(default)]
    pub method: PaymentMethod,
    /// Current lifecycle status
    #[serde(default)]
    pub status: PaymentStatus,
    /// Paid amount
    pub amount: BigDecimal,
    /// Time the payment was confirmed
    pub paid_at: Option<Timestamp>,
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.reference.as_str()]
    }
}
