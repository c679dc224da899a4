//! Payment endpoints.

use serde_json::json;
use studia_http::{Envelope, HttpClient};

use crate::model::{Payment, PaymentStatus};
use crate::service::ListPayload;

/// Client for the payment endpoints.
#[derive(Debug, Clone)]
pub struct PaymentService {
    client: HttpClient,
}

impl PaymentService {
    /// Creates a new payment service.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Lists every payment.
    pub async fn list(&self) -> Envelope<Vec<Payment>> {
        let response: Envelope<ListPayload<Payment>> = self.client.get("/admin/payments").await;
        response.map(ListPayload::into_items)
    }

    /// Fetches a single payment.
    pub async fn get(&self, id: i64) -> Envelope<Payment> {
        self.client.get(&format!("/admin/payments/{id}")).await
    }

    /// Moves a payment to a new lifecycle status.
    pub async fn set_status(&self, id: i64, status: PaymentStatus) -> Envelope<Payment> {
        self.client
            .patch(
                &format!("/admin/payments/{id}/status"),
                &json!({ "status": status }),
            )
            .await
    }
}
