//! Order endpoints.

use serde_json::json;
use studia_http::{Envelope, HttpClient};

use crate::model::{Order, OrderStatus};
use crate::service::ListPayload;

/// Client for the order endpoints.
///
/// Orders are placed by students through the storefront; the admin side
/// reviews them and moves them through their lifecycle.
#[derive(Debug, Clone)]
pub struct OrderService {
    client: HttpClient,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Lists every order.
    pub async fn list(&self) -> Envelope<Vec<Order>> {
        let response: Envelope<ListPayload<Order>> = self.client.get("/admin/orders").await;
        response.map(ListPayload::into_items)
    }

    /// Fetches a single order with its line items.
    pub async fn get(&self, id: i64) -> Envelope<Order> {
        self.client.get(&format!("/admin/orders/{id}")).await
    }

    /// Moves an order to a new lifecycle status.
    pub async fn set_status(&self, id: i64, status: OrderStatus) -> Envelope<Order> {
        self.client
            .patch(
                &format!("/admin/orders/{id}/status"),
                &json!({ "status": status }),
            )
            .await
    }
}
