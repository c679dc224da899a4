//! Order commands.

use clap::Subcommand;
use studia_admin::AdminClient;
use studia_admin::model::OrderStatus;

use super::ListArgs;
use crate::output;

/// Order operations.
#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// List orders.
    List(ListArgs),
    /// Show a single order with its line items.
    Get {
        /// Order identifier.
        id: i64,
    },
    /// Move an order to a new status.
    SetStatus {
        /// Order identifier.
        id: i64,

        /// Target status (pending, paid, cancelled, refunded).
        status: OrderStatus,
    },
}

/// Dispatches an order command.
pub async fn run(client: &AdminClient, command: OrderCommand) -> anyhow::Result<()> {
    let orders = client.orders();

    match command {
        OrderCommand::List(args) => output::render_page(orders.list().await, &args.filter()),
        OrderCommand::Get { id } => output::render(orders.get(id).await),
        OrderCommand::SetStatus { id, status } => {
            output::render(orders.set_status(id, status).await)
        }
    }
}
