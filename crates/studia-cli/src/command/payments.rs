//! Payment commands.

use clap::Subcommand;
use studia_admin::AdminClient;
use studia_admin::model::PaymentStatus;

use super::ListArgs;
use crate::output;

/// Payment operations.
#[derive(Debug, Subcommand)]
pub enum PaymentCommand {
    /// List payments.
    List(ListArgs),
    /// Show a single payment.
    Get {
        /// Payment identifier.
        id: i64,
    },
    /// Move a payment to a new status.
    SetStatus {
        /// Payment identifier.
        id: i64,

        /// Target status (pending, confirmed, failed, refunded).
        status: PaymentStatus,
    },
}

/// Dispatches a payment command.
pub async fn run(client: &AdminClient, command: PaymentCommand) -> anyhow::Result<()> {
    let payments = client.payments();

    match command {
        PaymentCommand::List(args) => output::render_page(payments.list().await, &args.filter()),
        PaymentCommand::Get { id } => output::render(payments.get(id).await),
        PaymentCommand::SetStatus { id, status } => {
            output::render(payments.set_status(id, status).await)
        }
    }
}
