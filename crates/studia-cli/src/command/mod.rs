//! Admin console commands.

mod auth;
mod books;
mod discussions;
mod master;
mod orders;
mod payments;
mod students;

use clap::{Args, Subcommand};
use studia_admin::AdminClient;
use studia_admin::filter::{DEFAULT_PAGE_SIZE, ListFilter};

/// The operation to perform against the admin API.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and persist the session token.
    Login(auth::LoginArgs),
    /// Sign out and clear persisted credentials.
    Logout,
    /// Show the signed-in administrator.
    Whoami,
    /// Manage the book catalog.
    #[command(subcommand)]
    Books(books::BookCommand),
    /// Manage tutored discussions.
    #[command(subcommand)]
    Discussions(discussions::DiscussionCommand),
    /// Inspect orders and move them through their lifecycle.
    #[command(subcommand)]
    Orders(orders::OrderCommand),
    /// Inspect payments and confirm or refund them.
    #[command(subcommand)]
    Payments(payments::PaymentCommand),
    /// Manage student records.
    #[command(subcommand)]
    Students(students::StudentCommand),
    /// Manage master data (faculties, subjects, venues and the rest).
    Master(master::MasterArgs),
}

impl Command {
    /// Dispatches the parsed command against the API.
    pub async fn run(self, client: &AdminClient) -> anyhow::Result<()> {
        match self {
            Self::Login(args) => auth::login(client, args).await,
            Self::Logout => auth::logout(client).await,
            Self::Whoami => auth::whoami(client),
            Self::Books(command) => books::run(client, command).await,
            Self::Discussions(command) => discussions::run(client, command).await,
            Self::Orders(command) => orders::run(client, command).await,
            Self::Payments(command) => payments::run(client, command).await,
            Self::Students(command) => students::run(client, command).await,
            Self::Master(args) => master::run(client, args).await,
        }
    }
}

/// Pagination and search flags shared by the list commands.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Case-insensitive needle matched against the record's text fields.
    #[arg(long)]
    pub search: Option<String>,

    /// Page number, starting at 1.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Records per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub per_page: usize,
}

impl ListArgs {
    /// Converts the flags into a list filter.
    pub fn filter(&self) -> ListFilter {
        let filter = ListFilter::new()
            .with_page(self.page)
            .with_per_page(self.per_page);

        match &self.search {
            Some(search) => filter.with_search(search.as_str()),
            None => filter,
        }
    }
}
