//! Book catalog commands.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bigdecimal::BigDecimal;
use clap::{Args, Subcommand};
use studia_admin::AdminClient;
use studia_admin::debounce::Debouncer;
use studia_admin::filter::ListFilter;
use studia_admin::model::{NewBook, UpdateBook};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use super::ListArgs;
use crate::output;

/// Book catalog operations.
#[derive(Debug, Subcommand)]
pub enum BookCommand {
    /// List books.
    List(ListArgs),
    /// Show a single book.
    Get {
        /// Book identifier.
        id: i64,
    },
    /// Add a book to the catalog.
    Create(CreateArgs),
    /// Update a book. Omitted flags leave fields unchanged.
    Update {
        /// Book identifier.
        id: i64,

        #[clap(flatten)]
        changes: UpdateArgs,
    },
    /// Remove a book from the catalog.
    Delete {
        /// Book identifier.
        id: i64,
    },
    /// Upload a cover image.
    Cover {
        /// Book identifier.
        id: i64,

        /// Path of the image file (png, jpeg or webp).
        path: PathBuf,
    },
    /// Search the catalog interactively, one query per stdin line.
    Search,
}

/// Fields for a new book.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Title of the book.
    #[arg(long)]
    pub title: String,

    /// Author record to link.
    #[arg(long)]
    pub author_id: Option<i64>,

    /// Category record to link.
    #[arg(long)]
    pub category_id: Option<i64>,

    /// Unit price, for example "25.50".
    #[arg(long)]
    pub price: BigDecimal,

    /// Initial stock level.
    #[arg(long, default_value_t = 0)]
    pub stock: i32,

    /// Back-cover description.
    #[arg(long)]
    pub description: Option<String>,
}

/// Changed fields for an existing book.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// New title.
    #[arg(long)]
    pub title: Option<String>,

    /// New author record.
    #[arg(long)]
    pub author_id: Option<i64>,

    /// New category record.
    #[arg(long)]
    pub category_id: Option<i64>,

    /// New unit price.
    #[arg(long)]
    pub price: Option<BigDecimal>,

    /// New stock level.
    #[arg(long)]
    pub stock: Option<i32>,

    /// New description.
    #[arg(long)]
    pub description: Option<String>,
}

/// Dispatches a book command.
pub async fn run(client: &AdminClient, command: BookCommand) -> anyhow::Result<()> {
    let books = client.books();

    match command {
        BookCommand::List(args) => output::render_page(books.list().await, &args.filter()),
        BookCommand::Get { id } => output::render(books.get(id).await),
        BookCommand::Create(args) => {
            let draft = NewBook {
                title: args.title,
                author_id: args.author_id,
                category_id: args.category_id,
                price: args.price,
                stock: args.stock,
                description: args.description,
            };
            output::render(books.create(&draft).await)
        }
        BookCommand::Update { id, changes } => {
            let changes = UpdateBook {
                title: changes.title,
                author_id: changes.author_id,
                category_id: changes.category_id,
                price: changes.price,
                stock: changes.stock,
                description: changes.description,
            };
            output::render(books.update(id, &changes).await)
        }
        BookCommand::Delete { id } => output::render(books.delete(id).await),
        BookCommand::Cover { id, path } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(OsStr::to_str)
                .context("cover path has no file name")?;

            let response = books
                .upload_cover(id, file_name, mime_type(&path), bytes)
                .await;
            output::render(response)
        }
        BookCommand::Search => search(client).await,
    }
}

/// Guesses the MIME type from the file extension.
fn mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(OsStr::to_str) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Reads search queries from stdin, fetching once the input settles.
///
/// Every line schedules a lookup behind a shared debouncer; queries
/// superseded within the delay window never reach the server.
async fn search(client: &AdminClient) -> anyhow::Result<()> {
    let debouncer = Debouncer::default();
    let mut tasks = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let query = line.trim().to_owned();
        if query.is_empty() {
            continue;
        }

        let debouncer = debouncer.clone();
        let books = client.books();
        tasks.spawn(async move {
            if !debouncer.ready().await {
                return;
            }

            let response = books.list().await;
            let Some(catalog) = response.data else {
                eprintln!("{}", response.message);
                return;
            };

            let page = ListFilter::new().with_search(query.as_str()).apply(catalog);
            println!("# {query}: {} of {} match", page.items.len(), page.total);
            for book in &page.items {
                println!("{}\t{}\t{}", book.id, book.title, book.price);
            }
        });
    }

    while tasks.join_next().await.is_some() {}

    Ok(())
}
