//! Discussion scheduling commands.

use clap::{Args, Subcommand};
use jiff::Timestamp;
use studia_admin::AdminClient;
use studia_admin::model::{DiscussionStatus, NewDiscussion, RecordRef, UpdateDiscussion};

use super::ListArgs;
use crate::output;

/// Discussion operations.
#[derive(Debug, Subcommand)]
pub enum DiscussionCommand {
    /// List discussions.
    List(ListArgs),
    /// Show a single discussion.
    Get {
        /// Discussion identifier.
        id: i64,
    },
    /// Schedule a discussion.
    Create(CreateArgs),
    /// Update a discussion. Omitted flags leave fields unchanged.
    Update {
        /// Discussion identifier.
        id: i64,

        #[clap(flatten)]
        changes: UpdateArgs,
    },
    /// Remove a discussion.
    Delete {
        /// Discussion identifier.
        id: i64,
    },
    /// List students enrolled in a discussion.
    Students {
        /// Discussion identifier.
        id: i64,
    },
}

/// Fields for a new discussion.
///
/// Hierarchy references take either the numeric id of an existing record
/// or a name for one created on the fly.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Title of the discussion.
    #[arg(long)]
    pub title: String,

    /// Faculty reference (id or name).
    #[arg(long, value_parser = record_ref)]
    pub faculty: RecordRef,

    /// Department reference (id or name).
    #[arg(long, value_parser = record_ref)]
    pub department: RecordRef,

    /// Subject reference (id or name).
    #[arg(long, value_parser = record_ref)]
    pub subject: RecordRef,

    /// Topic reference (id or name).
    #[arg(long, value_parser = record_ref)]
    pub topic: Option<RecordRef>,

    /// Subtopic reference (id or name).
    #[arg(long, value_parser = record_ref)]
    pub subtopic: Option<RecordRef>,

    /// Tutor holding the discussion.
    #[arg(long)]
    pub tutor_id: i64,

    /// Venue the discussion is held at.
    #[arg(long)]
    pub venue_id: i64,

    /// Start time, RFC 3339 (for example 2026-09-01T09:00:00Z).
    #[arg(long)]
    pub starts_at: Timestamp,

    /// End time, RFC 3339.
    #[arg(long)]
    pub ends_at: Timestamp,

    /// Maximum number of students.
    #[arg(long)]
    pub capacity: i32,
}

/// Changed fields for an existing discussion.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// New title.
    #[arg(long)]
    pub title: Option<String>,

    /// New lifecycle status (scheduled, ongoing, completed, cancelled).
    #[arg(long)]
    pub status: Option<DiscussionStatus>,

    /// New tutor.
    #[arg(long)]
    pub tutor_id: Option<i64>,

    /// New venue.
    #[arg(long)]
    pub venue_id: Option<i64>,

    /// New start time, RFC 3339.
    #[arg(long)]
    pub starts_at: Option<Timestamp>,

    /// New end time, RFC 3339.
    #[arg(long)]
    pub ends_at: Option<Timestamp>,

    /// New capacity.
    #[arg(long)]
    pub capacity: Option<i32>,
}

/// Parses a record reference from an id or a name.
fn record_ref(value: &str) -> Result<RecordRef, std::convert::Infallible> {
    Ok(match value.parse::<i64>() {
        Ok(id) => RecordRef::existing(id),
        Err(_) => RecordRef::named(value),
    })
}

/// Dispatches a discussion command.
pub async fn run(client: &AdminClient, command: DiscussionCommand) -> anyhow::Result<()> {
    let discussions = client.discussions();

    match command {
        DiscussionCommand::List(args) => {
            output::render_page(discussions.list().await, &args.filter())
        }
        DiscussionCommand::Get { id } => output::render(discussions.get(id).await),
        DiscussionCommand::Create(args) => {
            let draft = NewDiscussion {
                title: args.title,
                faculty: args.faculty,
                department: args.department,
                subject: args.subject,
                topic: args.topic,
                subtopic: args.subtopic,
                tutor_id: args.tutor_id,
                venue_id: args.venue_id,
                starts_at: args.starts_at,
                ends_at: args.ends_at,
                capacity: args.capacity,
            };
            output::render(discussions.create(&draft).await)
        }
        DiscussionCommand::Update { id, changes } => {
            let changes = UpdateDiscussion {
                title: changes.title,
                status: changes.status,
                tutor_id: changes.tutor_id,
                venue_id: changes.venue_id,
                starts_at: changes.starts_at,
                ends_at: changes.ends_at,
                capacity: changes.capacity,
            };
            output::render(discussions.update(id, &changes).await)
        }
        DiscussionCommand::Delete { id } => output::render(discussions.delete(id).await),
        DiscussionCommand::Students { id } => output::render(discussions.students(id).await),
    }
}
