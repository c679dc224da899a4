//! Master data commands.
//!
//! All ten lookup collections share one command surface; the collection
//! is picked by the leading `resource` argument.

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use studia_admin::AdminClient;
use studia_admin::filter::Searchable;
use studia_admin::model::{
    Author, Category, Department, Faculty, NewAuthor, NewCategory, NewDepartment, NewFaculty,
    NewSemester, NewSubject, NewSubtopic, NewTopic, NewTutor, NewVenue, Semester, Subject,
    Subtopic, Topic, Tutor, Venue,
};
use studia_admin::service::MasterResource;

use super::ListArgs;
use crate::output;

/// A master data command with its target collection.
#[derive(Debug, Args)]
pub struct MasterArgs {
    /// The collection to operate on.
    #[arg(value_enum)]
    pub resource: ResourceKind,

    #[command(subcommand)]
    pub command: MasterCommand,
}

/// The master data collections.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResourceKind {
    Faculties,
    Departments,
    Semesters,
    Subjects,
    Topics,
    Subtopics,
    Tutors,
    Venues,
    Authors,
    Categories,
}

/// Operations shared by every master data collection.
#[derive(Debug, Subcommand)]
pub enum MasterCommand {
    /// List records.
    List(ListArgs),
    /// Show a single record.
    Get {
        /// Record identifier.
        id: i64,
    },
    /// Create a record.
    Create(DraftArgs),
    /// Update a record.
    Update {
        /// Record identifier.
        id: i64,

        #[clap(flatten)]
        draft: DraftArgs,
    },
    /// Remove a record.
    Delete {
        /// Record identifier.
        id: i64,
    },
}

/// Fields for a master data record.
///
/// Only `--name` applies to every collection; the remaining flags are
/// read where the collection calls for them.
#[derive(Debug, Args)]
pub struct DraftArgs {
    /// Display name of the record.
    #[arg(long)]
    pub name: String,

    /// Parent record id, for the nested collections
    /// (department → faculty, subject → department, topic → subject,
    /// subtopic → topic).
    #[arg(long)]
    pub parent_id: Option<i64>,

    /// Contact email address (tutors).
    #[arg(long)]
    pub email: Option<String>,

    /// Street address (venues).
    #[arg(long)]
    pub address: Option<String>,

    /// Seating capacity (venues).
    #[arg(long)]
    pub capacity: Option<i32>,
}

impl DraftArgs {
    /// Returns the parent id or names the missing flag.
    fn parent_for(&self, collection: &str) -> anyhow::Result<i64> {
        self.parent_id
            .with_context(|| format!("--parent-id is required for {collection}"))
    }
}

/// Builds a collection's draft from the shared flag set.
trait FromDraftArgs: MasterResource {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft>;
}

impl FromDraftArgs for Faculty {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewFaculty {
            name: args.name.clone(),
        })
    }
}

impl FromDraftArgs for Department {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewDepartment {
            name: args.name.clone(),
            faculty_id: args.parent_for("departments")?,
        })
    }
}

impl FromDraftArgs for Semester {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewSemester {
            name: args.name.clone(),
        })
    }
}

impl FromDraftArgs for Subject {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewSubject {
            name: args.name.clone(),
            department_id: args.parent_for("subjects")?,
        })
    }
}

impl FromDraftArgs for Topic {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewTopic {
            name: args.name.clone(),
            subject_id: args.parent_for("topics")?,
        })
    }
}

impl FromDraftArgs for Subtopic {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewSubtopic {
            name: args.name.clone(),
            topic_id: args.parent_for("subtopics")?,
        })
    }
}

impl FromDraftArgs for Tutor {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewTutor {
            name: args.name.clone(),
            email: args.email.clone(),
        })
    }
}

impl FromDraftArgs for Venue {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewVenue {
            name: args.name.clone(),
            address: args.address.clone(),
            capacity: args.capacity,
        })
    }
}

impl FromDraftArgs for Author {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewAuthor {
            name: args.name.clone(),
        })
    }
}

impl FromDraftArgs for Category {
    fn draft(args: &DraftArgs) -> anyhow::Result<Self::Draft> {
        Ok(NewCategory {
            name: args.name.clone(),
        })
    }
}

/// Dispatches a master data command to its typed service.
pub async fn run(client: &AdminClient, args: MasterArgs) -> anyhow::Result<()> {
    match args.resource {
        ResourceKind::Faculties => dispatch::<Faculty>(client, args.command).await,
        ResourceKind::Departments => dispatch::<Department>(client, args.command).await,
        ResourceKind::Semesters => dispatch::<Semester>(client, args.command).await,
        ResourceKind::Subjects => dispatch::<Subject>(client, args.command).await,
        ResourceKind::Topics => dispatch::<Topic>(client, args.command).await,
        ResourceKind::Subtopics => dispatch::<Subtopic>(client, args.command).await,
        ResourceKind::Tutors => dispatch::<Tutor>(client, args.command).await,
        ResourceKind::Venues => dispatch::<Venue>(client, args.command).await,
        ResourceKind::Authors => dispatch::<Author>(client, args.command).await,
        ResourceKind::Categories => dispatch::<Category>(client, args.command).await,
    }
}

async fn dispatch<R>(client: &AdminClient, command: MasterCommand) -> anyhow::Result<()>
where
    R: FromDraftArgs + Searchable,
{
    let service = client.master::<R>();

    match command {
        MasterCommand::List(args) => output::render_page(service.list().await, &args.filter()),
        MasterCommand::Get { id } => output::render(service.get(id).await),
        MasterCommand::Create(args) => output::render(service.create(&R::draft(&args)?).await),
        MasterCommand::Update { id, draft } => {
            output::render(service.update(id, &R::draft(&draft)?).await)
        }
        MasterCommand::Delete { id } => output::render(service.delete(id).await),
    }
}
