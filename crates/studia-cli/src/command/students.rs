//! Student record commands.

use clap::{Args, Subcommand};
use studia_admin::AdminClient;
use studia_admin::model::{NewStudent, UpdateStudent};

use super::ListArgs;
use crate::output;

/// Student operations.
#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// List students.
    List(ListArgs),
    /// Show a single student.
    Get {
        /// Student identifier.
        id: i64,
    },
    /// Register a student.
    Create(CreateArgs),
    /// Update a student. Omitted flags leave fields unchanged.
    Update {
        /// Student identifier.
        id: i64,

        #[clap(flatten)]
        changes: UpdateArgs,
    },
    /// Remove a student.
    Delete {
        /// Student identifier.
        id: i64,
    },
}

/// Fields for a new student.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,

    /// Contact email address.
    #[arg(long)]
    pub email: String,

    /// Contact phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Faculty record to link.
    #[arg(long)]
    pub faculty_id: Option<i64>,

    /// Semester record to link.
    #[arg(long)]
    pub semester_id: Option<i64>,
}

/// Changed fields for an existing student.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// New full name.
    #[arg(long)]
    pub name: Option<String>,

    /// New email address.
    #[arg(long)]
    pub email: Option<String>,

    /// New phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// New faculty link.
    #[arg(long)]
    pub faculty_id: Option<i64>,

    /// New semester link.
    #[arg(long)]
    pub semester_id: Option<i64>,
}

/// Dispatches a student command.
pub async fn run(client: &AdminClient, command: StudentCommand) -> anyhow::Result<()> {
    let students = client.students();

    match command {
        StudentCommand::List(args) => output::render_page(students.list().await, &args.filter()),
        StudentCommand::Get { id } => output::render(students.get(id).await),
        StudentCommand::Create(args) => {
            let draft = NewStudent {
                name: args.name,
                email: args.email,
                phone: args.phone,
                faculty_id: args.faculty_id,
                semester_id: args.semester_id,
            };
            output::render(students.create(&draft).await)
        }
        StudentCommand::Update { id, changes } => {
            let changes = UpdateStudent {
                name: changes.name,
                email: changes.email,
                phone: changes.phone,
                faculty_id: changes.faculty_id,
                semester_id: changes.semester_id,
            };
            output::render(students.update(id, &changes).await)
        }
        StudentCommand::Delete { id } => output::render(students.delete(id).await),
    }
}
