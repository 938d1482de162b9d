mod commands;
pub mod error;
mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::StoreConfig;
use crate::db::{Id, SqliteDatabase};
use error::CliResult;

#[derive(Parser)]
#[command(name = "todolists")]
#[command(author, version, about = "Todo list store administration", long_about = None)]
pub struct Cli {
    /// Database file path (default: TODOLISTS_DB env or ~/.local/share/todolists/todolists.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema
    Init,
    /// Register a user
    AddUser { username: String, password: String },
    /// Check a user's credentials
    Login { username: String, password: String },
    /// List a user's todo lists
    Lists {
        #[arg(short, long)]
        user: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List the todos of a todo list
    Todos {
        #[arg(short, long)]
        user: String,
        list_id: Id,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a todo list
    CreateList {
        #[arg(short, long)]
        user: String,
        title: String,
    },
    /// Rename a todo list
    RenameList {
        #[arg(short, long)]
        user: String,
        list_id: Id,
        title: String,
    },
    /// Delete a todo list and its todos
    DeleteList {
        #[arg(short, long)]
        user: String,
        list_id: Id,
    },
    /// Mark every todo of a list done
    CompleteList {
        #[arg(short, long)]
        user: String,
        list_id: Id,
    },
    /// Add a todo to a list
    AddTodo {
        #[arg(short, long)]
        user: String,
        list_id: Id,
        title: String,
    },
    /// Toggle a todo's done flag
    Toggle {
        #[arg(short, long)]
        user: String,
        list_id: Id,
        todo_id: Id,
    },
    /// Delete a todo
    DeleteTodo {
        #[arg(short, long)]
        user: String,
        list_id: Id,
        todo_id: Id,
    },
}

/// Initialize tracing subscriber with env filter, logging to stderr
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolists=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Connect to the configured database file and apply the schema.
///
/// The schema script is idempotent, so every command can run against a fresh file.
pub async fn open_database(config: &StoreConfig) -> CliResult<SqliteDatabase> {
    if let Some(parent) = config.database_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::connect(config).await?;
    db.init_schema().await?;
    Ok(db)
}

pub async fn run() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = StoreConfig::from_env()?;
    if let Some(path) = cli.db {
        config.database_path = path;
    }
    let db = open_database(&config).await?;

    let output = match cli.command {
        Commands::Init => format!("Schema ready at {}", config.database_path.display()),
        Commands::AddUser { username, password } => {
            commands::user::add_user(&db, &username, &password).await?
        }
        Commands::Login { username, password } => {
            commands::user::login(&db, &username, &password).await?
        }
        Commands::Lists { user, format } => {
            commands::todo_list::list_todo_lists(&db.todo_store(user), &format).await?
        }
        Commands::Todos {
            user,
            list_id,
            format,
        } => commands::todo::list_todos(&db.todo_store(user), list_id, &format).await?,
        Commands::CreateList { user, title } => {
            commands::todo_list::create_todo_list(&mut db.todo_store(user), &title).await?
        }
        Commands::RenameList {
            user,
            list_id,
            title,
        } => {
            commands::todo_list::rename_todo_list(&mut db.todo_store(user), list_id, &title)
                .await?
        }
        Commands::DeleteList { user, list_id } => {
            commands::todo_list::delete_todo_list(&mut db.todo_store(user), list_id).await?
        }
        Commands::CompleteList { user, list_id } => {
            commands::todo_list::complete_todo_list(&mut db.todo_store(user), list_id).await?
        }
        Commands::AddTodo {
            user,
            list_id,
            title,
        } => commands::todo::add_todo(&mut db.todo_store(user), list_id, &title).await?,
        Commands::Toggle {
            user,
            list_id,
            todo_id,
        } => commands::todo::toggle_todo(&mut db.todo_store(user), list_id, todo_id).await?,
        Commands::DeleteTodo {
            user,
            list_id,
            todo_id,
        } => commands::todo::delete_todo(&mut db.todo_store(user), list_id, todo_id).await?,
    };

    println!("{}", output);
    Ok(())
}
