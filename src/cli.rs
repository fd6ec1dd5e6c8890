//! CLI definitions and entry point

use anyhow::bail;
use clap::{Args, Parser, Subcommand};

use crate::commands::{self, Owner};
use ghprojects::config::GlobalConfig;
use ghprojects::output::OutputMode;
use ghprojects::{Client, PaginationOptions, Scope};

/// ghprojects - GitHub Projects (V2) from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "ghprojects",
    version,
    about = "GitHub Projects (V2) from the terminal",
    long_about = "List and inspect GitHub Projects (V2), their fields and items.\n\n\
                  Projects belong to an organization (--org) or a user (--user).\n\
                  The token is read from GITHUB_TOKEN or ~/.config/ghprojects/config.toml."
)]
pub struct Cli {
    /// Organization that owns the project
    #[arg(long, global = true, conflicts_with = "user")]
    pub org: Option<String>,

    /// User that owns the project
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or show projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// List or show project fields
    Fields {
        #[command(subcommand)]
        action: FieldAction,
    },

    /// Manage project items
    Items {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Show version
    Version,
}

/// Cursor pagination flags
#[derive(Args, Debug, Default)]
pub struct PageArgs {
    /// Results per page (max 100)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Return results after this cursor
    #[arg(long)]
    pub after: Option<String>,

    /// Return results before this cursor
    #[arg(long)]
    pub before: Option<String>,
}

impl From<PageArgs> for PaginationOptions {
    fn from(args: PageArgs) -> Self {
        Self {
            before: args.before,
            after: args.after,
            per_page: args.per_page,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// List projects
    List {
        /// Free-text filter
        #[arg(short, long)]
        query: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a project
    Get {
        /// Project number
        number: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum FieldAction {
    /// List the fields of a project
    List {
        /// Project number
        number: u64,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one field
    Get {
        /// Project number
        number: u64,

        /// Field ID
        field_id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemAction {
    /// List the items of a project
    List {
        /// Project number
        number: u64,

        /// Free-text filter
        #[arg(short, long)]
        query: Option<String>,

        /// Only return values of these field IDs
        #[arg(long, value_delimiter = ',')]
        fields: Vec<i64>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one item
    Get {
        /// Project number
        number: u64,

        /// Item ID
        item_id: i64,

        /// Only return values of these field IDs
        #[arg(long, value_delimiter = ',')]
        fields: Vec<i64>,
    },

    /// Add an issue or pull request to a project
    Add {
        /// Project number
        number: u64,

        /// Content type: Issue or PullRequest
        #[arg(long = "type", default_value = "Issue")]
        kind: String,

        /// Numeric ID of the issue or pull request
        #[arg(long = "id")]
        content_id: i64,
    },

    /// Archive an item
    Archive {
        /// Project number
        number: u64,

        /// Item ID
        item_id: i64,
    },

    /// Restore an archived item
    Unarchive {
        /// Project number
        number: u64,

        /// Item ID
        item_id: i64,
    },

    /// Remove an item from a project
    Delete {
        /// Project number
        number: u64,

        /// Item ID
        item_id: i64,
    },
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let command = match cli.command {
        Some(Command::Version) => {
            print_version(output_mode);
            return Ok(());
        },
        None => {
            print_version(output_mode);
            if output_mode == OutputMode::Human {
                println!("\nRun 'ghprojects --help' for usage");
            }
            return Ok(());
        },
        Some(Command::Projects { action }) => Request::Projects(action),
        Some(Command::Fields { action }) => Request::Fields(action),
        Some(Command::Items { action }) => Request::Items(action),
    };

    let owner = match (cli.org, cli.user) {
        (Some(org), _) => Owner::new(Scope::Organization, org),
        (None, Some(user)) => Owner::new(Scope::User, user),
        (None, None) => bail!("pass --org <ORG> or --user <USER>"),
    };

    let config = GlobalConfig::load();
    let client = Client::from_config(&config.github)?;
    let projects = client.projects();

    match command {
        Request::Projects(action) => {
            commands::projects(&projects, &owner, action, output_mode).await
        },
        Request::Fields(action) => commands::fields(&projects, &owner, action, output_mode).await,
        Request::Items(action) => commands::items(&projects, &owner, action, output_mode).await,
    }
}

/// Commands that talk to the API
enum Request {
    Projects(ProjectAction),
    Fields(FieldAction),
    Items(ItemAction),
}

fn print_version(output_mode: OutputMode) {
    if output_mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "version": env!("CARGO_PKG_VERSION")
            })
        );
    } else {
        println!("ghprojects v{}", env!("CARGO_PKG_VERSION"));
    }
}
