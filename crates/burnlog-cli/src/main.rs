mod cmd_backup;
mod cmd_burndowns;
mod cmd_get;
mod cmd_set;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use burnlog_trello::{Settings, TrelloClient};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "burnlog",
    version,
    about = "Burndown snapshots and backups for Trello boards"
)]
struct Cli {
    /// Settings file with developer_public_key and member_token (default: ~/.burnlogrc)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// More log output on stderr (-v info, -vv debug). BURNLOG_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record today's burndown snapshot for every board in a board list
    Burndowns {
        /// YAML file mapping group names to board-id and output-directory
        #[arg(long)]
        board_list: PathBuf,
        /// Base directory for relative output directories
        #[arg(long, default_value = ".")]
        output: PathBuf,
        /// Points counted for cards without a "(N) " title prefix
        #[arg(long, default_value_t = burnlog_core::points::DEFAULT_POINTS)]
        default_points: u32,
    },
    /// Read board data
    Get {
        #[command(subcommand)]
        cmd: GetCmd,
    },
    /// Write board data
    Set {
        #[command(subcommand)]
        cmd: SetCmd,
    },
    /// Back up and restore whole boards
    Backup {
        #[command(subcommand)]
        cmd: BackupCmd,
    },
}

#[derive(Subcommand)]
enum GetCmd {
    /// Print the names of the open lists
    Lists {
        #[arg(long)]
        board_id: String,
    },
    /// Print card titles, grouped by list
    Cards {
        #[arg(long)]
        board_id: String,
    },
    /// Print checklist names
    Checklists {
        #[arg(long)]
        board_id: String,
    },
    /// Print a card's description
    Description {
        #[arg(long)]
        card_id: String,
    },
    /// GET an API path and print the JSON response
    Raw {
        /// Path below the API base, e.g. "boards/<id>/lists?filter=open"
        path: String,
    },
}

#[derive(Subcommand)]
enum SetCmd {
    /// Replace a card's description with text read from stdin
    Description {
        #[arg(long)]
        card_id: String,
    },
}

#[derive(Subcommand)]
enum BackupCmd {
    /// Fetch a board and store it locally
    Create {
        #[arg(long)]
        board_id: String,
    },
    /// List boards with a stored backup
    List,
    /// Print a stored backup as a tree
    Show {
        #[arg(long)]
        board_id: String,
        /// Include card descriptions
        #[arg(long)]
        show_descriptions: bool,
    },
    /// Recreate a stored backup's lists, cards and checklists on another board
    Restore {
        /// Board whose backup to replay
        #[arg(long)]
        board_id: String,
        /// Existing board to create everything on
        #[arg(long)]
        target: String,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("BURNLOG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build a client from the settings file and environment.
pub(crate) fn connect(config: Option<&Path>) -> anyhow::Result<TrelloClient> {
    let settings = Settings::load(config)?;
    Ok(TrelloClient::new(settings)?)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.config.as_deref();

    match cli.cmd {
        Command::Burndowns {
            board_list,
            output,
            default_points,
        } => cmd_burndowns::execute(config, &board_list, &output, default_points),
        Command::Get { cmd } => {
            match cmd {
                GetCmd::Lists { board_id } => cmd_get::lists(config, &board_id),
                GetCmd::Cards { board_id } => cmd_get::cards(config, &board_id),
                GetCmd::Checklists { board_id } => cmd_get::checklists(config, &board_id),
                GetCmd::Description { card_id } => cmd_get::description(config, &card_id),
                GetCmd::Raw { path } => cmd_get::raw(config, &path),
            }?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Set { cmd } => {
            match cmd {
                SetCmd::Description { card_id } => cmd_set::description(config, &card_id),
            }?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Backup { cmd } => {
            let paths = burnlog_store::StorePaths::discover(burnlog_store::store_root());
            match cmd {
                BackupCmd::Create { board_id } => cmd_backup::create(config, &paths, &board_id),
                BackupCmd::List => cmd_backup::list(&paths),
                BackupCmd::Show {
                    board_id,
                    show_descriptions,
                } => cmd_backup::show(&paths, &board_id, show_descriptions),
                BackupCmd::Restore { board_id, target } => {
                    cmd_backup::restore(config, &paths, &board_id, &target)
                }
            }?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
