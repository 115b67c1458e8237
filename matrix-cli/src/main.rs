use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

mod app;
mod config;
mod logging;
mod settings_cmd;
mod state;
mod store;
mod tasks_cmd;

use app::App;
use config::Config;
use settings_cmd::SettingsCommand;
use store::FileStore;
use tasks_cmd::{DetailArgs, ScoreArgs};

#[derive(Parser, Debug)]
#[command(
    name = "priority-matrix",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MATRIX_BUILD_SHA"), ")"),
    about = "Score tasks by impact and urgency to decide what deserves focus"
)]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<String>,

    /// Data directory (default: $PRIORITY_MATRIX_HOME or ~/.priority-matrix)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task
    Add {
        #[arg(long)]
        title: String,

        #[command(flatten)]
        details: DetailArgs,

        #[command(flatten)]
        scores: ScoreArgs,
    },

    /// Edit a task; unset flags keep their current values
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        details: DetailArgs,

        #[command(flatten)]
        scores: ScoreArgs,

        /// Go back to scoring deadline proximity from the due date
        #[arg(long, default_value_t = false)]
        derive_deadline: bool,
    },

    /// Show the board, grouped by quadrant
    List {
        /// Only tasks whose title or notes contain this text
        #[arg(long)]
        search: Option<String>,

        /// Only Do Now tasks
        #[arg(long, default_value_t = false)]
        today_focus: bool,

        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show one task with its score breakdown
    Show { id: String },

    /// Archive a task (it stays in storage but leaves the board)
    Complete { id: String },

    /// Delete a task permanently
    Delete { id: String },

    /// Add the sample tasks (skips ones already present)
    Samples,

    /// Classification thresholds
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// Config file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,
    /// Print the effective config and data paths
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let home = state::resolve_home(cli.home)?;
    let cfg = config::load_config(&home)?;
    logging::init(&cfg.logging.level);
    debug!(home = %home.display(), "starting");

    let today = cli.today.as_deref();

    match cli.command {
        Command::Add {
            title,
            details,
            scores,
        } => tasks_cmd::add(&mut open_app(&home, &cfg, today)?, title, details, scores)?,

        Command::Edit {
            id,
            title,
            details,
            scores,
            derive_deadline,
        } => tasks_cmd::edit(
            &mut open_app(&home, &cfg, today)?,
            &id,
            title,
            details,
            scores,
            derive_deadline,
        )?,

        Command::List {
            search,
            today_focus,
            json,
        } => tasks_cmd::list(&open_app(&home, &cfg, today)?, search, today_focus, json)?,

        Command::Show { id } => tasks_cmd::show(&open_app(&home, &cfg, today)?, &id)?,

        Command::Complete { id } => tasks_cmd::complete(&mut open_app(&home, &cfg, today)?, &id)?,

        Command::Delete { id } => tasks_cmd::delete(&mut open_app(&home, &cfg, today)?, &id)?,

        Command::Samples => tasks_cmd::samples(&mut open_app(&home, &cfg, today)?)?,

        Command::Settings { command } => {
            settings_cmd::run(command, &mut FileStore::new(&home))?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(&home)?,
            ConfigCommand::Show => {
                let s = toml::to_string_pretty(&cfg).context("serialize config")?;
                println!("# {}", state::config_path(&home).display());
                println!("{}", s.trim_end());
                println!("\n# data: {}", FileStore::new(&home).dir().display());
            }
        },
    }

    Ok(())
}

fn open_app(home: &Path, cfg: &Config, today: Option<&str>) -> Result<App<FileStore>> {
    let app = App::new(FileStore::new(home), cfg, today)?;
    debug!(today = %app.today, "resolved today");
    Ok(app)
}
