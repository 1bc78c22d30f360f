//! Foldertree CLI - query and relocate organization folder trees
//!
//! Loads a folder fixture into a repository, runs one operation against it
//! and prints the result.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing::debug;

use foldertree_core::config::{Config, ConfigManager};
use foldertree_core::formatting::{format_tree, to_pretty_json};
use foldertree_core::{fixture, Folder, FolderRepository, OrgId};

#[derive(Parser)]
#[command(name = "foldertree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query and relocate path-encoded folder trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON folder fixture (defaults to config setting, then the bundled sample)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all folders, or those of one organization
    List {
        /// Organization id
        #[arg(long)]
        org: Option<OrgId>,
    },

    /// List every descendant of a folder
    Children {
        /// Root folder name
        name: String,

        /// Organization id (defaults to config setting)
        #[arg(long)]
        org: Option<OrgId>,
    },

    /// Move a folder and its subtree below another folder
    Move {
        /// Folder to move
        source: String,

        /// New parent folder
        destination: String,
    },

    /// Show configuration, or update and save it
    Config {
        /// Set the default organization id
        #[arg(long)]
        set_org: Option<OrgId>,

        /// Set the JSON folder fixture to load
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// Set the default log filter
        #[arg(long)]
        set_log_level: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Tree,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("Failed to load configuration")?;
    let config = config_manager.config();

    // --verbose wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "info,foldertree_core=debug"
        } else {
            config.general.log_level.as_str()
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List { org } => {
            let repo = load_repository(cli.data.as_ref(), config)?;
            let folders = match org {
                Some(org) => repo.get_folders_by_org_id(org),
                None => repo.folders(),
            };
            print_folders(&folders, cli.format)?;
        }
        Commands::Children { name, org } => {
            let repo = load_repository(cli.data.as_ref(), config)?;
            let org = org.unwrap_or(config.general.default_org_id);
            let children = repo.get_all_child_folders(org, &name)?;

            eprintln!(
                "{} {} {}",
                style("Child folders of").bold(),
                style(&name).cyan(),
                style(format!("({})", org)).dim()
            );
            print_folders(&children, cli.format)?;
        }
        Commands::Move { source, destination } => {
            let repo = load_repository(cli.data.as_ref(), config)?;
            let folders = repo.move_folder(&source, &destination)?;

            eprintln!(
                "{} {} {} {}",
                style("Moved").green().bold(),
                style(&source).cyan(),
                style("under").bold(),
                style(&destination).cyan()
            );
            print_folders(&folders, cli.format)?;
        }
        Commands::Config { set_org, set_data, set_log_level } => {
            let mut config_manager = config_manager;
            let changed = set_org.is_some() || set_data.is_some() || set_log_level.is_some();

            if let Some(org) = set_org {
                config_manager.set_default_org_id(org);
            }
            if let Some(path) = set_data {
                config_manager.set_fixture_path(Some(path));
            }
            if let Some(level) = set_log_level {
                config_manager.set_log_level(level);
            }
            if changed {
                config_manager.save().context("Failed to save configuration")?;
                eprintln!("{}", style("Configuration saved").green().bold());
            }
            show_config(&config_manager)?;
        }
    }

    Ok(())
}

/// Build the repository from the CLI override, the configured fixture, or
/// the bundled sample, in that order
fn load_repository(data: Option<&PathBuf>, config: &Config) -> anyhow::Result<FolderRepository> {
    let folders = match data.or(config.data.fixture_path.as_ref()) {
        Some(path) => fixture::load_from_path(path)
            .with_context(|| format!("Failed to load folders from {}", path.display()))?,
        None => fixture::sample_folders().context("Failed to load sample folders")?,
    };

    debug!(count = folders.len(), "Loaded folders");
    Ok(FolderRepository::new(folders))
}

fn print_folders(folders: &[Folder], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_pretty_json(folders)?),
        OutputFormat::Tree => print!("{}", format_tree(folders)),
    }
    Ok(())
}

fn show_config(config_manager: &ConfigManager) -> anyhow::Result<()> {
    println!(
        "{} {}",
        style("Config file:").bold(),
        config_manager.config_path().display()
    );
    println!("{}", toml::to_string_pretty(config_manager.config())?);
    Ok(())
}
