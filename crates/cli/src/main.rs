mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use commands::show::Target;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sitemeta")]
#[command(version, about = "Site identity and per-page SEO metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Write a site.toml with the built-in values
    Init {
        /// Directory to write site.toml into
        path: PathBuf,

        /// Site name
        #[arg(long)]
        name: Option<String>,

        /// Production URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate site configuration and preview images
    Validate {
        /// Directory containing site.toml
        path: PathBuf,

        /// Public directory the image paths resolve against (default: <path>/static)
        #[arg(long)]
        public: Option<PathBuf>,
    },

    /// Print registry contents as JSON
    Show {
        /// site.toml to load (built-in values when omitted)
        #[arg(short, long, global = true)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: ShowCommand,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
enum ShowCommand {
    /// Site identity
    Site,

    /// SEO defaults
    Defaults,

    /// Every page entry
    Pages,

    /// One page entry
    Page {
        /// home, about, pricing, dashboard, login or signup
        key: String,
    },

    /// One preview image path
    Image {
        /// default, home, pricing, about, dashboard, login or signup
        key: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init { path, name, url } => commands::init::run(path, name, url),
        Command::Validate { path, public } => commands::validate::run(path, public),
        Command::Show { config, command } => {
            let target = match command {
                ShowCommand::Site => Target::Site,
                ShowCommand::Defaults => Target::Defaults,
                ShowCommand::Pages => Target::Pages,
                ShowCommand::Page { key } => Target::Page(key),
                ShowCommand::Image { key } => Target::Image(key),
            };
            commands::show::run(config.as_deref(), target)
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "sitemeta", &mut io::stdout());
            Ok(())
        }
    }
}
