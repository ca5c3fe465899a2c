mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "foundlio")]
#[command(version, about = "Marketing site generator for local service businesses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize a new site directory
    Init {
        /// Path to create the site directory in
        path: PathBuf,

        /// Vertical to seed content from (hvac, plumbing, electrical,
        /// cleaning, roofing, landscaping)
        #[arg(short, long, default_value = "hvac")]
        vertical: String,
    },

    /// Validate a site directory
    Validate {
        /// Path to site directory
        path: PathBuf,
    },

    /// Print one resolved content category as JSON
    Resolve {
        /// Path to site directory
        path: PathBuf,

        /// Content category (headlines, services, faqs, testimonials,
        /// works, posts, areas, content)
        category: String,

        /// Preview vertical to resolve against instead of the
        /// deployed one
        #[arg(short, long)]
        vertical: Option<String>,
    },

    /// Build the static site
    Build {
        /// Path to site directory
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Preview site locally with hot reload and a design panel
    Preview {
        /// Path to site directory
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Init { path, vertical } => commands::init::run(path, &vertical).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Resolve {
            path,
            category,
            vertical,
        } => commands::resolve::run(path, &category, vertical.as_deref()).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "foundlio", &mut io::stdout());
            Ok(())
        }
    }
}
