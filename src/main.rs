//! micoo - mise cookbooks, picked interactively.
//!
//! Lists the cookbooks in the local repository, lets the user pick one and
//! a destination, and copies it there.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use micoo::core::{Config, Repository, OUTPUT_LOCATIONS};
use micoo::interactive::{TerminalPrompter, TracingLog, Workflow};
use micoo::{logging, MicooError, RunOutcome};

/// Pick a mise cookbook and drop it into your project
#[derive(Parser)]
#[command(name = "micoo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the usual lookup
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Cookbook repository directory (overrides the config file)
    #[arg(long, global = true, value_name = "DIR")]
    repository: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a cookbook and output location interactively (default)
    Interactive,

    /// List available cookbooks
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Write a cookbook without prompting
    New {
        /// Cookbook name
        name: String,

        /// Destination file (prints to stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Overwrite the destination if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Show the conventional output locations
    Locations {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print the cookbook repository directory
    Root,

    /// Print the log file path
    Log,

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        cmd_completions(shell);
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(repository) = cli.repository {
        config.repository.path = repository;
    }

    logging::init(&config.logging, cli.verbose)?;

    let repository = Repository::from_config(&config.repository);

    // Handle commands
    match cli.command {
        None | Some(Commands::Interactive) => cmd_interactive(&repository)?,
        Some(Commands::List { format }) => cmd_list(&repository, format)?,
        Some(Commands::New { name, output, force }) => {
            cmd_new(&repository, &name, output.as_deref(), force)?;
        }
        Some(Commands::Locations { format }) => cmd_locations(format)?,
        Some(Commands::Root) => println!("{}", repository.root().display()),
        Some(Commands::Log) => println!("{}", config.logging.file.display()),
        Some(Commands::Config { path }) => cmd_config(&config, path)?,
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}

/// Run the interactive workflow.
fn cmd_interactive(repository: &Repository) -> Result<()> {
    let mut prompter = TerminalPrompter::new();
    let outcome = Workflow::new(repository, &mut prompter, TracingLog, io::stdout()).run()?;
    tracing::debug!(?outcome, "interactive run finished");

    if let RunOutcome::CookbookNotFound(_) = outcome {
        std::process::exit(1);
    }
    Ok(())
}

/// List available cookbooks.
fn cmd_list(repository: &Repository, format: Format) -> Result<()> {
    let names = repository.list();

    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&names)?;
            println!("{json}");
        }
        Format::Text => {
            if names.is_empty() {
                println!("No cookbooks found in {}.", repository.root().display());
                return Ok(());
            }
            for name in &names {
                println!("{name}");
            }
            println!("\nTotal: {} cookbooks", names.len());
        }
    }

    Ok(())
}

/// Write one cookbook to a file or stdout.
fn cmd_new(repository: &Repository, name: &str, output: Option<&Path>, force: bool) -> Result<()> {
    let cookbook = repository.find(name)?;

    let Some(output) = output else {
        let content = cookbook.read()?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(&content).context("Failed to write to stdout")?;
        stdout.flush()?;
        return Ok(());
    };

    if output.exists() && !force {
        return Err(MicooError::OutputExists(output.to_path_buf()).into());
    }

    cookbook.write_to(output)?;
    tracing::info!("Successfully generated {name} cookbook to {}", output.display());
    println!("✓ Generated {name} cookbook at {}", output.display());

    Ok(())
}

/// Show the output location menu.
fn cmd_locations(format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&OUTPUT_LOCATIONS)?),
        Format::Text => {
            for location in &OUTPUT_LOCATIONS {
                println!("{location}");
            }
        }
    }
    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "micoo", &mut io::stdout());
}

/// Show configuration.
fn cmd_config(config: &Config, show_path: bool) -> Result<()> {
    if show_path {
        if let Some(path) = Config::global_config_path() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let toml = toml::to_string_pretty(config)?;
    println!("{toml}");

    Ok(())
}
