//! folio CLI - a personal portfolio in the terminal
//!
//! This is the main entry point for the `folio` command-line tool, which provides:
//! - Project listing with category filters and case-study detail
//! - Profile, experience and skills (`about`)
//! - Contact form validation (`contact`)
//! - A header clock in any IANA timezone (`clock`)
//! - An interactive, mouse-aware terminal portfolio (`tui`)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use folio_core::locale::Locale;
use folio_core::motion::MotionPreference;

mod commands;
mod tracing_setup;
mod tui;

use commands::{GlobalOpts, Session};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    about = "Browse a developer portfolio from the terminal",
    long_about = "Browse projects, case studies, profile and contact form of a developer \
                  portfolio. Content is bundled; point --content at your own TOML to replace it."
)]
struct Cli {
    /// Config file (default: ~/.folio/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Portfolio content TOML replacing the bundled content
    #[arg(long, global = true, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Display language for messages (en, tr); overrides FOLIO_LOCALE and config
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List projects, newest first, optionally filtered by category
    Projects(commands::projects::ProjectsArgs),
    /// Show one project's case study
    Project(commands::projects::ProjectArgs),
    /// List the category filter tabs
    Categories,
    /// Newest project of each domain (backend, AI, robotics, Unity)
    Featured,
    /// Profile, education, experience and skills
    About,
    /// Validate a contact form submission
    Contact(commands::contact::ContactArgs),
    /// Print the current time
    Clock(commands::clock::ClockArgs),
    /// Interactive terminal portfolio
    Tui,
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the screen; only log there when asked to
    let is_tui = matches!(cli.command, Commands::Tui);
    if !is_tui || cli.debug {
        tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();
    }

    if let Commands::Completions(args) = &cli.command {
        return run_completions(args);
    }

    let opts = GlobalOpts {
        config: cli.config.clone(),
        content: cli.content.clone(),
        locale: cli.locale,
    };
    let session = Session::load(&opts)?;

    match cli.command {
        Commands::Projects(args) => commands::run_projects(args, &session)?,
        Commands::Project(args) => commands::run_project(args, &session)?,
        Commands::Categories => commands::run_categories(&session)?,
        Commands::Featured => commands::run_featured(&session)?,
        Commands::About => commands::run_about(&session)?,
        Commands::Contact(args) => commands::run_contact(args, &session)?,
        Commands::Clock(args) => commands::run_clock(args, &session).await?,
        Commands::Tui => run_tui(session)?,
        Commands::Completions(_) => {}
    }
    Ok(())
}

fn run_tui(session: Session) -> Result<()> {
    let motion = MotionPreference::new(session.config.reduced_motion());
    let zone = session.config.timezone().context("Invalid timezone in config")?;
    let app = tui::App::new(session.portfolio, session.locale, motion, zone);
    tui::run(app)
}

fn run_completions(args: &CompletionsArgs) -> Result<()> {
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
