//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Venvup - environment bootstrapper
///
/// Prepare the local Python environment for the document-chat agent app.
#[derive(Parser, Debug)]
#[command(
    name = "venvup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Environment bootstrapper for the document-chat agent app",
    long_about = "Venvup checks the Python interpreter, creates and activates a virtual \
                  environment, installs the dependency manifest, creates working directories, \
                  materializes the secrets template and downloads the NLTK corpora the \
                  application needs. Running venvup without a subcommand is the same as \
                  running 'venvup setup'.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  venvup\n    \
                  venvup setup --force\n    \
                  venvup setup --dry-run\n    \
                  venvup doctor\n    \
                  venvup completions --shell zsh"
)]
pub struct Cli {
    /// Project root directory (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Enable verbose output (echo the commands being run)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full bootstrap sequence (the default)
    Setup(SetupArgs),

    /// Report readiness of each bootstrap artifact without changing anything
    Doctor,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Setup(SetupArgs::default())
    }
}

/// Arguments for the setup command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Full setup:\n    venvup setup\n\n\
                  Recreate the virtual environment from scratch:\n    venvup setup --force\n\n\
                  Skip the NLTK corpus download:\n    venvup setup --skip-corpora\n\n\
                  Show what would happen without doing it:\n    venvup setup --dry-run")]
pub struct SetupArgs {
    /// Delete and recreate the virtual environment
    #[arg(long)]
    pub force: bool,

    /// Skip downloading the NLTK corpora
    #[arg(long)]
    pub skip_corpora: bool,

    /// Print the planned actions without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    venvup completions --shell bash > ~/.bash_completion.d/venvup\n\n\
                  Generate zsh completions:\n    venvup completions --shell zsh > ~/.zfunc/_venvup\n\n\
                  Generate fish completions:\n    venvup completions --shell fish > ~/.config/fish/completions/venvup.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
