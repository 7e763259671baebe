use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crumbs_core::VERSION;

/// Crumbs - named shell command templates, optionally encrypted
#[derive(Parser)]
#[command(name = "crumbs")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "CRUMBS_STORE")]
    pub store: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "CRUMBS_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only list crumbs whose name starts with this prefix
    #[arg(value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Show each crumb's command next to its name
    #[arg(short, long)]
    pub detailed: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `insert` command
#[derive(Args)]
pub struct InsertArgs {
    /// Encrypt the command before storing it
    #[arg(short, long)]
    pub encrypt: bool,

    /// Name of the new crumb
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Command template; multiple words are joined with spaces
    #[arg(value_name = "CMDLINE", required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub cmdline: Vec<String>,
}

/// Arguments for the `exec` command
#[derive(Args)]
pub struct ExecArgs {
    /// Print the rendered command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Name of the crumb to run
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Positional arguments passed to the template
    #[arg(value_name = "ARG", num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// A command that only takes a crumb name
#[derive(Args)]
pub struct NameArgs {
    /// Crumb name
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored crumbs
    #[command(alias = "ls")]
    List(ListArgs),

    /// Store a new crumb
    Insert(InsertArgs),

    /// Print a crumb's command template
    Show(NameArgs),

    /// Render a crumb with arguments and run it through `sh -c`
    Exec(ExecArgs),

    /// Edit a crumb in $EDITOR, creating it if missing
    Edit(NameArgs),

    /// Delete a crumb
    #[command(alias = "rm")]
    Delete(NameArgs),

    /// Encrypt a plaintext crumb
    Encrypt(NameArgs),

    /// Decrypt an encrypted crumb
    Decrypt(NameArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
