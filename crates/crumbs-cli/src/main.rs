//! Crumbs CLI - named shell command templates, optionally encrypted
//!
//! This is the command-line interface for Crumbs. It resolves configuration,
//! hands one operation to the core library and maps the result to an exit
//! code.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{crumbs, misc};
use crate::constants::{exit_codes, LOG_ENV};
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing();
    let ctx = AppContext::new(&cli);

    let code = match run(&ctx) {
        Ok(code) => code,
        Err(e) => {
            let err = CliError::from_anyhow(&e);
            print_error(&ctx.ui_context(false), err.message(), err.hint());
            err.exit_code()
        }
    };
    std::process::exit(code);
}

/// Log to stderr, filtered by `CRUMBS_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(ctx: &AppContext) -> anyhow::Result<i32> {
    match &ctx.cli().command {
        Commands::List(args) => crumbs::handle_list(ctx, args)?,
        Commands::Insert(args) => crumbs::handle_insert(ctx, args)?,
        Commands::Show(args) => crumbs::handle_show(ctx, args)?,
        Commands::Exec(args) => return crumbs::handle_exec(ctx, args),
        Commands::Edit(args) => crumbs::handle_edit(ctx, args)?,
        Commands::Delete(args) => crumbs::handle_delete(ctx, args)?,
        Commands::Encrypt(args) => crumbs::handle_encrypt(ctx, args)?,
        Commands::Decrypt(args) => crumbs::handle_decrypt(ctx, args)?,
        Commands::Completions { shell } => misc::handle_completions(*shell)?,
    }
    Ok(exit_codes::SUCCESS)
}
