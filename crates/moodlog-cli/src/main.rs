//! Moodlog CLI - a daily mood journal for the terminal
//!
//! This is the command-line interface for Moodlog. It records one mood
//! entry per day and renders calendars, statistics and quotes from the
//! core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use moodlog_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{calendar, entries, init, misc, moods, quote, stats};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let error_msg = format!("{}", e);
        let (message, hint) = extract_error_hint(&error_msg);

        print_error(&ui_ctx, message, hint);
        std::process::exit(errors::exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn extract_error_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(error[idx + 1..].trim_start_matches("Hint:").trim())),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args)?,
        Some(Commands::Log(args)) => entries::handle_log(ctx, args)?,
        Some(Commands::Edit(args)) => entries::handle_edit(ctx, args)?,
        Some(Commands::Delete(args)) => entries::handle_delete(ctx, args)?,
        Some(Commands::Show(args)) => entries::handle_show(ctx, args)?,
        Some(Commands::List(args)) => entries::handle_list(ctx, args)?,
        Some(Commands::Calendar(args)) => calendar::handle_calendar(ctx, args)?,
        Some(Commands::Stats(args)) => stats::handle_stats(ctx, args)?,
        Some(Commands::Quote(args)) => quote::handle_quote(ctx, args)?,
        Some(Commands::Moods(args)) => moods::handle_moods(ctx, args)?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        None => {
            println!("Moodlog v{}", VERSION);
            println!("\nQuickstart:");
            println!("  moodlog init");
            println!("  moodlog log --mood happy --text \"Good day\"");
            println!("  moodlog calendar");
            println!("  moodlog stats");
            println!("  moodlog quote");
            println!("\nRun `moodlog --help` for full usage.");
        }
    }

    Ok(())
}
