//! One-shot dispatch.
//!
//! - `run()`: logging setup, context wiring, dispatch (called by `main.rs`)
//! - `handle_*()`: per-command handlers that call the API and print the result
//!
//! Errors are returned to `main.rs`, which prints them and exits with status 1.
//! Without a subcommand the interactive shell takes over.

use super::render::{
    outcome_message, print_messages, render_contacts, render_matches, EMPTY_BOOK, NOTHING_FOUND,
};
use super::setup::{Cli, Commands, EditCommands};
use super::shell::Shell;
use clap::Parser;
use phonebook::api::{CmdResult, ConfigAction, PhonebookApi};
use phonebook::error::{PhonebookError, Result};
use phonebook::init::{initialize, PhonebookContext};
use phonebook::store::DataStore;
use std::io::{BufRead, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut ctx = initialize(cli.file)?;
    print_messages(&ctx.api.take_startup_messages());

    match cli.command {
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Show { name }) => handle_show(&ctx, &name.join(" ")),
        Some(Commands::Find { number }) => handle_find(&ctx, &number.join(" ")),
        Some(Commands::Add { name, number }) => handle_add(&mut ctx, &name, &number),
        Some(Commands::Edit { action }) => match action {
            EditCommands::Add { name, number } => handle_edit_add(&mut ctx, &name, &number),
            EditCommands::Delete { name, number } => {
                handle_edit_delete(&mut ctx, &name, &number)
            }
        },
        Some(Commands::Delete { name, yes }) => handle_delete(&mut ctx, &name.join(" "), yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_list(ctx: &PhonebookContext) -> Result<()> {
    let result = ctx.api.list()?;
    print!("{}", render_contacts(&result.listed_contacts, EMPTY_BOOK));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &PhonebookContext, name: &str) -> Result<()> {
    let result = ctx.api.show(name)?;
    print!("{}", render_contacts(&result.listed_contacts, NOTHING_FOUND));
    print_messages(&result.messages);
    Ok(())
}

fn handle_find(ctx: &PhonebookContext, number: &str) -> Result<()> {
    let result = ctx.api.find(number)?;
    print!("{}", render_matches(&result.number_matches));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut PhonebookContext, name: &str, number: &str) -> Result<()> {
    let result = ctx.api.add(name, number)?;
    print_change(&result);
    Ok(())
}

fn handle_edit_add(ctx: &mut PhonebookContext, name: &str, number: &str) -> Result<()> {
    let result = ctx.api.edit_add(name, number)?;
    print_change(&result);
    Ok(())
}

fn handle_edit_delete(ctx: &mut PhonebookContext, name: &str, number: &str) -> Result<()> {
    let result = ctx.api.edit_delete(name, number)?;
    print_change(&result);
    Ok(())
}

fn handle_delete(ctx: &mut PhonebookContext, name: &str, yes: bool) -> Result<()> {
    // Piped stdin is never asked, so scripts are not left hanging.
    let ask = ctx.config.confirm_delete && !yes && std::io::stdin().is_terminal();
    match delete_contact(&mut ctx.api, name, ask, confirm)? {
        Some(result) => print_change(&result),
        None => println!("Cancelled."),
    }
    Ok(())
}

/// Deletes `name`, asking through `confirm` first when `ask` is set.
/// An unknown name fails before anything is asked. `None` means cancelled.
fn delete_contact<S, F>(
    api: &mut PhonebookApi<S>,
    name: &str,
    ask: bool,
    confirm: F,
) -> Result<Option<CmdResult>>
where
    S: DataStore,
    F: FnOnce(&str) -> Result<bool>,
{
    if api.book().find_by_name(name).is_none() {
        return Err(PhonebookError::NameNotFound(name.to_string()));
    }
    if ask && !confirm(&format!("Delete '{}' and all its numbers? [y/N] ", name))? {
        return Ok(None);
    }
    api.delete(name).map(Some)
}

fn handle_config(
    ctx: &PhonebookContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), None) = (&result.config, &key) {
        for (k, v) in config.list_all() {
            println!("{} = {}", k, v);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_shell(ctx: &mut PhonebookContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let confirm_delete = ctx.config.confirm_delete;
    Shell::new(&mut ctx.api, stdin.lock(), stdout.lock(), confirm_delete).run()
}

fn print_change(result: &CmdResult) {
    if let Some(change) = &result.change {
        print_messages(&[outcome_message(change)]);
    }
    print_messages(&result.messages);
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
