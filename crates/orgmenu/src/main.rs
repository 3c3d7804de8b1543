//! Binary entrypoint: generate the Org menu and key mapping script.
//!
//! Builds the stock Org features through the registration hook, optionally
//! merges user-defined entries, and writes the resulting command stream as a
//! sourceable script.

use std::{
    fs,
    io::{self, Write as _},
    process,
};

use clap::Parser;
use menu::register_menu;
use tracing_subscriber::EnvFilter;
use vim_cmd::ScriptWriter;

mod cli;
mod custom;
mod error;
mod menus;

use crate::{cli::Cli, custom::CustomEntries, error::Result};

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_spec()))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("orgmenu: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut vim = ScriptWriter::new();

    register_menu(menus::agenda, &mut vim)?;
    register_menu(menus::edit_structure, &mut vim)?;
    register_menu(menus::hyperlinks, &mut vim)?;
    register_menu(menus::todo, &mut vim)?;
    register_menu(menus::dates, &mut vim)?;

    if let Some(path) = &cli.config {
        let entries = CustomEntries::load(path)?;
        register_menu(|| entries.into_feature(), &mut vim)?;
    }

    let script = vim.finish();
    match &cli.out {
        Some(path) => fs::write(path, script)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(script.as_bytes())?;
        }
    }
    Ok(())
}
