//! Duty roster lookup for the unit's monthly schedule.
//!
//! Reads the roster spreadsheet, resolves a surname to its roster identity
//! and prints the upcoming duties for the rest of the current month.

mod cli;
mod config;
mod duties;
mod roster;
mod text;

use std::io;
use std::process;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;

use crate::cli::Cli;
use crate::config::Config;
use crate::duties::DutyCodeTable;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.roster, cli.duties)?;

    let roster = roster::load_roster(&config.roster_path)?;
    let index = roster::build_surname_index(&roster)?;
    let codes = DutyCodeTable::from_path(&config.duties_path)?;
    log::info!("{} roster rows, {} duty codes", roster.len(), codes.len());

    let surname: String = match cli.surname {
        Some(surname) => surname,
        None => Input::new()
            .with_prompt("Αλτ, τις ει; (επώνυμο)")
            .interact_text()?,
    };

    match index.get(&text::normalize_key(&surname)) {
        Some(identity) => {
            let mut stdout = io::stdout().lock();
            duties::scan_duties(
                identity,
                &roster,
                &codes,
                Local::now().date_naive(),
                &mut stdout,
            )?;
        }
        // A missing surname is an answer, not a process failure.
        None => {
            let message = format!("Σφάλμα: Ο στρατιώτης με επώνυμο \"{surname}\" δε βρέθηκε.");
            println!("{}", message.red());
        }
    }

    Ok(())
}
