// src/bin/logreport.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use logreport_core::cli::Cli;
use logreport_core::engine::Engine;
use logreport_core::reporting;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let report = Engine::new(cli.report).scan(&cli.filepath)?;
    if cli.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report);
    }
    Ok(())
}
