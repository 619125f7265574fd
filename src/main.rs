mod adapters;
mod commands;
mod configs;
mod container;
mod core;
mod errors;
mod usecases;
mod verbs;

use crate::adapters::TerminalInteraction;
use crate::commands::Cli;
use crate::core::ports::UserInteraction;
use crate::errors::CrossRepoError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = Cli::execute() {
        report_error(&TerminalInteraction::new(), &e);
        std::process::exit(1);
    }
}

fn report_error(ui: &dyn UserInteraction, error: &CrossRepoError) {
    ui.print_error(&format!("Error: {error}"));
}
