mod cli;
mod config;
mod logging;
mod output;

use std::process;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use shengxiao::InputMode;
use shengxiao::form::{FormEvent, FormState};
use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, parse_today};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let today = match cli.today.as_deref() {
        Some(raw) => parse_today(raw)?,
        None => config.today()?.unwrap_or_else(|| Local::now().date_naive()),
    };
    let format = cli.format.unwrap_or(config.output.format);
    let theme = cli.theme.unwrap_or(config.output.theme);
    debug!(%today, ?format, ?theme, "effective settings");

    let (mode, raw) = cli.input.mode_and_raw();
    let field = match mode {
        InputMode::ByDate => FormEvent::EditBirthDate(raw.to_owned()),
        InputMode::ByAge => FormEvent::EditAge(raw.to_owned()),
    };
    let state = FormState::replay([
        FormEvent::SelectMode(mode),
        field,
        FormEvent::Submit { today },
    ]);

    match &state.submission {
        Some(submission) => output::emit(submission, format, theme, cli.output.as_deref()),
        None => anyhow::bail!("nothing was submitted"),
    }
}
