use std::path::PathBuf;

use clap::{Args, Parser};
use shengxiao::InputMode;
use shengxiao::card::Theme;

use crate::config::OutputFormat;

/// Chinese zodiac lookup by birth date or age.
#[derive(Parser)]
#[command(name = "shengxiao", version, about = "Chinese zodiac lookup by birth date or age")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./shengxiao.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output format; overrides the config file.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Card theme for svg output; overrides the config file.
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Date to treat as today for age lookups (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<String>,

    /// Write svg output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Exactly one of the two inputs.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Birth date, YYYY-MM-DD.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Age in whole years, 0-150.
    #[arg(short, long, allow_hyphen_values = true)]
    pub age: Option<String>,
}

impl InputArgs {
    pub fn mode_and_raw(&self) -> (InputMode, &str) {
        match (&self.date, &self.age) {
            (Some(date), _) => (InputMode::ByDate, date.as_str()),
            (None, Some(age)) => (InputMode::ByAge, age.as_str()),
            // clap's group guarantees one is set
            (None, None) => (InputMode::ByDate, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn date_and_age_are_exclusive() {
        let res = Cli::try_parse_from(["shengxiao", "--date", "2024-02-20", "--age", "3"]);
        assert!(res.is_err());
    }

    #[test]
    fn one_input_is_required() {
        assert!(Cli::try_parse_from(["shengxiao"]).is_err());
    }

    #[test]
    fn negative_age_reaches_validator() {
        let cli = Cli::try_parse_from(["shengxiao", "--age", "-1"]).unwrap();
        assert_eq!(cli.input.mode_and_raw(), (InputMode::ByAge, "-1"));
    }

    #[test]
    fn date_selects_date_mode() {
        let cli = Cli::try_parse_from(["shengxiao", "-d", "2024-02-20", "-f", "json"]).unwrap();
        assert_eq!(cli.input.mode_and_raw(), (InputMode::ByDate, "2024-02-20"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
