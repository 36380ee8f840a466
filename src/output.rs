use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use shengxiao::card::{Theme, render_card};
use shengxiao::form::Submission;
use shengxiao::{Resolution, ValidationError};

use crate::config::OutputFormat;

#[derive(Serialize)]
struct JsonOut<'a> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Resolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sign: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationError>,
}

/// Prints (or writes) a submission. A failed resolution is returned as the error.
pub fn emit(
    submission: &Submission,
    format: OutputFormat,
    theme: Theme,
    output: Option<&Path>,
) -> Result<()> {
    let resolution = match (&submission.outcome, format) {
        (Ok(r), _) => r,
        (Err(e), OutputFormat::Json) => {
            print_json(&JsonOut {
                ok: false,
                data: None,
                caption: None,
                sign: None,
                emoji: None,
                error: Some(*e),
            })?;
            return Err((*e).into());
        }
        (Err(e), _) => return Err((*e).into()),
    };

    match format {
        OutputFormat::Text => {
            println!("{}", submission.caption());
            println!(
                "{} {} ({})",
                resolution.zodiac.emoji(),
                resolution.zodiac.sign(),
                resolution.zodiac.name()
            );
        }
        OutputFormat::Json => {
            let result = resolution.result();
            print_json(&JsonOut {
                ok: true,
                data: Some(resolution),
                caption: Some(submission.caption()),
                sign: Some(result.sign),
                emoji: Some(result.emoji),
                error: None,
            })?;
        }
        OutputFormat::Svg => {
            let svg = render_card(resolution, &submission.caption(), theme);
            match output {
                Some(path) => {
                    fs::write(path, svg)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{svg}"),
            }
        }
    }

    Ok(())
}

fn print_json(out: &JsonOut<'_>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(out)?);
    Ok(())
}
