//! `yourfavs check`: report accept/reject for each candidate.

use std::io::{self, BufRead, IsTerminal};

use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, info};

use yourfavs_core::domain::{RedirectValidator, Rejection};

use crate::{
    cli::CheckArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// The outcome for one candidate, as printed in JSON mode.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct Verdict<'a> {
    candidate: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<Rejection>,
}

impl<'a> Verdict<'a> {
    fn of(candidate: &'a str) -> Self {
        match RedirectValidator::check(Some(candidate)) {
            Ok(target) => Self {
                candidate,
                valid: true,
                target: Some(target),
                reason: None,
            },
            Err(reason) => Self {
                candidate,
                valid: false,
                target: None,
                reason: Some(reason),
            },
        }
    }

    /// `✓ "<candidate>"` or `✗ "<candidate>" (<code>: <reason>)`.
    fn line(&self, color: bool) -> String {
        match self.reason {
            None if color => format!("{} {:?}", "\u{2713}".green().bold(), self.candidate),
            None => format!("\u{2713} {:?}", self.candidate),
            Some(reason) => {
                let text = format!("{:?} ({}: {reason})", self.candidate, reason.as_str());
                if color {
                    format!("{} {}", "\u{2717}".red().bold(), text.red())
                } else {
                    format!("\u{2717} {text}")
                }
            }
        }
    }
}

pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<()> {
    let candidates = if args.candidates.is_empty() {
        read_stdin()?
    } else {
        args.candidates
    };

    if candidates.is_empty() {
        return Err(CliError::InvalidInput {
            message: "no redirect candidates given".into(),
            source: None,
        });
    }

    let verdicts: Vec<Verdict<'_>> = candidates.iter().map(|c| Verdict::of(c)).collect();
    let rejected = verdicts.iter().filter(|v| !v.valid).count();

    for verdict in &verdicts {
        debug!(candidate = ?verdict.candidate, valid = verdict.valid, reason = ?verdict.reason, "Checked candidate");
    }
    info!(total = verdicts.len(), rejected, "Check finished");

    if output.is_json() {
        output.json(&verdicts)?;
    } else {
        for verdict in &verdicts {
            output.data(&verdict.line(output.supports_color()))?;
        }
        output.info(&format!("{} checked, {rejected} rejected", verdicts.len()))?;
    }

    if args.strict && rejected > 0 {
        return Err(CliError::RejectedTargets {
            rejected,
            total: verdicts.len(),
        });
    }

    Ok(())
}

/// One candidate per line.  Refuses to block on an interactive terminal.
fn read_stdin() -> CliResult<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    stdin
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .with_cli_context(|| "Failed to read candidates from stdin")
}
