//! Sanitization preview command.

use std::io::Write;

use clap::ValueEnum;
use mizan_forms::sanitize::{SanitizeProfile, contains_forbidden_patterns, sanitize};
use serde::Serialize;

use crate::context::{AppContext, CliResult};
use crate::output::{OutputFormat, write_json, write_line};

/// Field profile selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ProfileArg {
    FreeText,
    Name,
    Contact,
}

impl From<ProfileArg> for SanitizeProfile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::FreeText => Self::FreeText,
            ProfileArg::Name => Self::Name,
            ProfileArg::Contact => Self::Contact,
        }
    }
}

#[derive(Serialize)]
struct SanitizeReport<'a> {
    profile: SanitizeProfile,
    input: &'a str,
    output: String,
    flagged: bool,
}

pub(crate) fn handle_sanitize(
    ctx: &AppContext,
    text: &str,
    profile: ProfileArg,
    out: &mut dyn Write,
) -> CliResult<()> {
    let profile = SanitizeProfile::from(profile);
    let report = SanitizeReport {
        profile,
        input: text,
        output: sanitize(text, profile),
        flagged: contains_forbidden_patterns(text),
    };
    match ctx.output {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Table => write_line(out, &report.output),
    }
}
