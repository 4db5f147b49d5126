//! Output renderers and formatting helpers for CLI commands.

use std::io::Write;

use anyhow::anyhow;
use clap::ValueEnum;
use mizan_i18n::{CoverageReport, LanguageCode};
use serde::Serialize;

use crate::context::{CliError, CliResult};

/// Output format for commands that render structured data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

/// Language summary used by `lang show` and `lang list`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LanguageRow {
    pub(crate) code: LanguageCode,
    pub(crate) label: &'static str,
    pub(crate) direction: &'static str,
    pub(crate) active: bool,
}

impl LanguageRow {
    pub(crate) fn new(language: LanguageCode, active: LanguageCode) -> Self {
        Self {
            code: language,
            label: language.label(),
            direction: language.direction().as_str(),
            active: language == active,
        }
    }
}

/// One resolved key for `translate`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TranslationRow {
    pub(crate) key: String,
    pub(crate) text: String,
}

pub(crate) fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    write_line(out, &text)
}

pub(crate) fn write_line(out: &mut dyn Write, line: &str) -> CliResult<()> {
    writeln!(out, "{line}").map_err(|err| CliError::failure(anyhow!("failed to write output: {err}")))
}

pub(crate) fn render_language(
    out: &mut dyn Write,
    row: &LanguageRow,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, row),
        OutputFormat::Table => {
            write_line(out, &format!("language: {} ({})", row.code, row.label))?;
            write_line(out, &format!("direction: {}", row.direction))
        }
    }
}

pub(crate) fn render_language_list(
    out: &mut dyn Write,
    rows: &[LanguageRow],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, &rows),
        OutputFormat::Table => {
            write_line(out, &format!("  {:<4} {:<4} LABEL", "CODE", "DIR"))?;
            for row in rows {
                let marker = if row.active { '*' } else { ' ' };
                write_line(
                    out,
                    &format!("{marker} {:<4} {:<4} {}", row.code, row.direction, row.label),
                )?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_translations(
    out: &mut dyn Write,
    rows: &[TranslationRow],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, &rows),
        OutputFormat::Table if rows.len() == 1 => write_line(out, &rows[0].text),
        OutputFormat::Table => {
            for row in rows {
                write_line(out, &format!("{}\t{}", row.key, row.text))?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_coverage(
    out: &mut dyn Write,
    report: &CoverageReport,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Table => {
            let languages: Vec<&str> = report.languages.iter().map(|l| l.code()).collect();
            write_line(out, &format!("keys: {}", report.total_keys))?;
            write_line(out, &format!("languages: {}", languages.join(", ")))?;
            if report.is_complete() {
                return write_line(out, "status: complete");
            }
            write_line(out, "status: incomplete")?;
            for gap in &report.gaps {
                write_line(
                    out,
                    &format!("missing in {} ({}): {}", gap.language, gap.missing.len(), gap.missing.join(", ")),
                )?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> CliResult<()>) -> String {
        let mut buffer = Vec::new();
        assert!(f(&mut buffer).is_ok());
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[test]
    fn language_list_marks_active_row() {
        let rows: Vec<LanguageRow> = LanguageCode::all()
            .into_iter()
            .map(|language| LanguageRow::new(language, LanguageCode::Ar))
            .collect();
        let text = render(|out| render_language_list(out, &rows, OutputFormat::Table));
        assert!(text.contains("* ar   rtl  العربية"));
        assert!(text.contains("  en   ltr  English"));
    }

    #[test]
    fn single_translation_prints_bare_text() {
        let rows = vec![TranslationRow {
            key: "home".into(),
            text: "Home".into(),
        }];
        assert_eq!(
            render(|out| render_translations(out, &rows, OutputFormat::Table)),
            "Home\n"
        );
    }

    #[test]
    fn json_output_uses_language_codes() {
        let row = LanguageRow::new(LanguageCode::En, LanguageCode::En);
        let text = render(|out| render_language(out, &row, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap_or_default();
        assert_eq!(value["code"], "en");
        assert_eq!(value["active"], true);
    }
}
