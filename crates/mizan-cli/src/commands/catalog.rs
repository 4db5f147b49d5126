//! Catalog coverage command.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use mizan_i18n::{LanguageCode, TranslationCatalog, TranslationTable};
use tracing::warn;

use crate::context::{AppContext, CliError, CliResult};
use crate::output::render_coverage;

pub(crate) fn handle_catalog_check(
    ctx: &AppContext,
    dir: Option<&Path>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let catalog = match dir {
        Some(dir) => load_dir(dir)?,
        None => TranslationCatalog::builtin().as_ref().clone(),
    };
    let report = catalog.coverage();
    render_coverage(out, &report, ctx.output)?;
    if report.is_complete() {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "catalog incomplete: {} language(s) missing keys",
            report.gaps.len()
        )))
    }
}

/// Load `<code>.json` tables from `dir`; absent files leave the language out.
fn load_dir(dir: &Path) -> CliResult<TranslationCatalog> {
    let mut catalog = TranslationCatalog::new();
    for language in LanguageCode::all() {
        let path = dir.join(format!("{}.json", language.code()));
        if !path.exists() {
            warn!(language = %language, path = %path.display(), "translation table not found");
            continue;
        }
        let table = TranslationTable::from_json_file(language, &path)
            .with_context(|| format!("failed to load {}", path.display()))
            .map_err(CliError::failure)?;
        catalog.insert(language, table);
    }
    if catalog.languages().is_empty() {
        return Err(CliError::validation(format!(
            "no translation tables found in {}",
            dir.display()
        )));
    }
    Ok(catalog)
}
