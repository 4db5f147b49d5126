//! Translation lookup command.

use std::io::Write;

use mizan_i18n::LanguageCode;

use crate::context::{AppContext, CliError, CliResult};
use crate::output::{TranslationRow, render_translations};

pub(crate) fn handle_translate(
    ctx: &AppContext,
    keys: &[String],
    lang: Option<&str>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let store = ctx.open_store();
    let language = match lang {
        Some(tag) => LanguageCode::from_lang_tag(tag)
            .filter(|language| store.catalog().contains(*language))
            .ok_or_else(|| CliError::validation(format!("unsupported language code '{tag}'")))?,
        None => store.current_language(),
    };
    let rows: Vec<TranslationRow> = keys
        .iter()
        .map(|key| TranslationRow {
            key: key.clone(),
            text: store.catalog().resolve(language, key).to_string(),
        })
        .collect();
    render_translations(out, &rows, ctx.output)
}
