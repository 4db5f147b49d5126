//! Language preference commands.

use std::io::Write;

use mizan_i18n::LanguageCode;
use tracing::info;

use crate::context::{AppContext, CliError, CliResult};
use crate::output::{LanguageRow, render_language, render_language_list};

pub(crate) fn handle_lang_show(ctx: &AppContext, out: &mut dyn Write) -> CliResult<()> {
    let store = ctx.open_store();
    let current = store.current_language();
    render_language(out, &LanguageRow::new(current, current), ctx.output)
}

pub(crate) fn handle_lang_list(ctx: &AppContext, out: &mut dyn Write) -> CliResult<()> {
    let store = ctx.open_store();
    let current = store.current_language();
    let rows: Vec<LanguageRow> = store
        .available_languages()
        .into_iter()
        .map(|language| LanguageRow::new(language, current))
        .collect();
    render_language_list(out, &rows, ctx.output)
}

pub(crate) fn handle_lang_set(ctx: &AppContext, code: &str, out: &mut dyn Write) -> CliResult<()> {
    let mut store = ctx.open_store();
    let accepted = match LanguageCode::from_lang_tag(code) {
        Some(language) => store.try_set_language(language).map_err(|err| {
            CliError::failure(anyhow::Error::new(err).context(format!(
                "failed to save language preference to {}",
                ctx.prefs_path.display()
            )))
        })?,
        None => false,
    };
    if !accepted {
        let supported: Vec<&str> = store
            .available_languages()
            .into_iter()
            .map(LanguageCode::code)
            .collect();
        return Err(CliError::validation(format!(
            "unsupported language code '{code}' (supported: {}); preference unchanged",
            supported.join(", ")
        )));
    }
    let current = store.current_language();
    info!(language = %current, path = %ctx.prefs_path.display(), "language preference saved");
    render_language(out, &LanguageRow::new(current, current), ctx.output)
}
